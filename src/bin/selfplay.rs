//! Self-play demo: two searchers play each other from the initial
//! position and print the board after every move.

use pocket_chess::game::{Color, GameStatus, Position, Searcher};

fn main() {
    let max_moves: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(40);
    let depth: u32 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    let white = Searcher::new(Color::White);
    let black = Searcher::new(Color::Black);
    let mut position = Position::new_game();

    for ply in 0..max_moves {
        match position.game_status() {
            GameStatus::InProgress | GameStatus::Check(_) => {}
            status => {
                println!("{status}");
                return;
            }
        }

        let side = position.side_to_move();
        let searcher = if side == Color::White { white } else { black };
        let Some(mv) = searcher.choose_move(&position, side, depth) else {
            println!("{side} has no move");
            return;
        };
        position = position
            .apply_move(mv.from, mv.to, None)
            .expect("searcher returned an illegal move");

        println!("{}. {side}: {mv}", ply / 2 + 1);
        println!("{position}");
    }
    println!("stopped after {max_moves} plies: {}", position.game_status());
}
