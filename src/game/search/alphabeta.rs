//! Recursive minimax with alpha-beta pruning.

use super::{evaluate, Color, Position, Searcher};

impl Searcher {
    /// Score `position` with `side` to choose, searching `depth` plies.
    ///
    /// The node maximizes when `side` is the computer's color and
    /// minimizes otherwise. Terminal nodes (depth exhausted, or no safe
    /// move for `side`) return the static material evaluation. Pruning
    /// cuts a branch as soon as `beta <= alpha`; with no move-ordering
    /// heuristic the cut is only as effective as the fixed enumeration
    /// order allows, but the returned score is exact either way.
    pub(crate) fn search(
        &self,
        position: &Position,
        side: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 {
            return evaluate(position, self.ai_side());
        }

        let moves: Vec<_> = position
            .generate_moves(side)
            .into_iter()
            .filter(|mv| position.is_move_safe(mv.from, mv.to))
            .collect();
        if moves.is_empty() {
            return evaluate(position, self.ai_side());
        }

        let maximizing = side == self.ai_side();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let Ok(child) = position.apply_move(mv.from, mv.to, None) else {
                continue;
            };
            let score = self.search(&child, side.opponent(), depth - 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
