//! Persistence blob tests.

use crate::game::{Color, Piece, Position, PositionBuilder, SavedGame, Square};

#[test]
fn record_format_matches_the_stored_blob() {
    let position = PositionBuilder::new()
        .piece(Square(6, 0), Color::White, Piece::Pawn)
        .build();
    assert_eq!(position.to_save_string(), "6,0,Pawn,true");

    let position = PositionBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(6, 0), Color::White, Piece::Pawn)
        .build();
    assert_eq!(position.to_save_string(), "0,4,King,false;6,0,Pawn,true");
}

#[test]
fn initial_position_round_trips() {
    let position = Position::new_game();
    let restored = Position::from_save_string(&position.to_save_string(), Color::White);
    assert_eq!(position, restored);
}

#[test]
fn side_to_move_is_stored_separately() {
    let mut position = Position::new_game();
    position.set_side_to_move(Color::Black);
    let saved = SavedGame::capture(&position);
    assert!(!saved.white_to_move);
    assert_eq!(saved.restore(), position);
}

#[test]
fn round_trips_after_moves_including_promotion() {
    let position = PositionBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 7), Color::Black, Piece::King)
        .build();
    let promoted = position
        .apply_move(Square(1, 0), Square(0, 0), Some(Piece::Rook))
        .unwrap();
    let restored = SavedGame::capture(&promoted).restore();
    assert_eq!(restored, promoted);
    assert_eq!(restored.piece_at(Square(0, 0)), Some((Color::White, Piece::Rook)));
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let blob = "3,4,Pawn,true;\
                not-a-record;\
                9,9,Rook,false;\
                0,0,King,maybe;\
                2,x,Bishop,true;\
                1,1,Wizard,false;\
                1,1,Queen,false";
    let position = Position::from_save_string(blob, Color::Black);
    assert_eq!(position.piece_count(), 2);
    assert_eq!(position.piece_at(Square(3, 4)), Some((Color::White, Piece::Pawn)));
    assert_eq!(position.piece_at(Square(1, 1)), Some((Color::Black, Piece::Queen)));
    assert_eq!(position.side_to_move(), Color::Black);
}

#[test]
fn empty_blob_is_an_empty_board() {
    let position = Position::from_save_string("", Color::White);
    assert_eq!(position.piece_count(), 0);
}
