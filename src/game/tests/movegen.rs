//! Geometric legality and move generation tests.

use crate::game::{Color, Piece, Position, PositionBuilder, Square};

#[test]
fn same_side_destination_is_never_legal() {
    let position = Position::new_game();
    for (from, color, _) in position.pieces() {
        for (to, other_color, _) in position.pieces() {
            if color == other_color && from != to {
                assert!(
                    !position.is_legal_piece_move(from, to),
                    "{from}->{to} landed on a same-side piece"
                );
            }
        }
    }
}

#[test]
fn empty_source_and_null_move_are_illegal() {
    let position = Position::new_game();
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(3, 4)));
    assert!(!position.is_legal_piece_move(Square(6, 4), Square(6, 4)));
    assert!(!position.is_legal_piece_move(Square(6, 4), Square(8, 4)));
}

#[test]
fn pawn_single_and_double_push() {
    let position = Position::new_game();
    for col in 0..8 {
        assert!(position.is_legal_piece_move(Square(6, col), Square(5, col)));
        assert!(position.is_legal_piece_move(Square(6, col), Square(4, col)));
        assert!(!position.is_legal_piece_move(Square(6, col), Square(3, col)));
        assert!(position.is_legal_piece_move(Square(1, col), Square(2, col)));
        assert!(position.is_legal_piece_move(Square(1, col), Square(3, col)));
    }
}

#[test]
fn pawn_double_push_requires_both_squares_empty() {
    // Blocker on the intermediate square
    let position = PositionBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::Pawn)
        .piece(Square(5, 4), Color::Black, Piece::Knight)
        .build();
    assert!(!position.is_legal_piece_move(Square(6, 4), Square(4, 4)));
    assert!(!position.is_legal_piece_move(Square(6, 4), Square(5, 4)));

    // Blocker on the destination square
    let position = PositionBuilder::new()
        .piece(Square(6, 4), Color::White, Piece::Pawn)
        .piece(Square(4, 4), Color::Black, Piece::Knight)
        .build();
    assert!(!position.is_legal_piece_move(Square(6, 4), Square(4, 4)));
    assert!(position.is_legal_piece_move(Square(6, 4), Square(5, 4)));
}

#[test]
fn pawn_double_push_only_from_start_row() {
    let position = PositionBuilder::new()
        .piece(Square(5, 4), Color::White, Piece::Pawn)
        .build();
    assert!(position.is_legal_piece_move(Square(5, 4), Square(4, 4)));
    assert!(!position.is_legal_piece_move(Square(5, 4), Square(3, 4)));
}

#[test]
fn pawn_captures_diagonally_only() {
    let position = PositionBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Pawn)
        .piece(Square(3, 3), Color::Black, Piece::Pawn)
        .piece(Square(3, 4), Color::Black, Piece::Pawn)
        .build();
    // Diagonal capture onto an occupied square
    assert!(position.is_legal_piece_move(Square(4, 4), Square(3, 3)));
    // Diagonal without a target is not a move
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(3, 5)));
    // Straight ahead is blocked, and never a capture
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(3, 4)));
    // Pawns do not move backwards
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(5, 4)));
}

#[test]
fn rook_moves_along_rank_and_file() {
    let position = PositionBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .build();
    assert!(position.is_legal_piece_move(Square(4, 0), Square(4, 7)));
    assert!(position.is_legal_piece_move(Square(4, 0), Square(0, 0)));
    assert!(!position.is_legal_piece_move(Square(4, 0), Square(3, 1)));
}

#[test]
fn path_blocking_flips_slider_legality() {
    let open = PositionBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::White, Piece::Bishop)
        .piece(Square(7, 7), Color::White, Piece::Queen)
        .build();
    assert!(open.is_legal_piece_move(Square(4, 0), Square(4, 7)));
    assert!(open.is_legal_piece_move(Square(0, 4), Square(3, 7)));
    assert!(open.is_legal_piece_move(Square(7, 7), Square(0, 0)));

    let blocked = PositionBuilder::new()
        .piece(Square(4, 0), Color::White, Piece::Rook)
        .piece(Square(0, 4), Color::White, Piece::Bishop)
        .piece(Square(7, 7), Color::White, Piece::Queen)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .piece(Square(2, 6), Color::Black, Piece::Pawn)
        .piece(Square(3, 3), Color::Black, Piece::Pawn)
        .build();
    assert!(!blocked.is_legal_piece_move(Square(4, 0), Square(4, 7)));
    assert!(!blocked.is_legal_piece_move(Square(0, 4), Square(3, 7)));
    assert!(!blocked.is_legal_piece_move(Square(7, 7), Square(0, 0)));
    // Capturing the blocker itself stays legal
    assert!(blocked.is_legal_piece_move(Square(4, 0), Square(4, 3)));
}

#[test]
fn knight_ignores_blockers() {
    let position = Position::new_game();
    // Knights jump over the pawn wall from the initial position
    assert!(position.is_legal_piece_move(Square(7, 1), Square(5, 0)));
    assert!(position.is_legal_piece_move(Square(7, 1), Square(5, 2)));
    assert!(!position.is_legal_piece_move(Square(7, 1), Square(5, 1)));
    // Rook, bishop and queen are all walled in
    assert!(!position.is_legal_piece_move(Square(7, 0), Square(5, 0)));
    assert!(!position.is_legal_piece_move(Square(7, 2), Square(5, 4)));
    assert!(!position.is_legal_piece_move(Square(7, 3), Square(5, 3)));
}

#[test]
fn king_moves_one_square_any_direction() {
    let position = PositionBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::King)
        .build();
    for drow in -1isize..=1 {
        for dcol in -1isize..=1 {
            if drow == 0 && dcol == 0 {
                continue;
            }
            let to = Square(4, 4).offset(drow, dcol).unwrap();
            assert!(position.is_legal_piece_move(Square(4, 4), to));
        }
    }
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(4, 6)));
    assert!(!position.is_legal_piece_move(Square(4, 4), Square(2, 4)));
}

#[test]
fn initial_position_has_twenty_moves_per_side() {
    let position = Position::new_game();
    assert_eq!(position.generate_moves(Color::White).len(), 20);
    assert_eq!(position.generate_moves(Color::Black).len(), 20);
}

#[test]
fn generation_order_is_deterministic() {
    let position = Position::new_game();
    assert_eq!(
        position.generate_moves(Color::White),
        position.generate_moves(Color::White)
    );
}
