//! Position: piece placement plus side to move.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

use super::error::MoveError;
use super::{Color, Piece, Square, PROMOTION_PIECES};

/// Standard initial placement, shared by every new game.
static INITIAL_LAYOUT: Lazy<BTreeMap<Square, (Color, Piece)>> = Lazy::new(|| {
    let back_row = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
    let mut pieces = BTreeMap::new();
    for (col, piece) in back_row.iter().enumerate() {
        pieces.insert(Square(0, col), (Color::Black, *piece));
        pieces.insert(Square(1, col), (Color::Black, Piece::Pawn));
        pieces.insert(Square(6, col), (Color::White, Piece::Pawn));
        pieces.insert(Square(7, col), (Color::White, *piece));
    }
    pieces
});

/// A full board snapshot: piece placement and whose turn it is.
///
/// Positions are value-like: applying a move produces a new `Position`
/// and never touches the original, so search branches and safety checks
/// each work on their own scratch copy. The `BTreeMap` keeps piece
/// enumeration in a fixed square order, which the search relies on for
/// its deterministic first-best tie-break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pieces: BTreeMap<Square, (Color, Piece)>,
    side_to_move: Color,
}

impl Position {
    /// An empty board, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            pieces: BTreeMap::new(),
            side_to_move: Color::White,
        }
    }

    /// The standard initial layout, White to move.
    #[must_use]
    pub fn new_game() -> Self {
        Position {
            pieces: INITIAL_LAYOUT.clone(),
            side_to_move: Color::White,
        }
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub(crate) fn set_side_to_move(&mut self, side: Color) {
        self.side_to_move = side;
    }

    /// The piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.pieces.get(&square).copied()
    }

    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.pieces.insert(square, (color, piece));
    }

    pub(crate) fn remove_piece(&mut self, square: Square) -> Option<(Color, Piece)> {
        self.pieces.remove(&square)
    }

    /// All pieces on the board, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &(color, piece))| (sq, color, piece))
    }

    /// All pieces of one side, in square order.
    pub fn pieces_of(&self, side: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().filter_map(move |(&sq, &(color, piece))| {
            (color == side).then_some((sq, piece))
        })
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// The square of `side`'s King, or `None` if that King is off the
    /// board (a defined game-over state, never a panic).
    #[must_use]
    pub fn king_square(&self, side: Color) -> Option<Square> {
        self.pieces
            .iter()
            .find(|(_, &(color, piece))| color == side && piece == Piece::King)
            .map(|(&sq, _)| sq)
    }

    /// Apply a move, producing the successor position.
    ///
    /// Removes any piece on `to` (capture), moves the piece from `from`,
    /// promotes a Pawn reaching its far row to `promotion` (Queen when
    /// `None` or when the choice is not a valid promotion piece), and
    /// flips the side to move.
    ///
    /// Legality is the caller's responsibility; this only rejects
    /// contract violations: off-board coordinates and an empty source.
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Position, MoveError> {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveError::OffBoard);
        }
        let (color, piece) = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { from })?;

        let mut next = self.clone();
        next.remove_piece(to);
        next.remove_piece(from);

        let piece = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            promotion
                .filter(|choice| PROMOTION_PIECES.contains(choice))
                .unwrap_or(Piece::Queen)
        } else {
            piece
        };
        next.set_piece(to, color, piece);
        next.side_to_move = self.side_to_move.opponent();
        Ok(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_board_char(color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
