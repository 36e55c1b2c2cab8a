//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than replaying moves.
//!
//! # Example
//! ```
//! use pocket_chess::game::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Color, Piece, Position, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug, Default)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Option<Color>,
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder::default()
    }

    /// Place a piece. Placing on an occupied square replaces the occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((square, color, piece));
        self
    }

    /// Set the side to move (defaults to White).
    #[must_use]
    pub fn side_to_move(mut self, side: Color) -> Self {
        self.side_to_move = Some(side);
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.set_side_to_move(self.side_to_move.unwrap_or(Color::White));
        position
    }
}
