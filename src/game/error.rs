//! Error types for game operations.

use std::fmt;

use super::types::Square;

/// Error type for square construction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Reasons a proposed move is rejected.
///
/// The UI surfaces all of these as a single "invalid move" outcome; the
/// variants stay distinct so the legality and safety gates can be tested
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece
    NoPieceAtSource { from: Square },
    /// The piece at the source square belongs to the side not on move
    NotYourTurn,
    /// A coordinate is off the board
    OffBoard,
    /// The move fails the piece's geometric/occupancy rules
    IllegalMove,
    /// The move would leave the mover's own King in check
    UnsafeMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { from } => {
                write!(f, "No piece on source square {from}")
            }
            MoveError::NotYourTurn => write!(f, "Piece belongs to the side not on move"),
            MoveError::OffBoard => write!(f, "Square is off the board"),
            MoveError::IllegalMove => write!(f, "Move violates the piece's movement rules"),
            MoveError::UnsafeMove => write!(f, "Move would leave own King in check"),
        }
    }
}

impl std::error::Error for MoveError {}
