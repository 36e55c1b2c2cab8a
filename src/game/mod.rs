//! Chess board representation and game logic.
//!
//! Implements the simplified rule set used by the mobile app: per-piece
//! geometric legality with path clearing, check/checkmate/stalemate
//! detection, and pawn promotion. Castling, en passant and draw-by-rule
//! detection are deliberately not part of this rule set.
//!
//! # Example
//! ```
//! use pocket_chess::game::{Color, Position};
//!
//! let position = Position::new_game();
//! let moves = position.generate_moves(Color::White);
//! println!("Starting position has {} pseudo-legal moves", moves.len());
//! ```

mod builder;
mod error;
mod movegen;
mod save;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{MoveError, SquareError};
pub use save::SavedGame;
pub use search::{Difficulty, Searcher};
pub use state::Position;
pub use status::GameStatus;
pub use types::{Color, Move, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
