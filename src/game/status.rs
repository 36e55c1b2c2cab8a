//! Check, checkmate and stalemate detection.

use std::fmt;

use super::{Color, Position, Square};

/// Game status from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Game continues, side to move is not in check
    InProgress,
    /// Side to move is in check but has a legal reply
    Check(Color),
    /// Side to move is checkmated; the named color is the winner
    CheckmateFor(Color),
    /// Side to move has no legal move and is not in check
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(side) => write!(f, "{side} is in check"),
            GameStatus::CheckmateFor(winner) => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Position {
    /// True iff some opposing piece has a geometric move onto `side`'s
    /// King square.
    ///
    /// A side with no King on the board is reported as in check: that
    /// side has already lost, and every status query must keep working
    /// rather than panic.
    #[must_use]
    pub fn is_king_in_check(&self, side: Color) -> bool {
        let Some(king) = self.king_square(side) else {
            return true;
        };
        self.pieces_of(side.opponent())
            .any(|(from, _)| self.is_legal_piece_move(from, king))
    }

    /// Simulates the move on a scratch copy and returns true iff the
    /// mover's own side is not left in check. This converts geometric
    /// legality into full legality.
    ///
    /// Returns `false` for an empty source square.
    #[must_use]
    pub fn is_move_safe(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        let mut scratch = self.clone();
        scratch.remove_piece(to);
        scratch.remove_piece(from);
        scratch.set_piece(to, color, piece);
        !scratch.is_king_in_check(color)
    }

    /// True iff `side` has at least one geometric move that also passes
    /// the King-safety gate.
    #[must_use]
    pub fn has_safe_move(&self, side: Color) -> bool {
        self.generate_moves(side)
            .iter()
            .any(|mv| self.is_move_safe(mv.from, mv.to))
    }

    /// `side` is in check and has no safe move.
    #[must_use]
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_king_in_check(side) && !self.has_safe_move(side)
    }

    /// `side` is not in check and has no safe move.
    #[must_use]
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_king_in_check(side) && !self.has_safe_move(side)
    }

    /// Status for the side to move.
    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        let side = self.side_to_move();
        if self.is_king_in_check(side) {
            if self.has_safe_move(side) {
                GameStatus::Check(side)
            } else {
                GameStatus::CheckmateFor(side.opponent())
            }
        } else if self.has_safe_move(side) {
            GameStatus::InProgress
        } else {
            GameStatus::Stalemate
        }
    }
}
