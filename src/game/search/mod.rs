//! Adversarial search: minimax with alpha-beta pruning.
//!
//! The search is deliberately plain: fixed depth, pure material
//! evaluation, no move ordering, no transposition table. Depths of 1-3
//! plies are what the difficulty tiers use; at that size pruning
//! effectiveness does not matter, only correctness and determinism.

mod alphabeta;
mod eval;

use log::debug;

use super::{Color, Move, Position};

pub(crate) use eval::evaluate;

/// Score bound that dominates every reachable material total.
pub(crate) const INFINITY: i32 = 1_000_000;

/// Computer difficulty tiers, mapped to search depth in plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth for this tier.
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// A candidate move with its search score. Exists only during root-move
/// ranking and is never persisted.
#[derive(Clone, Copy, Debug)]
struct ScoredMove {
    mv: Move,
    score: i32,
}

/// Move chooser for the computer player.
///
/// `ai_side` fixes the evaluation polarity for the whole game: material
/// always counts positively for the computer's designated color, no
/// matter which side a given search node is choosing for.
#[derive(Clone, Copy, Debug)]
pub struct Searcher {
    ai_side: Color,
}

impl Searcher {
    #[must_use]
    pub const fn new(ai_side: Color) -> Self {
        Searcher { ai_side }
    }

    /// The color whose material this searcher maximizes.
    #[inline]
    #[must_use]
    pub const fn ai_side(&self) -> Color {
        self.ai_side
    }

    /// Root search: pick a move for `side` by searching `depth` plies.
    ///
    /// Candidate moves are safety-filtered; ties are broken by keeping
    /// the first best move in enumeration order, so identical inputs
    /// always return the identical move. Returns `None` when `side` has
    /// no legal move (checkmate or stalemate).
    #[must_use]
    pub fn choose_move(&self, position: &Position, side: Color, depth: u32) -> Option<Move> {
        let maximizing = side == self.ai_side;
        let mut best: Option<ScoredMove> = None;

        for mv in position.generate_moves(side) {
            if !position.is_move_safe(mv.from, mv.to) {
                continue;
            }
            let Ok(child) = position.apply_move(mv.from, mv.to, None) else {
                continue;
            };
            let score = self.search(
                &child,
                side.opponent(),
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
            );
            let better = match best {
                None => true,
                Some(current) => {
                    if maximizing {
                        score > current.score
                    } else {
                        score < current.score
                    }
                }
            };
            if better {
                best = Some(ScoredMove { mv, score });
            }
        }

        match best {
            Some(ScoredMove { mv, score }) => {
                debug!("chose {mv} for {side} at depth {depth} (score {score})");
                Some(mv)
            }
            None => {
                debug!("no legal move for {side}, game is over");
                None
            }
        }
    }
}
