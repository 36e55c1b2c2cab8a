//! Static evaluation: pure material count.

use crate::game::{Color, Position};

/// Sum of piece values, positive for `ai_side`, negative for the
/// opponent. No positional, mobility or king-safety terms.
#[must_use]
pub(crate) fn evaluate(position: &Position, ai_side: Color) -> i32 {
    position
        .pieces()
        .map(|(_, color, piece)| {
            if color == ai_side {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}
