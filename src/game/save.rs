//! Persistence blob round-trip.
//!
//! The host app stores a game as two values: a piece blob of the form
//! `"row,col,Kind,isWhite;row,col,Kind,isWhite;..."` and a separate
//! side-to-move flag. The blob uses human-readable kind names and
//! literal `true`/`false` tokens. A malformed record is skipped with a
//! warning rather than aborting the whole load.

use log::warn;

use super::{Color, Piece, Position, Square};

impl Position {
    /// Serialize the piece placement to the persistence blob format.
    ///
    /// Records appear in square order, so equal positions serialize to
    /// equal strings.
    #[must_use]
    pub fn to_save_string(&self) -> String {
        self.pieces()
            .map(|(square, color, piece)| {
                format!(
                    "{},{},{},{}",
                    square.row(),
                    square.col(),
                    piece.name(),
                    color == Color::White
                )
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Reconstruct a position from the persistence blob plus the
    /// separately stored side-to-move flag.
    ///
    /// Malformed records (wrong field count, unparseable coordinate,
    /// unknown kind name, bad boolean, off-board square) are skipped
    /// individually. An empty blob yields an empty board; the caller
    /// decides whether that means "no saved game".
    #[must_use]
    pub fn from_save_string(blob: &str, side_to_move: Color) -> Position {
        let mut position = Position::empty();
        position.set_side_to_move(side_to_move);

        for record in blob.split(';').filter(|r| !r.is_empty()) {
            match parse_record(record) {
                Some((square, color, piece)) => position.set_piece(square, color, piece),
                None => warn!("skipping malformed saved piece record '{record}'"),
            }
        }
        position
    }
}

fn parse_record(record: &str) -> Option<(Square, Color, Piece)> {
    let parts: Vec<&str> = record.split(',').collect();
    if parts.len() != 4 {
        return None;
    }
    let row: usize = parts[0].trim().parse().ok()?;
    let col: usize = parts[1].trim().parse().ok()?;
    let square = Square::new(row, col)?;
    let piece = Piece::from_name(parts[2].trim())?;
    let color = match parts[3].trim() {
        "true" => Color::White,
        "false" => Color::Black,
        _ => return None,
    };
    Some((square, color, piece))
}

/// The two persisted values, bundled for callers that hand the pair to
/// the platform's key-value store in one go.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedGame {
    pub pieces: String,
    pub white_to_move: bool,
}

impl SavedGame {
    /// Snapshot a position into its persisted form.
    #[must_use]
    pub fn capture(position: &Position) -> Self {
        SavedGame {
            pieces: position.to_save_string(),
            white_to_move: position.side_to_move() == Color::White,
        }
    }

    /// Rebuild the position this snapshot was taken from.
    #[must_use]
    pub fn restore(&self) -> Position {
        let side = if self.white_to_move {
            Color::White
        } else {
            Color::Black
        };
        Position::from_save_string(&self.pieces, side)
    }
}
