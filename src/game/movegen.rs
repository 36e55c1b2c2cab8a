//! Geometric move legality and pseudo-legal move generation.
//!
//! "Geometric" legality covers the piece's movement pattern and board
//! occupancy only; whether a move leaves the mover's own King in check
//! is a separate gate (`is_move_safe` in `status.rs`), applied at the
//! point of use so the safety simulation runs only on candidate moves.

use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Pure geometric/occupancy legality for the piece on `from` moving
    /// to `to`, ignoring King safety.
    ///
    /// Returns `false` when `from` is empty, `from == to`, either square
    /// is off the board, or the destination holds a same-side piece.
    #[must_use]
    pub fn is_legal_piece_move(&self, from: Square, to: Square) -> bool {
        if from == to || !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if let Some((target_color, _)) = self.piece_at(to) {
            if target_color == color {
                return false;
            }
        }

        let drow = to.row() as isize - from.row() as isize;
        let dcol = to.col() as isize - from.col() as isize;

        match piece {
            Piece::Pawn => self.is_legal_pawn_move(color, from, to, drow, dcol),
            Piece::Rook => (drow == 0 || dcol == 0) && self.is_path_clear(from, to),
            Piece::Bishop => drow.abs() == dcol.abs() && self.is_path_clear(from, to),
            Piece::Queen => {
                (drow == 0 || dcol == 0 || drow.abs() == dcol.abs())
                    && self.is_path_clear(from, to)
            }
            Piece::Knight => {
                (drow.abs() == 2 && dcol.abs() == 1) || (drow.abs() == 1 && dcol.abs() == 2)
            }
            Piece::King => drow.abs() <= 1 && dcol.abs() <= 1,
        }
    }

    fn is_legal_pawn_move(
        &self,
        color: Color,
        from: Square,
        to: Square,
        drow: isize,
        dcol: isize,
    ) -> bool {
        let direction = color.pawn_direction();

        // Single push onto an empty square
        if dcol == 0 && drow == direction && self.piece_at(to).is_none() {
            return true;
        }
        // Double push from the starting row, both squares empty
        if dcol == 0
            && from.row() == color.pawn_start_row()
            && drow == 2 * direction
            && self.piece_at(to).is_none()
            && self.is_path_clear(from, to)
        {
            return true;
        }
        // Diagonal capture only (no en passant)
        dcol.abs() == 1 && drow == direction && self.piece_at(to).is_some()
    }

    /// True iff every square strictly between `from` and `to` along the
    /// connecting line is empty. Callers guarantee the squares share a
    /// row, column or diagonal.
    #[must_use]
    pub(crate) fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let drow = (to.row() as isize - from.row() as isize).signum();
        let dcol = (to.col() as isize - from.col() as isize).signum();

        let mut current = from.offset(drow, dcol);
        while let Some(square) = current {
            if square == to {
                return true;
            }
            if self.piece_at(square).is_some() {
                return false;
            }
            current = square.offset(drow, dcol);
        }
        // Walked off the board without reaching `to`; squares were not aligned.
        false
    }

    /// Every geometric move for every piece of `side`.
    ///
    /// Not filtered by King safety. Enumeration order is fixed: pieces
    /// in square order, destinations row-major; the search's first-best
    /// tie-break depends on it.
    #[must_use]
    pub fn generate_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in self.pieces_of(side) {
            for to in Square::all() {
                if self.is_legal_piece_move(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }
}
