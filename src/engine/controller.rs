//! Game controller implementation.
//!
//! Owns the single authoritative [`Position`]. Human moves are validated
//! and applied synchronously; computer moves are searched on a worker
//! thread against a scratch copy and handed back as a plain [`Move`] for
//! the controller to apply, so the interactive path never blocks on the
//! search. The UI's cosmetic "thinking" delay is a presentation concern
//! and lives outside this layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::game::{
    Color, Difficulty, GameStatus, Move, MoveError, Piece, Position, Searcher, Square,
};

/// How a game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the device
    TwoPlayer,
    /// One human against the computer
    VsComputer {
        ai_side: Color,
        difficulty: Difficulty,
    },
}

/// Handle to an in-flight computer-move search.
///
/// The worker searches a scratch copy of the position and publishes its
/// chosen move into a shared slot. Dropping the job or calling
/// [`SearchJob::cancel`] abandons the search: the stop flag tells the
/// worker not to publish, and the orchestrator simply never applies a
/// result.
pub struct SearchJob {
    stop: Arc<AtomicBool>,
    result: Arc<Mutex<Option<Option<Move>>>>,
    handle: Option<JoinHandle<()>>,
}

impl SearchJob {
    fn spawn(position: Position, searcher: Searcher, depth: u32) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let result: Arc<Mutex<Option<Option<Move>>>> = Arc::new(Mutex::new(None));

        let worker_stop = Arc::clone(&stop);
        let worker_result = Arc::clone(&result);
        let handle = thread::spawn(move || {
            let side = position.side_to_move();
            let chosen = searcher.choose_move(&position, side, depth);
            if worker_stop.load(Ordering::Relaxed) {
                debug!("search cancelled, discarding result");
                return;
            }
            *worker_result.lock() = Some(chosen);
        });

        SearchJob {
            stop,
            result,
            handle: Some(handle),
        }
    }

    /// Poll for the search result without blocking.
    ///
    /// `None` means the search is still running; `Some(None)` means it
    /// finished and the computer has no legal move (game over).
    #[must_use]
    pub fn try_result(&self) -> Option<Option<Move>> {
        *self.result.lock()
    }

    /// Block until the search finishes and return its chosen move.
    #[must_use]
    pub fn wait(mut self) -> Option<Move> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.result.lock().take().flatten()
    }

    /// Abandon the search; any result it produces is discarded.
    pub fn cancel(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        // Worker is detached; at the depths in use it exits promptly.
        self.handle.take();
    }
}

/// Owns the authoritative position and mediates all mutation of it.
#[derive(Debug)]
pub struct GameController {
    position: Position,
    mode: GameMode,
}

impl GameController {
    /// Start a fresh game in the given mode, standard layout, White to move.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        GameController {
            position: Position::new_game(),
            mode,
        }
    }

    /// Resume from a previously saved position.
    #[must_use]
    pub fn from_position(position: Position, mode: GameMode) -> Self {
        GameController { position, mode }
    }

    /// Reset to the standard initial layout, keeping the mode.
    pub fn new_game(&mut self) {
        self.position = Position::new_game();
    }

    /// The current authoritative position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Status for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.game_status()
    }

    /// True iff it is the computer's turn in a vs-computer game.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::TwoPlayer => false,
            GameMode::VsComputer { ai_side, .. } => self.position.side_to_move() == ai_side,
        }
    }

    /// Validate and apply a human move.
    ///
    /// Runs the full gate: a piece must be on `from`, it must belong to
    /// the side on move, the move must pass the piece's geometric rules
    /// and must not leave the mover's own King in check. On rejection
    /// the position is unchanged.
    pub fn try_human_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<(), MoveError> {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveError::OffBoard);
        }
        let (color, _) = self
            .position
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { from })?;
        if color != self.position.side_to_move() {
            return Err(MoveError::NotYourTurn);
        }
        if !self.position.is_legal_piece_move(from, to) {
            return Err(MoveError::IllegalMove);
        }
        if !self.position.is_move_safe(from, to) {
            return Err(MoveError::UnsafeMove);
        }
        self.position = self.position.apply_move(from, to, promotion)?;
        Ok(())
    }

    /// Kick off the computer's move search on a worker thread.
    ///
    /// Returns `None` unless the game is vs-computer and it is the
    /// computer's turn. The job consumes a scratch copy of the current
    /// position; the authoritative one is untouched until the caller
    /// feeds the result back through [`GameController::apply_computer_move`].
    #[must_use]
    pub fn request_computer_move(&self) -> Option<SearchJob> {
        let GameMode::VsComputer {
            ai_side,
            difficulty,
        } = self.mode
        else {
            return None;
        };
        if self.position.side_to_move() != ai_side {
            return None;
        }
        Some(SearchJob::spawn(
            self.position.clone(),
            Searcher::new(ai_side),
            difficulty.depth(),
        ))
    }

    /// Apply a move the search handed back.
    ///
    /// Re-validated against the authoritative position, so a stale
    /// result (e.g. from a cancelled game that was restarted) is
    /// rejected instead of corrupting state. The computer always
    /// promotes to a Queen.
    pub fn apply_computer_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let (color, _) = self
            .position
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtSource { from: mv.from })?;
        if color != self.position.side_to_move() {
            return Err(MoveError::NotYourTurn);
        }
        if !self.position.is_legal_piece_move(mv.from, mv.to) {
            return Err(MoveError::IllegalMove);
        }
        if !self.position.is_move_safe(mv.from, mv.to) {
            return Err(MoveError::UnsafeMove);
        }
        self.position = self.position.apply_move(mv.from, mv.to, Some(Piece::Queen))?;
        Ok(())
    }
}
