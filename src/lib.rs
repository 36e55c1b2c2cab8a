pub mod engine;
pub mod game;

pub use engine::{GameController, GameMode, SearchJob};
pub use game::{
    Color, Difficulty, GameStatus, Move, MoveError, Piece, Position, PositionBuilder, Searcher,
    Square,
};
