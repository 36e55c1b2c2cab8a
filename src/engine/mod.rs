//! Orchestrator-facing layer: game controller and off-thread search.

mod controller;

pub use controller::{GameController, GameMode, SearchJob};
