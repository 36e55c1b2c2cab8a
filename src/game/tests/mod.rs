//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Geometric legality and move generation
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `search.rs` - Move choice, determinism, pruning equivalence
//! - `save.rs` - Persistence blob round-trip
//! - `props.rs` - Property-based tests

mod movegen;
mod save;
