//! The game aggregate: roster, phase, turn order and event log.
//!
//! Every change goes through `update`, which takes one `GameEvent` at a time.
//! Rendering only ever reads a `&Game`.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
