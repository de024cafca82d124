//! Player turn engine.
//!
//! Each player walks the same five stages: a fork in the trail, two riddles,
//! a storm-battered bridge and the treasure vault. One committed action
//! moves a player exactly one stage forward.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
