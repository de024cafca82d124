//! Return-journey scoring and final rankings.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
