//! Treasure Hunt - Terminal Multiplayer Adventure Library
//!
//! Up to three players take turns through five stages of an island trail,
//! then the journey back decides who keeps their gold. This module exposes
//! the game logic for testing and for the terminal front end.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod hunt;
pub mod input;
pub mod logging;
pub mod report;
pub mod scoring;
pub mod ui;

pub use constants::*;
pub use game::{update, Game, GameEvent, Phase, UpdateResult};
pub use hunt::{advance, Action, Item, Player, Stage};
pub use scoring::{ScoringRule, Standing};
