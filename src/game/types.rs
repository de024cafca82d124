//! Game aggregate data structures.

use crate::constants::*;
use crate::hunt::{Action, ActionRejected, Player, StageOutcome};
use crate::scoring::{ScoringRule, Standing};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Play,
    End,
}

/// A single input to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    AddPlayer(String),
    StartGame,
    /// The active player's action for their current stage.
    Submit(Action),
    PlayAgain,
}

/// What `update` did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// Setup or reset event took effect.
    Applied,
    /// A stage action was committed for the active player.
    Committed(StageOutcome),
    /// The action did not fit; nothing changed.
    Rejected(ActionRejected),
    /// The event is not meaningful right now; nothing changed.
    Ignored,
}

/// Why a roster name was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong,
    BadCharacter(char),
    /// Another player already uses it (ASCII case-insensitive).
    Taken,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name cannot be empty"),
            Self::TooLong => write!(f, "Names are at most {} characters", MAX_NAME_LEN),
            Self::BadCharacter(c) => write!(f, "'{}' is not allowed in a name", c),
            Self::Taken => write!(f, "That name is already on the roster"),
        }
    }
}

/// Tone of a log line, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTone {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub tone: LogTone,
}

/// Append-only narrative log. Only the newest entries are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, tone: LogTone) {
        self.entries.push(LogEntry {
            message: message.into(),
            tone,
        });
    }

    /// The last `EVENT_LOG_CAPACITY` entries, oldest first.
    pub fn recent(&self) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(EVENT_LOG_CAPACITY);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The whole session.
#[derive(Debug, Clone)]
pub struct Game {
    pub players: Vec<Player>,
    /// Index of the active player during `Phase::Play`.
    pub turn: usize,
    pub phase: Phase,
    pub log: EventLog,
    pub scoring: ScoringRule,
    /// Filled exactly once, when the last player completes.
    pub standings: Option<Vec<Standing>>,
}

impl Game {
    pub fn new(scoring: ScoringRule) -> Self {
        Self {
            players: Vec::new(),
            turn: 0,
            phase: Phase::Setup,
            log: EventLog::new(),
            scoring,
            standings: None,
        }
    }

    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Play => self.players.get(self.turn),
            _ => None,
        }
    }

    pub fn all_complete(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.complete)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn winner(&self) -> Option<&Standing> {
        self.standings.as_ref().and_then(|s| s.first())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(ScoringRule::default())
    }
}
