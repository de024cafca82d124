//! Treasure hunt data structures.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a player on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
    Done,
}

impl Stage {
    pub fn next(self) -> Self {
        match self {
            Self::Stage1 => Self::Stage2,
            Self::Stage2 => Self::Stage3,
            Self::Stage3 => Self::Stage4,
            Self::Stage4 => Self::Stage5,
            Self::Stage5 | Self::Done => Self::Done,
        }
    }

    /// 1-based stage number, `None` once the trail is finished.
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Stage1 => Some(1),
            Self::Stage2 => Some(2),
            Self::Stage3 => Some(3),
            Self::Stage4 => Some(4),
            Self::Stage5 => Some(5),
            Self::Done => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Stage1 => "Fork in the Trail",
            Self::Stage2 => "The Hermit's Riddle",
            Self::Stage3 => "The Whispering Cave",
            Self::Stage4 => "The Rickety Bridge",
            Self::Stage5 => "The Treasure Vault",
            Self::Done => "Journey Complete",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Stage1 => "Choose a path:",
            Self::Stage2 => "Riddle 1: What has to be broken before you can use it?",
            Self::Stage3 => "Riddle 2: I speak without a mouth and hear without ears. What am I?",
            Self::Stage4 => "You reach a rickety bridge in a storm. Cross now or wait?",
            Self::Stage5 => {
                "The vault reads: What is always coming but never arrives? \
                 Answer it, then set the dial between 1 and 5."
            }
            Self::Done => "Turn complete.",
        }
    }
}

/// Stage 1 choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathChoice {
    SwampTrail,
    RockyPass,
    DenseVines,
}

impl PathChoice {
    pub const ALL: [PathChoice; 3] = [
        PathChoice::SwampTrail,
        PathChoice::RockyPass,
        PathChoice::DenseVines,
    ];

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::SwampTrail,
            1 => Self::RockyPass,
            2 => Self::DenseVines,
            _ => Self::SwampTrail,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SwampTrail => "Swamp Trail",
            Self::RockyPass => "Rocky Pass",
            Self::DenseVines => "Dense Vines",
        }
    }

    pub fn damage(&self) -> i32 {
        match self {
            Self::SwampTrail => SWAMP_TRAIL_DAMAGE,
            Self::RockyPass => ROCKY_PASS_DAMAGE,
            Self::DenseVines => DENSE_VINES_DAMAGE,
        }
    }
}

/// Stage 4 choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeChoice {
    CrossNow,
    Wait,
}

impl BridgeChoice {
    pub const ALL: [BridgeChoice; 2] = [BridgeChoice::CrossNow, BridgeChoice::Wait];

    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Wait,
            _ => Self::CrossNow,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CrossNow => "Cross now",
            Self::Wait => "Wait for weather to clear",
        }
    }
}

/// What the storm does to a player who crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeOutcome {
    Safe,
    Injured,
    Fell,
}

impl BridgeOutcome {
    pub const ALL: [BridgeOutcome; 3] = [
        BridgeOutcome::Safe,
        BridgeOutcome::Injured,
        BridgeOutcome::Fell,
    ];
}

/// Items found along the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Reward for the first riddle. Softens a wrong answer in the cave.
    Lantern,
    /// Reward for the second riddle. Reaches the cache under the bridge.
    Rope,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lantern => "Lantern",
            Self::Rope => "Rope",
        }
    }
}

/// Insertion-ordered set of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory(Vec<Item>);

impl Inventory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an item. Returns false if it was already held.
    pub fn add(&mut self, item: Item) -> bool {
        if self.contains(item) {
            return false;
        }
        self.0.push(item);
        true
    }

    pub fn contains(&self, item: Item) -> bool {
        self.0.contains(&item)
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One player's single input for the stage they are on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Path(PathChoice),
    Answer(String),
    Bridge(BridgeChoice),
    Vault { answer: String, dial: u8 },
}

impl Action {
    /// The stage this kind of input belongs to.
    pub fn accepted_at(&self, stage: Stage) -> bool {
        matches!(
            (self, stage),
            (Action::Path(_), Stage::Stage1)
                | (Action::Answer(_), Stage::Stage2)
                | (Action::Answer(_), Stage::Stage3)
                | (Action::Bridge(_), Stage::Stage4)
                | (Action::Vault { .. }, Stage::Stage5)
        )
    }
}

/// Why an action was not committed. Nothing about the player changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejected {
    /// The action does not match the player's current stage.
    WrongStage(Stage),
    EmptyAnswer,
    DialOutOfRange(u8),
    AlreadyComplete,
}

impl fmt::Display for ActionRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongStage(stage) => write!(f, "That does not fit {}", stage.title()),
            Self::EmptyAnswer => write!(f, "Type an answer first"),
            Self::DialOutOfRange(dial) => write!(
                f,
                "Dial {} is out of range ({}-{})",
                dial, VAULT_DIAL_MIN, VAULT_DIAL_MAX
            ),
            Self::AlreadyComplete => write!(f, "This player has finished the trail"),
        }
    }
}

/// The committed result of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    PathTaken {
        path: PathChoice,
        damage: i32,
    },
    RiddleSolved {
        stage: Stage,
        item: Item,
    },
    RiddleFailed {
        stage: Stage,
        health_lost: i32,
        time_lost: i32,
        gold_found: i32,
    },
    Bridge {
        choice: BridgeChoice,
        /// `None` when the player waited.
        result: Option<BridgeOutcome>,
        found_cache: bool,
    },
    Vault {
        riddle_solved: bool,
        dial_matched: bool,
        code: u8,
    },
}

impl StageOutcome {
    /// Event log line for this outcome.
    pub fn describe(&self, name: &str) -> String {
        match *self {
            Self::PathTaken { path, damage } => {
                format!("{} took the {} (-{} health)", name, path.name(), damage)
            }
            Self::RiddleSolved { item, .. } => {
                format!("{} solved the riddle and found a {}", name, item.name())
            }
            Self::RiddleFailed {
                health_lost,
                time_lost,
                gold_found,
                ..
            } => {
                let mut msg = format!("{} got it wrong (-{} health", name, health_lost);
                if time_lost > 0 {
                    msg.push_str(&format!(", -{} time", time_lost));
                }
                msg.push(')');
                if gold_found > 0 {
                    msg.push_str(&format!(", but the lantern lit up {} gold", gold_found));
                }
                msg
            }
            Self::Bridge {
                choice,
                result,
                found_cache,
            } => {
                let mut msg = match (choice, result) {
                    (BridgeChoice::Wait, _) => format!("{} waited out the storm", name),
                    (_, Some(BridgeOutcome::Injured)) => {
                        format!("{} crossed but was injured", name)
                    }
                    (_, Some(BridgeOutcome::Fell)) => format!("{} fell from the bridge!", name),
                    _ => format!("{} crossed safely", name),
                };
                if found_cache {
                    msg.push_str(" and roped down to a hidden cache");
                }
                msg
            }
            Self::Vault {
                riddle_solved,
                dial_matched,
                code,
            } => {
                let riddle = if riddle_solved {
                    "read the inscription"
                } else {
                    "puzzled over the inscription"
                };
                if dial_matched {
                    format!("{} {} and opened the vault!", name, riddle)
                } else {
                    format!("{} {}; the code was {}", name, riddle, code)
                }
            }
        }
    }
}

/// One adventurer's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Unclamped; may drop below zero or climb past the maximum.
    pub health: i32,
    pub gold: i32,
    pub time: i32,
    pub stage: Stage,
    pub location: Option<PathChoice>,
    pub inventory: Inventory,
    /// Drawn on arrival at the vault.
    #[serde(skip)]
    pub vault_code: Option<u8>,
    pub complete: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: MAX_HEALTH,
            gold: STARTING_GOLD,
            time: STARTING_TIME,
            stage: Stage::Stage1,
            location: None,
            inventory: Inventory::new(),
            vault_code: None,
            complete: false,
        }
    }

    /// Health as shown on screen, clamped to `0..=MAX_HEALTH`.
    pub fn display_health(&self) -> i32 {
        self.health.clamp(0, MAX_HEALTH)
    }

    pub fn health_ratio(&self) -> f64 {
        self.display_health() as f64 / MAX_HEALTH as f64
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(item)
    }
}
