//! Scoring rules and standings.

use serde::{Deserialize, Serialize};

/// Bonus table applied on the journey back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// Strong and quick: +3. Survived: +1. Otherwise gold is lost.
    #[default]
    Tiered,
    /// Smaller unconditional bonus: +2 when healthy, +1 otherwise.
    Flat,
}

impl ScoringRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tiered => "Tiered",
            Self::Flat => "Flat",
        }
    }
}

/// How a player fared on the way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnTier {
    StrongAndQuick,
    BarelyMadeIt,
    DidNotSurvive,
    Healthy,
    Weary,
}

impl ReturnTier {
    pub fn message(&self, name: &str, bonus: i32) -> String {
        match self {
            Self::StrongAndQuick => format!("{} was strong and quick! +{} gold.", name, bonus),
            Self::BarelyMadeIt => format!("{} barely made it back. +{} gold.", name, bonus),
            Self::DidNotSurvive => format!("{} didn't survive the return.", name),
            Self::Healthy => format!("{} strolled home in good shape. +{} gold.", name, bonus),
            Self::Weary => format!("{} limped home. +{} gold.", name, bonus),
        }
    }
}

/// A player's final placing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based.
    pub rank: usize,
    pub name: String,
    pub gold: i32,
    /// Gold change applied by the scoring rule (negative when gold was lost).
    pub bonus: i32,
    pub health: i32,
    pub time: i32,
    pub tier: ReturnTier,
    pub message: String,
}
