//! JSON summary of a finished game, printed after the terminal is restored.

use crate::game::Game;
use crate::scoring::{ScoringRule, Standing};
use chrono::Utc;
use serde::Serialize;
use std::io;

#[derive(Debug, Clone, Serialize)]
pub struct GameReport<'a> {
    pub finished_at: String,
    pub scoring: ScoringRule,
    pub winner: Option<&'a str>,
    pub standings: &'a [Standing],
}

impl<'a> GameReport<'a> {
    /// `None` while the game is still in progress.
    pub fn from_game(game: &'a Game) -> Option<Self> {
        let standings = game.standings.as_deref()?;
        Some(Self {
            finished_at: Utc::now().to_rfc3339(),
            scoring: game.scoring,
            winner: standings.first().map(|s| s.name.as_str()),
            standings,
        })
    }

    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::finalize_game;
    use crate::hunt::{Player, Stage};

    #[test]
    fn test_no_report_before_end() {
        let game = Game::default();
        assert!(GameReport::from_game(&game).is_none());
    }

    #[test]
    fn test_report_json_fields() {
        let mut game = Game::default();
        let mut p = Player::new("Ava");
        p.stage = Stage::Done;
        p.complete = true;
        p.gold = 4;
        game.players.push(p);
        finalize_game(&mut game);

        let report = GameReport::from_game(&game).expect("finished game has a report");
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winner"], "Ava");
        assert_eq!(value["scoring"], "tiered");
        assert_eq!(value["standings"][0]["gold"], 7);
        assert_eq!(value["standings"][0]["tier"], "strong_and_quick");
    }
}
