//! Phase transitions and turn rotation.

use super::{Game, GameEvent, LogTone, NameError, Phase, UpdateResult};
use crate::constants::*;
use crate::hunt::{self, Action, Player, StageOutcome};
use crate::scoring::{self, ReturnTier, Standing};
use rand::Rng;

/// Roster name rules: trimmed, non-empty, at most `MAX_NAME_LEN` characters
/// of letters, digits, spaces, `-` or `_`.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    let bad = trimmed
        .chars()
        .find(|&c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '_')));
    match bad {
        Some(c) => Err(NameError::BadCharacter(c)),
        None => Ok(()),
    }
}

/// `validate_name` plus the roster: the name must not already be taken.
pub fn check_roster_name(game: &Game, name: &str) -> Result<(), NameError> {
    validate_name(name)?;
    let name = name.trim();
    if game
        .players
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(name))
    {
        return Err(NameError::Taken);
    }
    Ok(())
}

/// Apply one event to the game.
pub fn update<R: Rng>(game: &mut Game, event: GameEvent, rng: &mut R) -> UpdateResult {
    match (game.phase, event) {
        (Phase::Setup, GameEvent::AddPlayer(name)) => add_player(game, &name),
        (Phase::Setup, GameEvent::StartGame) => start_game(game),
        (Phase::Play, GameEvent::Submit(action)) => submit(game, action, rng),
        (Phase::End, GameEvent::PlayAgain) => {
            reset(game);
            UpdateResult::Applied
        }
        _ => UpdateResult::Ignored,
    }
}

fn add_player(game: &mut Game, name: &str) -> UpdateResult {
    if game.is_full() {
        return UpdateResult::Ignored;
    }
    if let Err(reason) = check_roster_name(game, name) {
        tracing::debug!(name, %reason, "name turned away");
        return UpdateResult::Ignored;
    }

    let name = name.trim();
    tracing::info!(
        player = name,
        slot = game.players.len() + 1,
        "player joined"
    );
    game.players.push(Player::new(name));
    UpdateResult::Applied
}

fn start_game(game: &mut Game) -> UpdateResult {
    if game.players.is_empty() {
        return UpdateResult::Ignored;
    }

    game.phase = Phase::Play;
    game.turn = 0;
    game.log
        .push("The expedition sets off across the island.", LogTone::Info);
    tracing::info!(
        players = game.players.len(),
        scoring = game.scoring.name(),
        "game started"
    );
    UpdateResult::Applied
}

fn submit<R: Rng>(game: &mut Game, action: Action, rng: &mut R) -> UpdateResult {
    let Some(player) = game.players.get_mut(game.turn) else {
        return UpdateResult::Ignored;
    };

    let outcome = match hunt::advance(player, action, rng) {
        Ok(outcome) => outcome,
        Err(rejected) => {
            tracing::debug!(player = %player.name, %rejected, "action rejected");
            return UpdateResult::Rejected(rejected);
        }
    };

    let message = outcome.describe(&player.name);
    let completed = player.complete.then(|| player.name.clone());
    game.log.push(message, outcome_tone(&outcome));
    if let Some(name) = completed {
        game.log.push(
            format!("{} reached the treasure vault's end.", name),
            LogTone::Info,
        );
    }

    advance_turn(game);
    UpdateResult::Committed(outcome)
}

fn outcome_tone(outcome: &StageOutcome) -> LogTone {
    match outcome {
        StageOutcome::RiddleSolved { .. } => LogTone::Good,
        StageOutcome::RiddleFailed { .. } => LogTone::Bad,
        StageOutcome::Vault {
            dial_matched: true, ..
        } => LogTone::Good,
        StageOutcome::Bridge {
            result: Some(hunt::BridgeOutcome::Fell),
            ..
        } => LogTone::Bad,
        _ => LogTone::Info,
    }
}

/// Move the turn to the next player still on the trail, or end the game.
pub fn advance_turn(game: &mut Game) {
    if game.all_complete() {
        game.phase = Phase::End;
        finalize_game(game);
        return;
    }

    let count = game.players.len();
    for step in 1..=count {
        let idx = (game.turn + step) % count;
        if !game.players[idx].complete {
            game.turn = idx;
            return;
        }
    }
}

/// Run the return-journey scoring once. Later calls return the cached standings.
///
/// `None` until every player has completed the trail.
pub fn finalize_game(game: &mut Game) -> Option<&[Standing]> {
    if game.standings.is_none() {
        if !game.all_complete() {
            return None;
        }
        let standings = scoring::finalize(&mut game.players, game.scoring);
        for standing in &standings {
            let tone = match standing.tier {
                ReturnTier::DidNotSurvive => LogTone::Bad,
                _ => LogTone::Good,
            };
            game.log.push(standing.message.clone(), tone);
        }
        if let Some(winner) = standings.first() {
            game.log.push(
                format!("{} wins with {} gold!", winner.name, winner.gold),
                LogTone::Good,
            );
            tracing::info!(winner = %winner.name, gold = winner.gold, "game finalized");
        }
        game.standings = Some(standings);
    }
    game.standings.as_deref()
}

/// Clear the roster and go back to setup. The scoring rule is kept.
pub fn reset(game: &mut Game) {
    tracing::info!("roster reset for a new game");
    *game = Game::new(game.scoring);
}
