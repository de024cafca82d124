//! Stage resolution for the treasure hunt.
//!
//! `advance` is the only function that mutates a `Player`. Inputs that do not
//! fit the player's stage are rejected before anything is touched.

use super::{
    Action, ActionRejected, BridgeChoice, BridgeOutcome, Item, PathChoice, Player, Stage,
    StageOutcome,
};
use crate::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Case- and whitespace-insensitive answer check.
pub fn answer_matches(answer: &str, solution: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(solution)
}

/// Check an action against the player's state without committing anything.
pub fn validate_action(player: &Player, action: &Action) -> Result<(), ActionRejected> {
    if player.complete || player.stage == Stage::Done {
        return Err(ActionRejected::AlreadyComplete);
    }
    if !action.accepted_at(player.stage) {
        return Err(ActionRejected::WrongStage(player.stage));
    }
    match action {
        Action::Answer(answer) | Action::Vault { answer, .. } if answer.trim().is_empty() => {
            Err(ActionRejected::EmptyAnswer)
        }
        Action::Vault { dial, .. } if !(VAULT_DIAL_MIN..=VAULT_DIAL_MAX).contains(dial) => {
            Err(ActionRejected::DialOutOfRange(*dial))
        }
        _ => Ok(()),
    }
}

/// Commit one action for `player` and move them to the next stage.
pub fn advance<R: Rng>(
    player: &mut Player,
    action: Action,
    rng: &mut R,
) -> Result<StageOutcome, ActionRejected> {
    validate_action(player, &action)?;

    let stage = player.stage;
    let outcome = match action {
        Action::Path(path) => take_path(player, path),
        Action::Answer(answer) if stage == Stage::Stage2 => riddle_one(player, &answer, rng),
        Action::Answer(answer) => riddle_two(player, &answer, rng),
        Action::Bridge(choice) => cross_bridge(player, choice, rng),
        Action::Vault { answer, dial } => open_vault(player, &answer, dial, rng),
    };

    player.stage = stage.next();
    if player.stage == Stage::Stage5 {
        player.vault_code = Some(draw_vault_code(rng));
    }
    if player.stage == Stage::Done {
        player.complete = true;
    }

    tracing::debug!(
        player = %player.name,
        ?stage,
        ?outcome,
        health = player.health,
        gold = player.gold,
        time = player.time,
        "stage committed"
    );

    Ok(outcome)
}

fn draw_vault_code<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(VAULT_DIAL_MIN..=VAULT_DIAL_MAX)
}

fn take_path(player: &mut Player, path: PathChoice) -> StageOutcome {
    let damage = path.damage();
    player.health -= damage;
    player.location = Some(path);
    StageOutcome::PathTaken { path, damage }
}

fn riddle_one<R: Rng>(player: &mut Player, answer: &str, rng: &mut R) -> StageOutcome {
    if answer_matches(answer, RIDDLE_ONE_SOLUTION) {
        player.health += RIDDLE_ONE_HEALTH_GAIN;
        player.gold += RIDDLE_ONE_GOLD_GAIN;
        player.time += RIDDLE_ONE_TIME_GAIN;
        player.inventory.add(Item::Lantern);
        return StageOutcome::RiddleSolved {
            stage: Stage::Stage2,
            item: Item::Lantern,
        };
    }

    let penalty = RIDDLE_ONE_HEALTH_PENALTIES
        .choose(rng)
        .copied()
        .unwrap_or(RIDDLE_ONE_HEALTH_PENALTIES[0]);
    player.health -= penalty;
    player.time -= RIDDLE_ONE_TIME_PENALTY;
    StageOutcome::RiddleFailed {
        stage: Stage::Stage2,
        health_lost: penalty,
        time_lost: RIDDLE_ONE_TIME_PENALTY,
        gold_found: 0,
    }
}

fn riddle_two<R: Rng>(player: &mut Player, answer: &str, rng: &mut R) -> StageOutcome {
    if answer_matches(answer, RIDDLE_TWO_SOLUTION) {
        player.health += RIDDLE_TWO_HEALTH_GAIN;
        player.gold += RIDDLE_TWO_GOLD_GAIN;
        player.time += RIDDLE_TWO_TIME_GAIN;
        player.inventory.add(Item::Rope);
        return StageOutcome::RiddleSolved {
            stage: Stage::Stage3,
            item: Item::Rope,
        };
    }

    // The lantern keeps the player off the cave's sharp rocks.
    let (health_lost, gold_found) = if player.has_item(Item::Lantern) {
        (RIDDLE_TWO_LANTERN_PENALTY, RIDDLE_TWO_LANTERN_GOLD)
    } else {
        (
            rng.gen_range(RIDDLE_TWO_MIN_PENALTY..=RIDDLE_TWO_MAX_PENALTY),
            0,
        )
    };
    player.health -= health_lost;
    player.gold += gold_found;
    StageOutcome::RiddleFailed {
        stage: Stage::Stage3,
        health_lost,
        time_lost: 0,
        gold_found,
    }
}

fn cross_bridge<R: Rng>(player: &mut Player, choice: BridgeChoice, rng: &mut R) -> StageOutcome {
    let result = match choice {
        BridgeChoice::CrossNow => {
            let result = BridgeOutcome::ALL[rng.gen_range(0..BridgeOutcome::ALL.len())];
            match result {
                BridgeOutcome::Safe => {}
                BridgeOutcome::Injured => player.health -= BRIDGE_INJURY_DAMAGE,
                BridgeOutcome::Fell => player.health = 0,
            }
            Some(result)
        }
        BridgeChoice::Wait => {
            player.time -= BRIDGE_WAIT_TIME_COST;
            None
        }
    };

    let found_cache = player.has_item(Item::Rope);
    if found_cache {
        player.gold += BRIDGE_CACHE_GOLD;
    }

    StageOutcome::Bridge {
        choice,
        result,
        found_cache,
    }
}

fn open_vault<R: Rng>(player: &mut Player, answer: &str, dial: u8, rng: &mut R) -> StageOutcome {
    let code = match player.vault_code {
        Some(code) => code,
        None => {
            let code = draw_vault_code(rng);
            player.vault_code = Some(code);
            code
        }
    };

    let riddle_solved = answer_matches(answer, VAULT_RIDDLE_SOLUTION);
    if riddle_solved {
        player.time += VAULT_RIDDLE_TIME_GAIN;
    }

    let dial_matched = dial == code;
    if dial_matched {
        player.gold += VAULT_TREASURE_GOLD;
    } else {
        player.time -= VAULT_WRONG_DIAL_TIME_COST;
    }

    StageOutcome::Vault {
        riddle_solved,
        dial_matched,
        code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn player_at(stage: Stage) -> Player {
        let mut p = Player::new("Ava");
        p.stage = stage;
        p
    }

    #[test]
    fn test_answer_matches_ignores_case_and_space() {
        assert!(answer_matches("egg", "egg"));
        assert!(answer_matches("  EgG \n", "egg"));
        assert!(!answer_matches("eggs", "egg"));
        assert!(!answer_matches("", "egg"));
    }

    #[test]
    fn test_path_damage_and_location() {
        let mut rng = seeded_rng();
        for path in PathChoice::ALL {
            let mut p = Player::new("Ava");
            let outcome = advance(&mut p, Action::Path(path), &mut rng).unwrap();
            assert_eq!(p.health, 100 - path.damage());
            assert_eq!(p.location, Some(path));
            assert_eq!(p.stage, Stage::Stage2);
            assert!(p.inventory.is_empty());
            assert_eq!(
                outcome,
                StageOutcome::PathTaken {
                    path,
                    damage: path.damage()
                }
            );
        }
    }

    #[test]
    fn test_riddle_one_correct_grants_lantern() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage2);
        advance(&mut p, Action::Answer(" EGG ".into()), &mut rng).unwrap();
        assert_eq!(p.health, 105);
        assert_eq!(p.gold, 1);
        assert_eq!(p.time, 110);
        assert!(p.has_item(Item::Lantern));
        assert_eq!(p.stage, Stage::Stage3);
    }

    #[test]
    fn test_riddle_one_wrong_penalty() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut p = player_at(Stage::Stage2);
            advance(&mut p, Action::Answer("chicken".into()), &mut rng).unwrap();
            assert!(p.health == 95 || p.health == 90);
            assert_eq!(p.time, 90);
            assert_eq!(p.gold, 0);
            assert!(p.inventory.is_empty());
        }
    }

    #[test]
    fn test_riddle_two_correct_grants_rope() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage3);
        advance(&mut p, Action::Answer("Echo".into()), &mut rng).unwrap();
        assert_eq!(p.health, 105);
        assert_eq!(p.gold, 2);
        assert_eq!(p.time, 110);
        assert!(p.has_item(Item::Rope));
        assert_eq!(p.stage, Stage::Stage4);
    }

    #[test]
    fn test_riddle_two_wrong_with_lantern() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage3);
        p.inventory.add(Item::Lantern);
        advance(&mut p, Action::Answer("wind".into()), &mut rng).unwrap();
        assert_eq!(p.health, 95);
        assert_eq!(p.gold, 1);
        assert_eq!(p.time, 100);
    }

    #[test]
    fn test_riddle_two_wrong_without_lantern() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut p = player_at(Stage::Stage3);
            advance(&mut p, Action::Answer("wind".into()), &mut rng).unwrap();
            assert!((85..=95).contains(&p.health), "health was {}", p.health);
            assert_eq!(p.gold, 0);
        }
    }

    #[test]
    fn test_bridge_wait_costs_time() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage4);
        let outcome = advance(&mut p, Action::Bridge(BridgeChoice::Wait), &mut rng).unwrap();
        assert_eq!(p.time, 85);
        assert_eq!(p.health, 100);
        assert_eq!(p.gold, 0);
        assert!(matches!(
            outcome,
            StageOutcome::Bridge {
                result: None,
                found_cache: false,
                ..
            }
        ));
    }

    #[test]
    fn test_bridge_rope_finds_cache() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage4);
        p.inventory.add(Item::Rope);
        advance(&mut p, Action::Bridge(BridgeChoice::Wait), &mut rng).unwrap();
        assert_eq!(p.gold, 2);
    }

    #[test]
    fn test_bridge_cross_outcomes() {
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut p = player_at(Stage::Stage4);
            let outcome =
                advance(&mut p, Action::Bridge(BridgeChoice::CrossNow), &mut rng).unwrap();
            match outcome {
                StageOutcome::Bridge {
                    result: Some(BridgeOutcome::Safe),
                    ..
                } => assert_eq!(p.health, 100),
                StageOutcome::Bridge {
                    result: Some(BridgeOutcome::Injured),
                    ..
                } => assert_eq!(p.health, 90),
                StageOutcome::Bridge {
                    result: Some(BridgeOutcome::Fell),
                    ..
                } => assert_eq!(p.health, 0),
                other => panic!("unexpected outcome {:?}", other),
            }
            assert_eq!(p.time, 100);
        }
    }

    #[test]
    fn test_vault_code_drawn_on_arrival() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage4);
        assert!(p.vault_code.is_none());
        advance(&mut p, Action::Bridge(BridgeChoice::Wait), &mut rng).unwrap();
        let code = p.vault_code.expect("code drawn on arrival");
        assert!((1..=5).contains(&code));
    }

    #[test]
    fn test_vault_correct_dial_and_riddle() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage5);
        p.vault_code = Some(3);
        let outcome = advance(
            &mut p,
            Action::Vault {
                answer: "Future".into(),
                dial: 3,
            },
            &mut rng,
        )
        .unwrap();
        assert_eq!(p.gold, 5);
        assert_eq!(p.time, 110);
        assert!(p.complete);
        assert_eq!(p.stage, Stage::Done);
        assert_eq!(
            outcome,
            StageOutcome::Vault {
                riddle_solved: true,
                dial_matched: true,
                code: 3
            }
        );
    }

    #[test]
    fn test_vault_wrong_dial_still_completes() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage5);
        p.vault_code = Some(2);
        advance(
            &mut p,
            Action::Vault {
                answer: "tomorrow".into(),
                dial: 4,
            },
            &mut rng,
        )
        .unwrap();
        assert_eq!(p.gold, 0);
        assert_eq!(p.time, 90);
        assert!(p.complete);
    }

    #[test]
    fn test_rejections_leave_player_untouched() {
        let mut rng = seeded_rng();
        let mut p = Player::new("Ava");
        let before = p.clone();

        let err = advance(&mut p, Action::Answer("egg".into()), &mut rng).unwrap_err();
        assert_eq!(err, ActionRejected::WrongStage(Stage::Stage1));
        assert_eq!(p, before);

        p.stage = Stage::Stage2;
        let before = p.clone();
        let err = advance(&mut p, Action::Answer("   ".into()), &mut rng).unwrap_err();
        assert_eq!(err, ActionRejected::EmptyAnswer);
        assert_eq!(p, before);

        p.stage = Stage::Stage5;
        let before = p.clone();
        let err = advance(
            &mut p,
            Action::Vault {
                answer: "future".into(),
                dial: 0,
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, ActionRejected::DialOutOfRange(0));
        assert_eq!(p, before);
    }

    #[test]
    fn test_complete_player_rejects_actions() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Done);
        p.complete = true;
        let err = advance(&mut p, Action::Path(PathChoice::RockyPass), &mut rng).unwrap_err();
        assert_eq!(err, ActionRejected::AlreadyComplete);
    }

    #[test]
    fn test_correct_branch_applies_once() {
        let mut rng = seeded_rng();
        let mut p = player_at(Stage::Stage2);
        advance(&mut p, Action::Answer("egg".into()), &mut rng).unwrap();
        // Re-submitting the same answer lands on the next stage's riddle instead.
        advance(&mut p, Action::Answer("egg".into()), &mut rng).unwrap();
        assert_eq!(p.inventory.items(), &[Item::Lantern]);
        assert_eq!(p.stage, Stage::Stage4);
        // Lantern softened the wrong cave answer: +1 gold from stage 2, +1 from the lantern.
        assert_eq!(p.gold, 2);
    }
}
