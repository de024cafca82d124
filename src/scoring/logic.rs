//! Applies the return-journey bonus and ranks players by gold.

use super::{ReturnTier, ScoringRule, Standing};
use crate::constants::*;
use crate::hunt::Player;

/// Which tier a player lands in and the new gold total under `rule`.
pub fn return_bonus(player: &Player, rule: ScoringRule) -> (ReturnTier, i32) {
    match rule {
        ScoringRule::Tiered => {
            if player.health > STRONG_HEALTH_THRESHOLD && player.time > QUICK_TIME_THRESHOLD {
                (
                    ReturnTier::StrongAndQuick,
                    player.gold + TIERED_STRONG_BONUS,
                )
            } else if player.health > SURVIVAL_HEALTH_THRESHOLD {
                (
                    ReturnTier::BarelyMadeIt,
                    player.gold + TIERED_SURVIVED_BONUS,
                )
            } else {
                (ReturnTier::DidNotSurvive, 0)
            }
        }
        ScoringRule::Flat => {
            if player.health > STRONG_HEALTH_THRESHOLD {
                (ReturnTier::Healthy, player.gold + FLAT_HEALTHY_BONUS)
            } else {
                (ReturnTier::Weary, player.gold + FLAT_BASE_BONUS)
            }
        }
    }
}

/// Apply the bonus to every player and return standings, best first.
///
/// Mutates gold, so callers must run this exactly once per finished game;
/// `Game` caches the result for that reason.
pub fn finalize(players: &mut [Player], rule: ScoringRule) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter_mut()
        .map(|player| {
            let before = player.gold;
            let (tier, gold) = return_bonus(player, rule);
            player.gold = gold.max(0);
            let bonus = player.gold - before;
            Standing {
                rank: 0,
                name: player.name.clone(),
                gold: player.gold,
                bonus,
                health: player.display_health(),
                time: player.time,
                tier,
                message: tier.message(&player.name, bonus),
            }
        })
        .collect();

    rank(&mut standings);
    standings
}

/// Sort by gold descending. Stable, so ties keep roster order.
pub fn rank(standings: &mut [Standing]) {
    standings.sort_by(|a, b| b.gold.cmp(&a.gold));
    for (i, standing) in standings.iter_mut().enumerate() {
        standing.rank = i + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunt::Stage;

    fn finished(name: &str, health: i32, time: i32, gold: i32) -> Player {
        let mut p = Player::new(name);
        p.health = health;
        p.time = time;
        p.gold = gold;
        p.stage = Stage::Done;
        p.complete = true;
        p
    }

    #[test]
    fn test_tiered_strong_and_quick() {
        let p = finished("A", 80, 60, 4);
        assert_eq!(
            return_bonus(&p, ScoringRule::Tiered),
            (ReturnTier::StrongAndQuick, 7)
        );
    }

    #[test]
    fn test_tiered_slow_but_healthy_gets_small_bonus() {
        let p = finished("A", 80, 50, 4);
        assert_eq!(
            return_bonus(&p, ScoringRule::Tiered),
            (ReturnTier::BarelyMadeIt, 5)
        );
    }

    #[test]
    fn test_tiered_boundaries_are_exclusive() {
        let p = finished("A", 25, 100, 4);
        assert_eq!(
            return_bonus(&p, ScoringRule::Tiered),
            (ReturnTier::DidNotSurvive, 0)
        );
        let p = finished("A", 26, 100, 4);
        assert_eq!(
            return_bonus(&p, ScoringRule::Tiered).0,
            ReturnTier::BarelyMadeIt
        );
    }

    #[test]
    fn test_flat_never_resets() {
        let p = finished("A", -10, -10, 3);
        assert_eq!(return_bonus(&p, ScoringRule::Flat), (ReturnTier::Weary, 4));
        let p = finished("A", 90, 0, 3);
        assert_eq!(
            return_bonus(&p, ScoringRule::Flat),
            (ReturnTier::Healthy, 5)
        );
    }

    #[test]
    fn test_finalize_ranks_by_gold() {
        let mut players = vec![
            finished("Ava", 80, 60, 2),
            finished("Bo", 10, 10, 9),
            finished("Cy", 40, 40, 3),
        ];
        let standings = finalize(&mut players, ScoringRule::Tiered);

        let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ava", "Cy", "Bo"]);
        assert_eq!(standings[0].gold, 5);
        assert_eq!(standings[0].bonus, 3);
        assert_eq!(standings[1].gold, 4);
        assert_eq!(standings[2].gold, 0);
        assert_eq!(standings[2].bonus, -9);
        assert_eq!(standings[2].message, "Bo didn't survive the return.");
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(players[1].gold, 0);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let mut players = vec![finished("First", 80, 80, 1), finished("Second", 80, 80, 1)];
        let standings = finalize(&mut players, ScoringRule::Tiered);
        assert_eq!(standings[0].name, "First");
        assert_eq!(standings[1].name, "Second");
    }

    #[test]
    fn test_standing_health_is_clamped() {
        let mut players = vec![finished("Ava", 130, 80, 0)];
        let standings = finalize(&mut players, ScoringRule::Tiered);
        assert_eq!(standings[0].health, 100);
    }
}
