use glam::Vec2;

use crate::api::types::{BallId, Player};
use crate::components::ball::BallKind;
use crate::components::table::{Pocket, Table};
use crate::core::registry::BallRegistry;
use crate::systems::score::Scoreboard;

/// Who gets credited for drops in this pass, and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PocketRules {
    pub shooter: Player,
    pub points: u32,
}

/// Everything that dropped in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PocketReport {
    /// Ordinals of object balls removed from the table.
    pub pocketed: Vec<u8>,
    /// Owners of cue balls sent back to their spawn point.
    pub fouls: Vec<Player>,
}

/// Test every ball against every pocket and apply all captures.
///
/// An object ball is removed and `rules.shooter` is credited
/// `rules.points`. A cue ball is a foul: it goes back to its owner's spawn
/// point at rest, and nobody scores.
pub fn detect_pockets(
    registry: &mut BallRegistry,
    pockets: &[Pocket],
    table: &Table,
    rules: PocketRules,
    scores: &mut Scoreboard,
) -> PocketReport {
    let captured: Vec<(BallId, BallKind)> = registry
        .iter()
        .filter(|b| pockets.iter().any(|p| p.captures(b.pos, b.radius)))
        .map(|b| (b.id, b.kind))
        .collect();

    let mut report = PocketReport::default();

    for (id, kind) in captured {
        match kind {
            BallKind::Cue { owner } => {
                if let Some(ball) = registry.get_mut(id) {
                    ball.pos = table.cue_spawn(owner);
                    ball.vel = Vec2::ZERO;
                }
                log::info!("Foul: {:?} cue ball pocketed, respotted", owner);
                report.fouls.push(owner);
            }
            BallKind::Numbered { ordinal } => {
                registry.despawn(id);
                scores.credit(rules.shooter, rules.points);
                log::info!(
                    "Ball {} pocketed by {:?} (score {})",
                    ordinal,
                    rules.shooter,
                    scores.get(rules.shooter)
                );
                report.pocketed.push(ordinal);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ball::Ball;

    const R: f32 = 12.0;

    fn setup() -> (BallRegistry, Table, [Pocket; 6]) {
        let table = Table::new(700.0, 400.0, 22.0);
        let pockets = table.pockets(25.0, 25.0);
        (BallRegistry::new(), table, pockets)
    }

    fn spawn(reg: &mut BallRegistry, kind: BallKind, pos: Vec2) -> BallId {
        let id = reg.next_id();
        reg.spawn(Ball::new(id, kind, R).with_pos(pos))
    }

    const RULES: PocketRules = PocketRules {
        shooter: Player::One,
        points: 10,
    };

    #[test]
    fn object_ball_scores_and_leaves() {
        let (mut reg, table, pockets) = setup();
        spawn(&mut reg, BallKind::Cue { owner: Player::One }, Vec2::new(175.0, 200.0));
        spawn(&mut reg, BallKind::Numbered { ordinal: 5 }, Vec2::new(34.0, 34.0));
        let before = reg.len();
        let mut scores = Scoreboard::new();

        let report = detect_pockets(&mut reg, &pockets, &table, RULES, &mut scores);

        assert_eq!(report.pocketed, vec![5]);
        assert!(report.fouls.is_empty());
        assert_eq!(reg.len(), before - 1);
        assert_eq!(scores.get(Player::One), 10);
        assert_eq!(scores.get(Player::Two), 0);
    }

    #[test]
    fn cue_ball_is_respotted_without_score() {
        let (mut reg, table, pockets) = setup();
        let cue = spawn(&mut reg, BallKind::Cue { owner: Player::Two }, Vec2::new(350.0, 34.0));
        reg.get_mut(cue).unwrap().vel = Vec2::new(0.0, -3.0);
        let mut scores = Scoreboard::new();

        let report = detect_pockets(&mut reg, &pockets, &table, RULES, &mut scores);

        assert_eq!(report.fouls, vec![Player::Two]);
        assert_eq!(reg.len(), 1, "cue balls never leave the registry");
        let ball = reg.get(cue).unwrap();
        assert_eq!(ball.pos, table.cue_spawn(Player::Two));
        assert!(ball.is_at_rest());
        assert_eq!(scores.as_array(), [0, 0]);
    }

    #[test]
    fn several_drops_in_one_pass() {
        let (mut reg, table, pockets) = setup();
        spawn(&mut reg, BallKind::Numbered { ordinal: 1 }, Vec2::new(34.0, 34.0));
        spawn(&mut reg, BallKind::Numbered { ordinal: 2 }, Vec2::new(300.0, 200.0));
        spawn(&mut reg, BallKind::Numbered { ordinal: 3 }, Vec2::new(666.0, 366.0));
        let mut scores = Scoreboard::new();
        let rules = PocketRules { shooter: Player::Two, points: 10 };

        let report = detect_pockets(&mut reg, &pockets, &table, rules, &mut scores);

        assert_eq!(report.pocketed, vec![1, 3]);
        assert_eq!(reg.numbered_count(), 1);
        assert_eq!(scores.get(Player::Two), 20);
    }

    #[test]
    fn near_miss_stays_on_table() {
        let (mut reg, table, pockets) = setup();
        // 13.0 from the corner pocket centre: exactly on the capture edge.
        spawn(&mut reg, BallKind::Numbered { ordinal: 9 }, Vec2::new(25.0 + 13.0, 25.0));
        let mut scores = Scoreboard::new();
        let report = detect_pockets(&mut reg, &pockets, &table, RULES, &mut scores);
        assert_eq!(report, PocketReport::default());
        assert_eq!(reg.len(), 1);
    }
}
