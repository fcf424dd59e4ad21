use crate::api::config::GameMode;
use crate::api::types::Player;
use crate::core::registry::BallRegistry;
use crate::systems::score::Scoreboard;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Winner(Player),
    Draw,
    /// Solo table cleared.
    Cleared { score: u32, shots: u32 },
}

impl Outcome {
    /// Wire code: 1/2 = that player won, 0 = draw, 3 = solo clear.
    pub fn code(&self) -> f32 {
        match self {
            Outcome::Winner(player) => (player.index() + 1) as f32,
            Outcome::Draw => 0.0,
            Outcome::Cleared { .. } => 3.0,
        }
    }
}

/// Points per shot, the solo high-score measure. Zero shots count as one.
pub fn efficiency(score: u32, shots: u32) -> f64 {
    score as f64 / shots.max(1) as f64
}

/// `None` while any object ball is still on the table.
pub fn evaluate(
    registry: &BallRegistry,
    scores: &Scoreboard,
    mode: GameMode,
    shots: u32,
) -> Option<Outcome> {
    if registry.numbered_count() > 0 {
        return None;
    }

    let one = scores.get(Player::One);
    let two = scores.get(Player::Two);
    let outcome = match mode {
        GameMode::Solo => Outcome::Cleared { score: one, shots },
        GameMode::Versus if one > two => Outcome::Winner(Player::One),
        GameMode::Versus if two > one => Outcome::Winner(Player::Two),
        GameMode::Versus => Outcome::Draw,
    };
    Some(outcome)
}
