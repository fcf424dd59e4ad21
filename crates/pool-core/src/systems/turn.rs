//! Turn state machine.
//!
//! ```text
//! Aiming(p) --shot--> InMotion{shooter: p} --rest--> Aiming(p)        (ball pocketed)
//!                                          --rest--> Aiming(other(p)) (dry shot)
//!                                          --rest--> GameOver(outcome)
//! ```
//!
//! `GameOver` is terminal until the session is restarted.

use crate::api::config::GameMode;
use crate::api::types::Player;
use crate::systems::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnState {
    /// Waiting for `Player` to take a shot. No physics runs.
    Aiming(Player),
    /// Balls are rolling after `shooter`'s shot.
    InMotion { shooter: Player },
    GameOver(Outcome),
}

impl TurnState {
    /// Wire code: 0 = aiming, 1 = in motion, 2 = game over.
    pub fn code(&self) -> f32 {
        match self {
            TurnState::Aiming(_) => 0.0,
            TurnState::InMotion { .. } => 1.0,
            TurnState::GameOver(_) => 2.0,
        }
    }

    /// The player aiming or shooting; `None` once the game is over.
    pub fn player(&self) -> Option<Player> {
        match *self {
            TurnState::Aiming(player) => Some(player),
            TurnState::InMotion { shooter } => Some(shooter),
            TurnState::GameOver(_) => None,
        }
    }
}

pub struct TurnManager {
    state: TurnState,
    /// An object ball dropped during the current motion episode.
    potted: bool,
    /// Solo tables never hand the turn over.
    alternate: bool,
}

impl TurnManager {
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: TurnState::Aiming(Player::One),
            potted: false,
            alternate: mode == GameMode::Versus,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// `Aiming(p)` -> `InMotion{p}`. Returns the shooter, or `None` (and
    /// changes nothing) when nobody is aiming.
    pub fn begin_shot(&mut self) -> Option<Player> {
        match self.state {
            TurnState::Aiming(player) => {
                self.state = TurnState::InMotion { shooter: player };
                self.potted = false;
                Some(player)
            }
            _ => None,
        }
    }

    /// Record that an object ball dropped. Ignored outside a motion episode.
    pub fn on_pocketed(&mut self) {
        if matches!(self.state, TurnState::InMotion { .. }) {
            self.potted = true;
        }
    }

    /// Close the motion episode once every ball is at rest. `outcome` is the
    /// game-over verdict, checked before the turn is handed on. Returns the
    /// new state, or `None` when no episode was open.
    pub fn settle(&mut self, outcome: Option<Outcome>) -> Option<TurnState> {
        let TurnState::InMotion { shooter } = self.state else {
            return None;
        };

        self.state = match outcome {
            Some(outcome) => TurnState::GameOver(outcome),
            None if self.potted || !self.alternate => TurnState::Aiming(shooter),
            None => TurnState::Aiming(shooter.other()),
        };
        self.potted = false;
        Some(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_player_one_aiming() {
        let turns = TurnManager::new(GameMode::Versus);
        assert_eq!(turns.state(), TurnState::Aiming(Player::One));
    }

    #[test]
    fn dry_shot_passes_the_turn() {
        let mut turns = TurnManager::new(GameMode::Versus);
        assert_eq!(turns.begin_shot(), Some(Player::One));
        assert_eq!(turns.settle(None), Some(TurnState::Aiming(Player::Two)));
        assert_eq!(turns.begin_shot(), Some(Player::Two));
        assert_eq!(turns.settle(None), Some(TurnState::Aiming(Player::One)));
    }

    #[test]
    fn potting_keeps_the_turn() {
        let mut turns = TurnManager::new(GameMode::Versus);
        turns.begin_shot();
        turns.on_pocketed();
        assert_eq!(turns.settle(None), Some(TurnState::Aiming(Player::One)));
        // The flag belongs to one episode only.
        turns.begin_shot();
        assert_eq!(turns.settle(None), Some(TurnState::Aiming(Player::Two)));
    }

    #[test]
    fn solo_never_alternates() {
        let mut turns = TurnManager::new(GameMode::Solo);
        turns.begin_shot();
        assert_eq!(turns.settle(None), Some(TurnState::Aiming(Player::One)));
    }

    #[test]
    fn out_of_state_calls_are_no_ops() {
        let mut turns = TurnManager::new(GameMode::Versus);
        turns.on_pocketed();
        assert_eq!(turns.settle(None), None, "no episode to close");

        turns.begin_shot();
        assert_eq!(turns.begin_shot(), None, "no second shot while rolling");
        assert_eq!(turns.state(), TurnState::InMotion { shooter: Player::One });
    }

    #[test]
    fn game_over_is_terminal() {
        let mut turns = TurnManager::new(GameMode::Versus);
        turns.begin_shot();
        let over = TurnState::GameOver(Outcome::Draw);
        assert_eq!(turns.settle(Some(Outcome::Draw)), Some(over));
        assert_eq!(turns.begin_shot(), None);
        assert_eq!(turns.settle(None), None);
        assert_eq!(turns.state(), over);
        assert_eq!(turns.state().player(), None);
    }
}
