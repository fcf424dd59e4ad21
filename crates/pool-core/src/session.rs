//! One game at one table.
//!
//! A [`Session`] owns the registry, pockets, scores, turn state and the
//! buffered input. Input methods only record what happened, in arrival
//! order; the commands are replayed at the start of the next
//! [`Session::step`], which is the single place state changes. A restart
//! rebuilds all of it inside one step and discards only the commands that
//! arrived before it.

use glam::Vec2;

use crate::api::config::{GameMode, PoolConfig};
use crate::api::types::Player;
use crate::components::ball::{rack_positions, Ball, BallKind};
use crate::components::table::{Pocket, Table};
use crate::core::collision::resolve_collisions;
use crate::core::physics::{step_balls, Damping};
use crate::core::registry::BallRegistry;
use crate::renderer::traits::{AimView, FrameData};
use crate::systems::outcome::{self, Outcome};
use crate::systems::pockets::{detect_pockets, PocketRules};
use crate::systems::rng::Rng;
use crate::systems::score::Scoreboard;
use crate::systems::turn::{TurnManager, TurnState};

/// One buffered input, replayed in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Aim(Vec2),
    ShotStart,
    Release(Vec2),
    Restart(GameMode),
}

/// What changed during one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// The session was rebuilt at the start of this step.
    pub restarted: bool,
    /// A shot was taken by this player.
    pub shot: Option<Player>,
    /// Ordinals of object balls pocketed this step.
    pub pocketed: Vec<u8>,
    /// Owners of cue balls respotted this step.
    pub fouls: Vec<Player>,
    /// The motion episode ended and the turn moved to this state.
    pub settled: Option<TurnState>,
}

impl StepReport {
    pub fn scores_changed(&self) -> bool {
        self.restarted || !self.pocketed.is_empty()
    }
}

pub struct Session {
    config: PoolConfig,
    table: Table,
    pockets: [Pocket; 6],
    damping: Damping,
    balls: BallRegistry,
    scores: Scoreboard,
    turn: TurnManager,
    shots: u32,
    /// Last known pointer position, kept across steps for aiming.
    pointer: Option<Vec2>,
    /// Shot input is held down by the aiming player.
    charging: bool,
    pending: Vec<Command>,
    rng: Rng,
}

impl Session {
    pub fn new(config: PoolConfig) -> Self {
        let table = Table::from_config(&config);
        let pockets = table.pockets(config.pocket_radius, config.pocket_inset);
        let mut session = Self {
            damping: Damping::from_config(&config),
            turn: TurnManager::new(config.mode),
            rng: Rng::new(config.seed),
            table,
            pockets,
            balls: BallRegistry::new(),
            scores: Scoreboard::new(),
            shots: 0,
            pointer: None,
            charging: false,
            pending: Vec::new(),
            config,
        };
        session.rack();
        session
    }

    // -- Buffered input --

    /// Latest aim target.
    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pending.push(Command::Aim(pos));
    }

    /// Begin charging a shot.
    pub fn shot_start(&mut self) {
        self.pending.push(Command::ShotStart);
    }

    /// Release the shot toward the cue ball from `pos`.
    pub fn shot_release(&mut self, pos: Vec2) {
        self.pending.push(Command::Release(pos));
    }

    /// Throw the current game away and rack again in `mode` on the next step.
    pub fn request_restart(&mut self, mode: GameMode) {
        self.pending.push(Command::Restart(mode));
    }

    // -- Lifecycle --

    /// Rebuild registry, scores and turn state from the config, right now.
    /// Any buffered input and the last pointer go with the old game.
    pub fn restart(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.table = Table::from_config(&self.config);
        self.pockets = self.table.pockets(self.config.pocket_radius, self.config.pocket_inset);
        self.damping = Damping::from_config(&self.config);
        self.turn = TurnManager::new(mode);
        self.scores.reset();
        self.shots = 0;
        self.charging = false;
        self.pointer = None;
        self.pending.clear();
        self.rack();
        log::info!("Table restarted ({:?})", mode);
    }

    /// Replace the rules and restart under them.
    pub fn reconfigure(&mut self, config: PoolConfig) {
        let mode = config.mode;
        self.rng = Rng::new(config.seed);
        self.config = config;
        self.restart(mode);
    }

    fn rack(&mut self) {
        self.balls.clear();
        let radius = self.config.ball_radius;

        let owners: &[Player] = match self.config.mode {
            GameMode::Versus => &Player::ALL,
            GameMode::Solo => &[Player::One],
        };
        for &owner in owners {
            let id = self.balls.next_id();
            let spot = self.table.cue_spawn(owner);
            self.balls.spawn(Ball::new(id, BallKind::Cue { owner }, radius).with_pos(spot));
        }

        let jitter = self.config.rack_jitter;
        for (ordinal, pos) in rack_positions(self.table.rack_apex(), radius) {
            let offset = Vec2::new(self.rng.jitter(jitter), self.rng.jitter(jitter));
            let id = self.balls.next_id();
            let pos = self.table.clamp_center(pos + offset, radius);
            self.balls.spawn(Ball::new(id, BallKind::Numbered { ordinal }, radius).with_pos(pos));
        }

        log::info!("Racked {} balls", self.balls.len());
    }

    // -- Frame step --

    /// Advance the table by one fixed step.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        self.apply_input(&mut report);

        let TurnState::InMotion { shooter } = self.turn.state() else {
            return report;
        };

        step_balls(&mut self.balls, &self.table, self.damping);
        resolve_collisions(&mut self.balls, &self.table);

        let rules = PocketRules {
            shooter,
            points: self.config.score_per_ball,
        };
        let drops = detect_pockets(&mut self.balls, &self.pockets, &self.table, rules, &mut self.scores);
        if !drops.pocketed.is_empty() {
            self.turn.on_pocketed();
        }
        report.pocketed = drops.pocketed;
        report.fouls = drops.fouls;

        if self.balls.all_at_rest() {
            let verdict = outcome::evaluate(&self.balls, &self.scores, self.config.mode, self.shots);
            report.settled = self.turn.settle(verdict);
            match report.settled {
                Some(TurnState::GameOver(outcome)) => log::info!("Game over: {:?}", outcome),
                Some(next) => log::debug!("Balls at rest, next: {:?}", next),
                None => {}
            }
        }

        report
    }

    fn apply_input(&mut self, report: &mut StepReport) {
        let mut commands = std::mem::take(&mut self.pending);

        // Only what arrived after the last restart belongs to the new game.
        if let Some(last) = commands.iter().rposition(|c| matches!(c, Command::Restart(_))) {
            if let Command::Restart(mode) = commands[last] {
                self.restart(mode);
                report.restarted = true;
            }
            commands.drain(..=last);
        }

        for command in commands {
            match command {
                Command::Aim(pos) => self.pointer = Some(pos),
                Command::ShotStart => {
                    if matches!(self.turn.state(), TurnState::Aiming(_)) {
                        self.charging = true;
                    } else {
                        log::debug!("Shot start ignored in {:?}", self.turn.state());
                    }
                }
                Command::Release(pos) => {
                    self.pointer = Some(pos);
                    let was_charging = std::mem::replace(&mut self.charging, false);
                    match self.turn.state() {
                        TurnState::Aiming(player) if was_charging => {
                            if self.take_shot(player, pos) {
                                report.shot = Some(player);
                            }
                        }
                        state => log::debug!(
                            "Shot release ignored in {:?} (charging: {})",
                            state,
                            was_charging
                        ),
                    }
                }
                Command::Restart(_) => {}
            }
        }
    }

    /// Strike `player`'s cue ball away from `target`. A release on the
    /// cue ball centre has no direction and is ignored.
    fn take_shot(&mut self, player: Player, target: Vec2) -> bool {
        let Some(aim) = self.aim_for(player, target) else {
            return false;
        };
        if aim.power <= 0.0 || aim.direction == Vec2::ZERO {
            log::debug!("Shot with no power ignored");
            return false;
        }

        let velocity = aim.direction * aim.power * self.config.max_power;
        let Some(cue) = self.balls.cue_ball_mut(player) else {
            return false;
        };
        cue.vel = velocity;

        self.turn.begin_shot();
        self.shots += 1;
        log::info!("{:?} shoots at {:.0}% power", player, aim.power * 100.0);
        true
    }

    fn aim_for(&self, player: Player, target: Vec2) -> Option<AimView> {
        let cue = self.balls.cue_ball(player)?.pos;
        let pull = cue - target;
        let power = (pull.length() / self.config.power_span).clamp(0.0, 1.0);
        Some(AimView {
            player,
            cue,
            direction: pull.normalize_or_zero(),
            power,
            charging: self.charging,
        })
    }

    // -- Read access --

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    pub fn balls(&self) -> &BallRegistry {
        &self.balls
    }

    pub fn turn(&self) -> TurnState {
        self.turn.state()
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn.state() {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Power the aiming player would shoot with right now, 0.0..=1.0.
    pub fn power_level(&self) -> f32 {
        self.current_aim().map_or(0.0, |aim| aim.power)
    }

    fn current_aim(&self) -> Option<AimView> {
        let TurnState::Aiming(player) = self.turn.state() else {
            return None;
        };
        self.aim_for(player, self.pointer?)
    }

    /// Borrowed view of everything a renderer needs.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            table: &self.table,
            pockets: &self.pockets,
            balls: self.balls.as_slice(),
            turn: self.turn.state(),
            scores: self.scores.as_array(),
            aim: self.current_aim(),
        }
    }

    /// Direct mutable access to the registry, for setting up positions in tests.
    #[cfg(test)]
    pub(crate) fn balls_mut(&mut self) -> &mut BallRegistry {
        &mut self.balls
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}
