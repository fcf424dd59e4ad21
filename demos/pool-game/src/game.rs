//! Pool game - versus and solo 2D billiards on the pool-core session.
//! Pointer input aims and shoots, the page UI restarts and switches mode,
//! and scores, turns and results go back to the page as game events.

use glam::Vec2;
use pool_core::bridge::protocol::{
    HEADER_ACTIVE_PLAYER, HEADER_MODE, HEADER_SCORE_ONE, HEADER_SCORE_TWO, HEADER_TURN_STATE,
};
use pool_core::input::queue::{InputEvent, InputQueue};
use pool_core::systems::outcome::efficiency;
use pool_core::{
    EngineContext, Game, GameConfig, GameEvent, GameMode, HighScore, InstanceWriter, MemoryStore,
    Outcome, Player, PoolConfig, RenderContext, Renderer, Session, StepReport, TurnState,
};

/// localStorage key of the solo best points-per-shot.
const HIGH_SCORE_KEY: &str = "poolHighScore";

/// Custom event kinds from the page UI
mod events {
    /// `a` = mode code (0 versus, 1 solo); any other value keeps the mode.
    pub const RESTART: u32 = 1;
}

/// Game event kinds to the page
mod game_events {
    /// a = player (1 or 2), b = score
    pub const SCORE: f32 = 1.0;
    /// a = turn state code, b = active player (0 when over)
    pub const TURN: f32 = 2.0;
    /// a = outcome code, b = player one score, c = player two score (solo: c = shots)
    pub const GAME_OVER: f32 = 3.0;
    /// a = numbered balls left on the table
    pub const BALLS_REMAINING: f32 = 4.0;
    /// a = best points per shot, b = 1 when just beaten
    pub const HIGH_SCORE: f32 = 5.0;
}

pub struct PoolGame {
    session: Session,
    high_score: HighScore,
    /// Rules loaded from JSON, applied at the start of the next step.
    pending_config: Option<PoolConfig>,
}

impl PoolGame {
    pub fn new() -> Self {
        Self {
            session: Session::new(PoolConfig::default()),
            high_score: HighScore::load(&MemoryStore::new(), HIGH_SCORE_KEY),
            pending_config: None,
        }
    }

    fn apply_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => self.session.pointer_move(Vec2::new(x, y)),
                InputEvent::PointerDown { x, y } => {
                    self.session.pointer_move(Vec2::new(x, y));
                    self.session.shot_start();
                }
                InputEvent::PointerUp { x, y } => self.session.shot_release(Vec2::new(x, y)),
                InputEvent::Custom { kind, a, .. } if kind == events::RESTART => {
                    let mode = GameMode::from_code(a, self.session.mode());
                    self.session.request_restart(mode);
                }
                InputEvent::Custom { kind, .. } => log::debug!("Unknown custom event {}", kind),
            }
        }
    }

    fn emit_scores(&self, ctx: &mut EngineContext) {
        for player in Player::ALL {
            ctx.emit_event(GameEvent::new(
                game_events::SCORE,
                player_code(Some(player)),
                self.session.scores().get(player) as f32,
                0.0,
            ));
        }
    }

    fn emit_turn(&self, ctx: &mut EngineContext) {
        let turn = self.session.turn();
        ctx.emit_event(GameEvent::new(
            game_events::TURN,
            turn.code(),
            player_code(turn.player()),
            0.0,
        ));
    }

    fn emit_high_score(&self, ctx: &mut EngineContext, beaten: bool) {
        ctx.emit_event(GameEvent::new(
            game_events::HIGH_SCORE,
            self.high_score.best() as f32,
            if beaten { 1.0 } else { 0.0 },
            0.0,
        ));
    }

    fn record_outcome(&mut self, ctx: &mut EngineContext, outcome: Outcome) {
        let scores = self.session.scores().as_array();
        let event = match outcome {
            Outcome::Cleared { score, shots } => {
                GameEvent::new(game_events::GAME_OVER, outcome.code(), score as f32, shots as f32)
            }
            Outcome::Winner(_) | Outcome::Draw => GameEvent::new(
                game_events::GAME_OVER,
                outcome.code(),
                scores[0] as f32,
                scores[1] as f32,
            ),
        };
        ctx.emit_event(event);

        if let Outcome::Cleared { score, shots } = outcome {
            let value = efficiency(score, shots);
            let beaten = self.high_score.submit(&mut *ctx.store, value);
            if beaten {
                log::info!("New solo best: {:.2} points per shot", value);
            }
            self.emit_high_score(ctx, beaten);
        }
    }

    fn emit_report(&mut self, ctx: &mut EngineContext, report: &StepReport) {
        if report.scores_changed() {
            self.emit_scores(ctx);
        }
        if report.restarted || report.shot.is_some() || report.settled.is_some() {
            self.emit_turn(ctx);
        }
        if let Some(TurnState::GameOver(outcome)) = report.settled {
            self.record_outcome(ctx, outcome);
        }
        ctx.emit_event(GameEvent::new(
            game_events::BALLS_REMAINING,
            self.session.balls().numbered_count() as f32,
            0.0,
            0.0,
        ));
    }
}

/// 1 or 2 for a player, 0 for nobody.
fn player_code(player: Option<Player>) -> f32 {
    player.map_or(0.0, |p| (p.index() + 1) as f32)
}

impl Default for PoolGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PoolGame {
    fn config(&self) -> GameConfig {
        let rules = self.session.config();
        GameConfig {
            world_width: rules.table_width,
            world_height: rules.table_height,
            // Up to six events per step, ten steps per frame.
            max_events: 64,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.high_score = HighScore::load(&*ctx.store, HIGH_SCORE_KEY);
        log::info!("Solo best so far: {:.2}", self.high_score.best());
        self.emit_high_score(ctx, false);
        self.emit_scores(ctx);
        self.emit_turn(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if let Some(config) = self.pending_config.take() {
            self.session.reconfigure(config);
            self.emit_scores(ctx);
            self.emit_turn(ctx);
        }

        self.apply_input(input);
        let report = self.session.step();
        self.emit_report(ctx, &report);
    }

    fn render(&self, ctx: &mut RenderContext) {
        let frame = self.session.frame();
        InstanceWriter::new(&mut *ctx.balls, &mut *ctx.guide).draw(&frame);

        let turn = self.session.turn();
        ctx.header[HEADER_TURN_STATE] = turn.code();
        ctx.header[HEADER_ACTIVE_PLAYER] = player_code(turn.player());
        ctx.header[HEADER_SCORE_ONE] = frame.scores[0] as f32;
        ctx.header[HEADER_SCORE_TWO] = frame.scores[1] as f32;
        ctx.header[HEADER_MODE] = self.session.mode().code();
    }

    fn load_config(&mut self, json: &str) {
        match PoolConfig::from_json(json) {
            Ok(config) => {
                log::info!("Table config loaded, applied on next step");
                self.pending_config = Some(config);
            }
            Err(err) => log::warn!("Bad table config, keeping current rules: {}", err),
        }
    }
}
