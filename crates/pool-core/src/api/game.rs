use crate::api::types::GameEvent;
use crate::bridge::protocol::HEADER_FLOATS;
use crate::input::queue::InputQueue;
use crate::renderer::instance::{BallBuffer, CueGuide};
use crate::storage::{MemoryStore, ScalarStore};

/// Configuration for the frame driver, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Most fixed steps run for a single frame, however long it took.
    pub max_steps_per_frame: u32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of ball instances in the shared buffer (default: 32).
    pub max_balls: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 700.0,
            world_height: 400.0,
            max_balls: 32,
            max_events: 32,
        }
    }
}

/// The contract the frame driver calls into.
pub trait Game {
    /// Return driver configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and read anything persisted.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step. Buffered input is applied first, then the simulation.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass filling the shared buffers.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Replace the game's rules from a JSON document. Default: ignored.
    fn load_config(&mut self, _json: &str) {}
}

/// Mutable access to driver state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    /// Best-effort scalar persistence (high scores).
    pub store: Box<dyn ScalarStore>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Create an EngineContext backed by a specific scalar store.
    pub fn with_store(store: Box<dyn ScalarStore>) -> Self {
        Self {
            events: Vec::new(),
            store,
        }
    }

    /// Emit a game event to be forwarded to JavaScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the game's render pass.
/// The driver owns the capacity and count fields of `header`; the game fills
/// in its table state (turn, active player, scores, mode).
pub struct RenderContext<'a> {
    pub balls: &'a mut BallBuffer,
    pub guide: &'a mut CueGuide,
    pub header: &'a mut [f32; HEADER_FLOATS],
}
