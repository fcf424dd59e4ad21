use pool_core::bridge::protocol::{
    HEADER_BALL_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_MAX_BALLS,
    HEADER_MAX_EVENTS, HEADER_PROTOCOL_VERSION, HEADER_WORLD_HEIGHT, HEADER_WORLD_WIDTH,
    PROTOCOL_VERSION,
};
use pool_core::{
    BallBuffer, CueGuide, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
    ProtocolLayout, RenderContext, ScalarStore,
};

use crate::storage::LocalStorageStore;

/// Generic game runner that wires a [`Game`] to the browser frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner through
/// [`export_game!`](crate::export_game) and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs.
///
/// Wall-clock frame time goes through a [`FixedTimestep`], so the game only
/// ever sees whole fixed steps. Input received between frames is handed to
/// the first step of the next frame that runs at all.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    balls: BallBuffer,
    guide: CueGuide,
    header: [f32; HEADER_FLOATS],
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    frame: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    /// Runner persisting through the browser's localStorage.
    pub fn new(game: G) -> Self {
        Self::with_store(game, Box::new(LocalStorageStore::new()))
    }

    /// Runner persisting through an explicit store.
    pub fn with_store(game: G, store: Box<dyn ScalarStore>) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::with_store(store),
            input: InputQueue::new(),
            balls: BallBuffer::with_capacity(config.max_balls),
            guide: CueGuide::hidden(),
            header: [0.0; HEADER_FLOATS],
            timestep,
            layout,
            config,
            frame: 0,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep =
            FixedTimestep::with_max_steps(self.config.fixed_dt, self.config.max_steps_per_frame);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.render();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Replace the game's rules from JSON. Takes effect on the next step.
    pub fn load_config(&mut self, json: &str) {
        self.game.load_config(json);
    }

    /// Run one frame: as many fixed steps as `dt` (seconds) pays for, then
    /// rebuild the shared buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        if steps > 0 {
            let idle = InputQueue::new();
            for step in 0..steps {
                let input = if step == 0 { &self.input } else { &idle };
                self.game.update(&mut self.ctx, input);
            }
            self.input.clear();
            self.sync_config();
        }

        self.ctx.events.truncate(self.config.max_events);
        self.frame = self.frame.wrapping_add(1);
        self.render();
    }

    /// Pick up config the game changed while stepping, e.g. a reloaded table size.
    fn sync_config(&mut self) {
        let config = self.game.config();
        if config.world_width != self.config.world_width
            || config.world_height != self.config.world_height
        {
            log::info!("World resized to {}x{}", config.world_width, config.world_height);
        }
        if config.max_balls != self.config.max_balls || config.max_events != self.config.max_events {
            self.layout = ProtocolLayout::from_config(&config);
            log::info!("Buffer layout now {} floats", self.layout.buffer_total_floats);
        }
        if config.fixed_dt != self.config.fixed_dt
            || config.max_steps_per_frame != self.config.max_steps_per_frame
        {
            self.timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame);
        }
        self.config = config;
    }

    fn render(&mut self) {
        {
            let mut render_ctx = RenderContext {
                balls: &mut self.balls,
                guide: &mut self.guide,
                header: &mut self.header,
            };
            self.game.render(&mut render_ctx);
        }

        if self.balls.instances().len() > self.layout.max_balls {
            log::warn!(
                "{} balls exceed buffer capacity {}",
                self.balls.instances().len(),
                self.layout.max_balls
            );
        }

        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_WORLD_WIDTH] = self.config.world_width;
        h[HEADER_WORLD_HEIGHT] = self.config.world_height;
        h[HEADER_MAX_BALLS] = self.layout.max_balls as f32;
        h[HEADER_BALL_COUNT] = self.balls.instance_count().min(self.layout.max_balls as u32) as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn balls_ptr(&self) -> *const f32 {
        self.balls.instances_ptr()
    }

    pub fn ball_count(&self) -> u32 {
        self.balls.instance_count()
    }

    pub fn guide_ptr(&self) -> *const f32 {
        &self.guide as *const CueGuide as *const f32
    }

    pub fn guide(&self) -> &CueGuide {
        &self.guide
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the page via wasm_bindgen exports) ----

    pub fn max_balls(&self) -> u32 {
        self.layout.max_balls as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
