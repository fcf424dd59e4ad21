pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod session;
pub mod input;
pub mod renderer;
pub mod bridge;
pub mod storage;

// Re-export key types at crate root for convenience
pub use api::config::{GameMode, PoolConfig};
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{BallId, GameEvent, Player};
pub use components::ball::{Ball, BallKind, Finish};
pub use components::table::{Pocket, Table};
pub use core::registry::BallRegistry;
pub use core::physics::Damping;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{BallBuffer, BallInstance, CueGuide};
pub use renderer::traits::{FrameData, InstanceWriter, Renderer};
pub use bridge::protocol::ProtocolLayout;
pub use session::{Session, StepReport};
pub use storage::{HighScore, MemoryStore, ScalarStore, StoreError};
pub use systems::outcome::Outcome;
pub use systems::score::Scoreboard;
pub use systems::turn::{TurnManager, TurnState};
