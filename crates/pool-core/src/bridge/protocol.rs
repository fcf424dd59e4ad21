/// Shared buffer layout.
/// Must stay in sync with the page's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Balls: max_balls × 8 floats]
/// [Cue guide: 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The page reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::renderer::instance::{BallInstance, CueGuide};
use crate::api::types::GameEvent;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices. Slot 0 is reserved.
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_WORLD_WIDTH: usize = 3;
pub const HEADER_WORLD_HEIGHT: usize = 4;
pub const HEADER_MAX_BALLS: usize = 5;
pub const HEADER_BALL_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_TURN_STATE: usize = 9;
pub const HEADER_ACTIVE_PLAYER: usize = 10;
pub const HEADER_SCORE_ONE: usize = 11;
pub const HEADER_SCORE_TWO: usize = 12;
pub const HEADER_MODE: usize = 13;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_balls: usize,
    pub max_events: usize,

    /// Offset (in floats) where ball data begins.
    pub ball_data_offset: usize,
    /// Offset (in floats) of the cue guide.
    pub guide_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_balls: usize, max_events: usize) -> Self {
        let ball_data_offset = HEADER_FLOATS;
        let guide_offset = ball_data_offset + max_balls * BallInstance::FLOATS;
        let event_data_offset = guide_offset + CueGuide::FLOATS;
        let buffer_total_floats = event_data_offset + max_events * GameEvent::FLOATS;

        Self {
            max_balls,
            max_events,
            ball_data_offset,
            guide_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_balls, config.max_events)
    }
}
