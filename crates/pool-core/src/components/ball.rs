//! Pool ball data: identity, colours and rack positions.

use glam::Vec2;

use crate::api::types::{BallId, Player};

/// What a ball is, beyond its shared disc shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    /// Struck directly by its owner. Respawns instead of leaving the table.
    Cue { owner: Player },
    /// Racked object ball, 1..=15. Removed when pocketed.
    Numbered { ordinal: u8 },
}

/// Surface finish, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Cue,
    Solid,
    Striped,
}

/// RGB colour in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl BallColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

const CUE_WHITE: BallColor = BallColor::new(1.0, 1.0, 1.0);
const GOLD: BallColor = BallColor::new(1.0, 0.84, 0.0);
const BLACK: BallColor = BallColor::new(0.0, 0.0, 0.0);
const DARK_BLUE: BallColor = BallColor::new(0.0, 0.0, 0.545);

impl BallKind {
    pub fn is_cue(self) -> bool {
        matches!(self, BallKind::Cue { .. })
    }

    pub fn ordinal(self) -> Option<u8> {
        match self {
            BallKind::Numbered { ordinal } => Some(ordinal),
            BallKind::Cue { .. } => None,
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            BallKind::Cue { owner } => Some(owner),
            BallKind::Numbered { .. } => None,
        }
    }

    /// 1-7 gold, 8 black, 9-15 dark blue.
    pub fn color(self) -> BallColor {
        match self {
            BallKind::Cue { .. } => CUE_WHITE,
            BallKind::Numbered { ordinal: 8 } => BLACK,
            BallKind::Numbered { ordinal } if ordinal <= 7 => GOLD,
            BallKind::Numbered { .. } => DARK_BLUE,
        }
    }

    pub fn finish(self) -> Finish {
        match self {
            BallKind::Cue { .. } => Finish::Cue,
            BallKind::Numbered { ordinal } if ordinal >= 9 => Finish::Striped,
            BallKind::Numbered { .. } => Finish::Solid,
        }
    }
}

/// One disc on the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    pub kind: BallKind,
    /// Centre in world space.
    pub pos: Vec2,
    /// Table units per step.
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Create a ball at rest at the origin.
    pub fn new(id: BallId, kind: BallKind, radius: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Exactly zero on both axes.
    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Number of object balls in a full rack.
pub const RACK_SIZE: usize = 15;

/// Triangle rack, apex pointing left at `apex`, five rows spreading right.
/// Rows are `2r + 2` apart; balls within a row `2r` apart, centred on
/// `apex.y`. Ordinals run 1..=15 in row order, top to bottom.
///
/// ```text
///  1
///  2  3
///  4  5  6
///  7  8  9 10
/// 11 12 13 14 15
/// ```
pub fn rack_positions(apex: Vec2, ball_radius: f32) -> [(u8, Vec2); RACK_SIZE] {
    let row_step = ball_radius * 2.0 + 2.0;
    let mut out = [(0u8, Vec2::ZERO); RACK_SIZE];
    let mut ordinal = 1u8;

    for row in 0..5 {
        for col in 0..=row {
            let x = apex.x + row as f32 * row_step;
            let y = apex.y - (row as f32 * ball_radius - col as f32 * ball_radius * 2.0);
            out[(ordinal - 1) as usize] = (ordinal, Vec2::new(x, y));
            ordinal += 1;
        }
    }

    out
}
