//! Render boundary.
//!
//! Drawing happens outside the core. A renderer receives a borrowed
//! [`FrameData`] after each frame and must not feed anything back into the
//! session. [`InstanceWriter`] is the renderer used by the web bridge: it
//! flattens the frame into the shared ball and cue-guide buffers.

use glam::Vec2;

use crate::api::types::Player;
use crate::components::ball::{Ball, Finish};
use crate::components::table::{Pocket, Table};
use crate::systems::turn::TurnState;

use super::instance::{BallBuffer, BallInstance, CueGuide};

/// What the aiming player currently sees: cue position, shot direction and power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimView {
    pub player: Player,
    pub cue: Vec2,
    /// Unit direction the cue ball would travel; zero when the pointer sits on it.
    pub direction: Vec2,
    /// 0.0..=1.0 of full power.
    pub power: f32,
    pub charging: bool,
}

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    pub table: &'a Table,
    pub pockets: &'a [Pocket],
    /// Balls in registry order.
    pub balls: &'a [Ball],
    pub turn: TurnState,
    pub scores: [u32; 2],
    /// Present only while a player is aiming and has a pointer position.
    pub aim: Option<AimView>,
}

/// Contract for anything that draws a frame.
pub trait Renderer {
    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);
}

/// Writes frames into the flat buffers read by the JS renderer.
pub struct InstanceWriter<'a> {
    balls: &'a mut BallBuffer,
    guide: &'a mut CueGuide,
}

impl<'a> InstanceWriter<'a> {
    pub fn new(balls: &'a mut BallBuffer, guide: &'a mut CueGuide) -> Self {
        Self { balls, guide }
    }
}

fn ball_instance(ball: &Ball, active: Option<Player>) -> BallInstance {
    let color = ball.kind.color();
    let mut flags = 0;
    match ball.kind.finish() {
        Finish::Cue => flags |= BallInstance::FLAG_CUE,
        Finish::Striped => flags |= BallInstance::FLAG_STRIPED,
        Finish::Solid => {}
    }
    if let Some(owner) = ball.kind.owner() {
        if Some(owner) == active {
            flags |= BallInstance::FLAG_ACTIVE;
        }
        if owner == Player::Two {
            flags |= BallInstance::FLAG_PLAYER_TWO;
        }
    }

    BallInstance {
        x: ball.pos.x,
        y: ball.pos.y,
        radius: ball.radius,
        number: ball.kind.ordinal().unwrap_or(0) as f32,
        r: color.r,
        g: color.g,
        b: color.b,
        flags: flags as f32,
    }
}

impl Renderer for InstanceWriter<'_> {
    fn draw(&mut self, frame: &FrameData) {
        let active = frame.turn.player();
        self.balls.clear();
        for ball in frame.balls {
            self.balls.push(ball_instance(ball, active));
        }

        *self.guide = match frame.aim {
            Some(aim) => CueGuide {
                visible: 1.0,
                x: aim.cue.x,
                y: aim.cue.y,
                dir_x: aim.direction.x,
                dir_y: aim.direction.y,
                power: aim.power,
                charging: if aim.charging { 1.0 } else { 0.0 },
                player: (aim.player.index() + 1) as f32,
            },
            None => CueGuide::hidden(),
        };
    }
}
