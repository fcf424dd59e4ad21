use crate::api::config::PoolConfig;
use crate::components::ball::Ball;
use crate::components::table::Table;
use crate::core::registry::BallRegistry;

/// Cloth and cushion losses applied each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping {
    /// Velocity retained per step and per cushion rebound.
    pub friction: f32,
    /// Below this on both axes the ball stops dead.
    pub rest_speed: f32,
}

impl Damping {
    pub fn from_config(config: &PoolConfig) -> Self {
        Self {
            friction: config.friction,
            rest_speed: config.rest_speed,
        }
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            friction: 0.98,
            rest_speed: 0.1,
        }
    }
}

/// Advance one ball by one step.
///
/// Position moves by the full velocity, then each axis is checked against
/// the cushions on its own: a ball past a cushion is put back on the legal
/// boundary and that velocity component is reflected and damped. Friction
/// then applies to both components, and a ball slower than `rest_speed` on
/// both axes is snapped to exactly zero.
pub fn step_ball(ball: &mut Ball, table: &Table, damping: Damping) {
    let f = damping.friction;
    ball.pos += ball.vel;

    let (min, max) = table.center_bounds(ball.radius);

    if ball.pos.x < min.x {
        ball.pos.x = min.x;
        ball.vel.x = -ball.vel.x * f;
    } else if ball.pos.x > max.x {
        ball.pos.x = max.x;
        ball.vel.x = -ball.vel.x * f;
    }

    if ball.pos.y < min.y {
        ball.pos.y = min.y;
        ball.vel.y = -ball.vel.y * f;
    } else if ball.pos.y > max.y {
        ball.pos.y = max.y;
        ball.vel.y = -ball.vel.y * f;
    }

    ball.vel *= f;

    if ball.vel.x.abs() < damping.rest_speed && ball.vel.y.abs() < damping.rest_speed {
        ball.vel = glam::Vec2::ZERO;
    }
}

/// Advance every ball in the registry by one step.
pub fn step_balls(registry: &mut BallRegistry, table: &Table, damping: Damping) {
    for ball in registry.iter_mut() {
        step_ball(ball, table, damping);
    }
}
