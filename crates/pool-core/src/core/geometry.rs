//! Rotation into and out of a collision frame.

use glam::Vec2;

/// Angle of the line from one centre to another. A zero-length `delta`
/// (concentric discs) has no direction; the +x axis stands in for it.
pub fn collision_angle(delta: Vec2) -> f32 {
    if delta == Vec2::ZERO {
        0.0
    } else {
        delta.y.atan2(delta.x)
    }
}

/// Express `v` in a frame whose x axis points along `angle`:
/// x is the component along the line, y the perpendicular one.
pub fn into_frame(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}

/// Inverse of [`into_frame`].
pub fn out_of_frame(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn concentric_angle_is_zero() {
        assert_eq!(collision_angle(Vec2::ZERO), 0.0);
        assert!(collision_angle(Vec2::new(0.0, 3.0)) > 1.57);
    }

    #[test]
    fn frame_round_trip_at_odd_angle() {
        let v = Vec2::new(3.0, -7.5);
        let angle = 2.2;
        assert!(close(out_of_frame(into_frame(v, angle), angle), v));
    }

    #[test]
    fn along_line_component_lands_on_x() {
        let angle = collision_angle(Vec2::new(1.0, 1.0));
        let v = Vec2::new(2.0, 2.0);
        assert!(close(into_frame(v, angle), Vec2::new(8.0f32.sqrt(), 0.0)));
    }
}
