use glam::Vec2;

use crate::components::ball::Ball;
use crate::components::table::Table;
use crate::core::geometry::{collision_angle, into_frame, out_of_frame};
use crate::core::registry::BallRegistry;

/// Resolve one pair if the discs overlap. Returns whether they did.
///
/// Equal masses, perfectly elastic: the velocity components along the line
/// of centres are swapped and the perpendicular components kept. The two
/// balls are then pushed apart by half the overlap each, and both centres
/// are clamped back onto the table.
///
/// Concentric balls have no line of centres; they are treated as if `b`
/// lay on the +x side of `a`.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, table: &Table) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_dist = a.radius + b.radius;
    if distance >= min_dist {
        return false;
    }

    let angle = collision_angle(delta);
    let va = into_frame(a.vel, angle);
    let vb = into_frame(b.vel, angle);
    a.vel = out_of_frame(Vec2::new(vb.x, va.y), angle);
    b.vel = out_of_frame(Vec2::new(va.x, vb.y), angle);

    let normal = if distance > 0.0 { delta / distance } else { Vec2::X };
    let push = normal * ((min_dist - distance) * 0.5);
    a.pos = table.clamp_center(a.pos - push, a.radius);
    b.pos = table.clamp_center(b.pos + push, b.radius);
    true
}

/// Resolve every overlapping pair once, in registry order (i < j).
/// Returns the number of contacts handled.
///
/// Three or more balls in mutual contact are resolved pair by pair, so the
/// result depends on registry order rather than being a simultaneous
/// solution.
pub fn resolve_collisions(registry: &mut BallRegistry, table: &Table) -> usize {
    let count = registry.len();
    let mut contacts = 0;
    for i in 0..count {
        for j in (i + 1)..count {
            if let Some((a, b)) = registry.pair_mut(i, j) {
                if resolve_pair(a, b, table) {
                    contacts += 1;
                }
            }
        }
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BallId;
    use crate::components::ball::BallKind;

    const R: f32 = 12.0;

    fn table() -> Table {
        Table::new(700.0, 400.0, 22.0)
    }

    fn ball(id: u32, pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(BallId(id), BallKind::Numbered { ordinal: id as u8 }, R)
            .with_pos(pos)
            .with_vel(vel)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn head_on_swaps_velocities() {
        let mut a = ball(1, Vec2::new(300.0, 200.0), Vec2::new(5.0, 0.0));
        let mut b = ball(2, Vec2::new(320.0, 200.0), Vec2::new(-5.0, 0.0));
        assert!(resolve_pair(&mut a, &mut b, &table()));
        assert_eq!(a.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(b.vel, Vec2::new(5.0, 0.0));
        assert!(a.pos.distance(b.pos) >= 2.0 * R - 1e-4, "still overlapping");
    }

    #[test]
    fn oblique_hit_swaps_normal_keeps_tangent() {
        let angle = 0.6f32;
        let dir = Vec2::new(angle.cos(), angle.sin());
        let mut a = ball(1, Vec2::new(300.0, 200.0), Vec2::new(4.0, 1.0));
        let mut b = ball(2, Vec2::new(300.0, 200.0) + dir * 20.0, Vec2::new(-2.0, 3.0));

        let (na, ta) = (a.vel.dot(dir), a.vel.perp_dot(dir));
        let (nb, tb) = (b.vel.dot(dir), b.vel.perp_dot(dir));
        let momentum = a.vel + b.vel;

        assert!(resolve_pair(&mut a, &mut b, &table()));

        assert!((a.vel.dot(dir) - nb).abs() < 1e-4);
        assert!((b.vel.dot(dir) - na).abs() < 1e-4);
        assert!((a.vel.perp_dot(dir) - ta).abs() < 1e-4);
        assert!((b.vel.perp_dot(dir) - tb).abs() < 1e-4);
        assert!(close(a.vel + b.vel, momentum), "momentum not conserved");
    }

    #[test]
    fn separated_balls_are_untouched() {
        let mut a = ball(1, Vec2::new(300.0, 200.0), Vec2::new(5.0, 0.0));
        let mut b = ball(2, Vec2::new(324.0, 200.0), Vec2::new(-5.0, 0.0));
        assert!(!resolve_pair(&mut a, &mut b, &table()), "touching is not overlapping");
        assert_eq!(a.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn concentric_balls_are_pushed_apart_along_x() {
        let mut a = ball(1, Vec2::new(300.0, 200.0), Vec2::new(1.0, 2.0));
        let mut b = ball(2, Vec2::new(300.0, 200.0), Vec2::ZERO);
        assert!(resolve_pair(&mut a, &mut b, &table()));
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.vel.is_finite() && b.vel.is_finite());
        assert_eq!(a.pos, Vec2::new(288.0, 200.0));
        assert_eq!(b.pos, Vec2::new(312.0, 200.0));
        assert_eq!(a.vel, Vec2::new(0.0, 2.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn separation_near_cushion_stays_on_table() {
        let t = table();
        let mut a = ball(1, Vec2::new(34.0, 200.0), Vec2::ZERO);
        let mut b = ball(2, Vec2::new(40.0, 200.0), Vec2::new(-3.0, 0.0));
        assert!(resolve_pair(&mut a, &mut b, &t));
        assert!(t.contains_center(a.pos, R));
        assert!(t.contains_center(b.pos, R));
    }

    #[test]
    fn registry_pass_counts_contacts_in_order() {
        let t = table();
        let mut reg = BallRegistry::new();
        reg.spawn(ball(1, Vec2::new(300.0, 200.0), Vec2::new(5.0, 0.0)));
        reg.spawn(ball(2, Vec2::new(320.0, 200.0), Vec2::ZERO));
        reg.spawn(ball(3, Vec2::new(500.0, 200.0), Vec2::ZERO));
        assert_eq!(resolve_collisions(&mut reg, &t), 1);
        assert_eq!(reg.get(BallId(1)).unwrap().vel, Vec2::ZERO);
        assert_eq!(reg.get(BallId(2)).unwrap().vel, Vec2::new(5.0, 0.0));
        assert_eq!(reg.get(BallId(3)).unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn three_way_contact_depends_on_order() {
        let t = table();
        let layout = [
            (Vec2::new(300.0, 200.0), Vec2::new(6.0, 0.0)),
            (Vec2::new(320.0, 200.0), Vec2::ZERO),
            (Vec2::new(340.0, 200.0), Vec2::ZERO),
        ];

        let mut forward = BallRegistry::new();
        for (i, (pos, vel)) in layout.iter().enumerate() {
            forward.spawn(ball(i as u32 + 1, *pos, *vel));
        }
        let mut backward = BallRegistry::new();
        for (i, (pos, vel)) in layout.iter().enumerate().rev() {
            backward.spawn(ball(i as u32 + 1, *pos, *vel));
        }

        resolve_collisions(&mut forward, &t);
        resolve_collisions(&mut backward, &t);

        let total = |reg: &BallRegistry| reg.iter().fold(Vec2::ZERO, |acc, b| acc + b.vel);
        assert!(close(total(&forward), Vec2::new(6.0, 0.0)));
        assert!(close(total(&backward), Vec2::new(6.0, 0.0)));

        // Same momentum, different split between the balls.
        let v3 = |reg: &BallRegistry| reg.get(BallId(3)).unwrap().vel;
        assert_ne!(v3(&forward), v3(&backward));
    }
}
