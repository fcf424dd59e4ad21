use crate::api::types::{BallId, Player};
use crate::components::ball::{Ball, BallKind};

/// Every ball on the table, stored in a flat Vec.
/// Iteration order is spawn order; removal keeps the order of the rest,
/// so pairwise collision handling stays deterministic across a rack.
pub struct BallRegistry {
    balls: Vec<Ball>,
    next_id: u32,
}

impl BallRegistry {
    pub fn new() -> Self {
        Self {
            balls: Vec::with_capacity(17),
            next_id: 1,
        }
    }

    /// Generate the next unique ball ID.
    pub fn next_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a ball to the registry.
    pub fn spawn(&mut self, ball: Ball) -> BallId {
        let id = ball.id;
        self.balls.push(ball);
        id
    }

    /// Remove a ball by ID. Returns the removed ball if found.
    pub fn despawn(&mut self, id: BallId) -> Option<Ball> {
        let idx = self.balls.iter().position(|b| b.id == id)?;
        Some(self.balls.remove(idx))
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    /// Two distinct balls by index, mutably. `None` unless `i < j < len`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Ball, &mut Ball)> {
        if i >= j || j >= self.balls.len() {
            return None;
        }
        let (head, tail) = self.balls.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ball> {
        self.balls.iter_mut()
    }

    pub fn as_slice(&self) -> &[Ball] {
        &self.balls
    }

    /// The cue ball owned by `player`, if that player has one at this table.
    pub fn cue_ball(&self, player: Player) -> Option<&Ball> {
        self.balls
            .iter()
            .find(|b| b.kind == BallKind::Cue { owner: player })
    }

    pub fn cue_ball_mut(&mut self, player: Player) -> Option<&mut Ball> {
        self.balls
            .iter_mut()
            .find(|b| b.kind == BallKind::Cue { owner: player })
    }

    /// Object balls still on the table.
    pub fn numbered_count(&self) -> usize {
        self.balls.iter().filter(|b| !b.kind.is_cue()).count()
    }

    /// Rest state: every velocity is exactly zero.
    pub fn all_at_rest(&self) -> bool {
        self.balls.iter().all(Ball::is_at_rest)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Remove every ball and restart ID numbering.
    pub fn clear(&mut self) {
        self.balls.clear();
        self.next_id = 1;
    }
}

impl Default for BallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn numbered(reg: &mut BallRegistry, ordinal: u8) -> BallId {
        let id = reg.next_id();
        reg.spawn(Ball::new(id, BallKind::Numbered { ordinal }, 12.0))
    }

    #[test]
    fn spawn_and_get() {
        let mut reg = BallRegistry::new();
        let id = reg.next_id();
        reg.spawn(Ball::new(id, BallKind::Numbered { ordinal: 3 }, 12.0).with_pos(Vec2::new(10.0, 20.0)));
        let b = reg.get(id).unwrap();
        assert_eq!(b.pos, Vec2::new(10.0, 20.0));
        assert_eq!(b.kind.ordinal(), Some(3));
    }

    #[test]
    fn despawn_keeps_order_of_the_rest() {
        let mut reg = BallRegistry::new();
        let a = numbered(&mut reg, 1);
        let b = numbered(&mut reg, 2);
        let c = numbered(&mut reg, 3);
        assert!(reg.despawn(b).is_some());
        assert!(reg.despawn(b).is_none());
        let ids: Vec<BallId> = reg.iter().map(|ball| ball.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn cue_balls_found_by_owner() {
        let mut reg = BallRegistry::new();
        let id = reg.next_id();
        reg.spawn(Ball::new(id, BallKind::Cue { owner: Player::Two }, 12.0));
        numbered(&mut reg, 1);
        assert_eq!(reg.cue_ball(Player::Two).map(|b| b.id), Some(id));
        assert!(reg.cue_ball(Player::One).is_none());
        assert_eq!(reg.numbered_count(), 1);
    }

    #[test]
    fn pair_mut_rejects_bad_indices() {
        let mut reg = BallRegistry::new();
        numbered(&mut reg, 1);
        numbered(&mut reg, 2);
        assert!(reg.pair_mut(0, 1).is_some());
        assert!(reg.pair_mut(1, 1).is_none());
        assert!(reg.pair_mut(1, 0).is_none());
        assert!(reg.pair_mut(0, 2).is_none());
    }

    #[test]
    fn rest_state_requires_exact_zero() {
        let mut reg = BallRegistry::new();
        let id = numbered(&mut reg, 1);
        assert!(reg.all_at_rest());
        reg.get_mut(id).unwrap().vel = Vec2::new(1e-6, 0.0);
        assert!(!reg.all_at_rest());
    }

    #[test]
    fn clear_resets_ids() {
        let mut reg = BallRegistry::new();
        numbered(&mut reg, 1);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.next_id(), BallId(1));
    }
}
