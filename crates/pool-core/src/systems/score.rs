use crate::api::types::Player;

/// Per-player session scores. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: [u32; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    pub fn credit(&mut self, player: Player, points: u32) {
        let slot = &mut self.points[player.index()];
        *slot = slot.saturating_add(points);
    }

    pub fn as_array(&self) -> [u32; 2] {
        self.points
    }

    pub fn reset(&mut self) {
        self.points = [0, 0];
    }
}
