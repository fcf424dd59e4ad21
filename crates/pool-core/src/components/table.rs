use glam::Vec2;

use crate::api::config::{GameMode, PoolConfig};
use crate::api::types::Player;

/// A fixed circular capture zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub center: Vec2,
    pub radius: f32,
}

impl Pocket {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True when a ball of `ball_radius` centred at `pos` has dropped.
    pub fn captures(&self, pos: Vec2, ball_radius: f32) -> bool {
        pos.distance(self.center) < self.radius - ball_radius
    }
}

/// The playing surface: a rectangle whose cushions sit `cushion_inset`
/// inside the outer edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub cushion_inset: f32,
    cue_spawns: [Vec2; 2],
}

impl Table {
    pub fn new(width: f32, height: f32, cushion_inset: f32) -> Self {
        let spot = Vec2::new(width / 4.0, height / 2.0);
        Self {
            width,
            height,
            cushion_inset,
            cue_spawns: [spot, spot],
        }
    }

    /// Table sized from `config`, with cue spawn points for its mode.
    /// Solo uses the head spot; versus splits the two cue balls either
    /// side of it so they never start in contact.
    pub fn from_config(config: &PoolConfig) -> Self {
        let table = Self::new(config.table_width, config.table_height, config.cushion_inset);
        let spot = Vec2::new(config.table_width / 4.0, config.table_height / 2.0);
        let spread = Vec2::new(0.0, config.ball_radius * 4.0);
        let cue_spawns = match config.mode {
            GameMode::Solo => [spot, spot],
            GameMode::Versus => [spot - spread, spot + spread],
        };
        Self { cue_spawns, ..table }
    }

    /// Inclusive corners of the legal rectangle for centres of balls of `radius`.
    pub fn center_bounds(&self, radius: f32) -> (Vec2, Vec2) {
        let edge = self.cushion_inset + radius;
        (
            Vec2::new(edge, edge),
            Vec2::new(self.width - edge, self.height - edge),
        )
    }

    pub fn contains_center(&self, pos: Vec2, radius: f32) -> bool {
        let (min, max) = self.center_bounds(radius);
        pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
    }

    /// Nearest legal centre to `pos`.
    pub fn clamp_center(&self, pos: Vec2, radius: f32) -> Vec2 {
        let (min, max) = self.center_bounds(radius);
        pos.clamp(min, max)
    }

    /// Where `player`'s cue ball is placed at rack time and after a foul.
    pub fn cue_spawn(&self, player: Player) -> Vec2 {
        self.cue_spawns[player.index()]
    }

    /// Apex of the object-ball rack, three quarters down the table.
    pub fn rack_apex(&self) -> Vec2 {
        Vec2::new(self.width * 0.75, self.height / 2.0)
    }

    /// Six pockets: four corners, then the two mid-rails.
    pub fn pockets(&self, pocket_radius: f32, inset: f32) -> [Pocket; 6] {
        let (w, h) = (self.width, self.height);
        [
            Pocket::new(Vec2::new(inset, inset), pocket_radius),
            Pocket::new(Vec2::new(w - inset, inset), pocket_radius),
            Pocket::new(Vec2::new(inset, h - inset), pocket_radius),
            Pocket::new(Vec2::new(w - inset, h - inset), pocket_radius),
            Pocket::new(Vec2::new(w / 2.0, inset), pocket_radius),
            Pocket::new(Vec2::new(w / 2.0, h - inset), pocket_radius),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_rectangle_is_inset_by_cushion_and_radius() {
        let table = Table::new(700.0, 400.0, 22.0);
        let (min, max) = table.center_bounds(12.0);
        assert_eq!(min, Vec2::new(34.0, 34.0));
        assert_eq!(max, Vec2::new(666.0, 366.0));
        assert_eq!(table.clamp_center(Vec2::new(-5.0, 500.0), 12.0), Vec2::new(34.0, 366.0));
        assert!(table.contains_center(Vec2::new(34.0, 366.0), 12.0));
        assert!(!table.contains_center(Vec2::new(33.9, 200.0), 12.0));
    }

    #[test]
    fn every_pocket_is_reachable_from_the_legal_rectangle() {
        let config = PoolConfig::default();
        let table = Table::from_config(&config);
        for pocket in table.pockets(config.pocket_radius, config.pocket_inset) {
            let nearest = table.clamp_center(pocket.center, config.ball_radius);
            assert!(
                pocket.captures(nearest, config.ball_radius),
                "pocket at {:?} cannot capture a ball at {:?}",
                pocket.center,
                nearest
            );
        }
    }

    #[test]
    fn versus_cue_spawns_do_not_touch() {
        let config = PoolConfig::default();
        let table = Table::from_config(&config);
        let gap = table.cue_spawn(Player::One).distance(table.cue_spawn(Player::Two));
        assert!(gap > config.ball_radius * 2.0);

        let solo = Table::from_config(&config.clone().with_mode(GameMode::Solo));
        assert_eq!(solo.cue_spawn(Player::One), Vec2::new(175.0, 200.0));
    }
}
