use serde::{Deserialize, Serialize};

/// Which variant of the table is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two players, one cue ball each, turns pass on a dry shot.
    #[default]
    Versus,
    /// One player, one cue ball, scored by points per shot.
    Solo,
}

impl GameMode {
    /// Decode the mode carried by a restart event (0 = versus, 1 = solo).
    /// Anything else keeps `current`.
    pub fn from_code(code: f32, current: GameMode) -> GameMode {
        if code == 0.0 {
            GameMode::Versus
        } else if code == 1.0 {
            GameMode::Solo
        } else {
            current
        }
    }

    pub fn code(self) -> f32 {
        match self {
            GameMode::Versus => 0.0,
            GameMode::Solo => 1.0,
        }
    }
}

/// Table rules and dimensions. Every field has a default, so a partial
/// JSON document only overrides what it names.
///
/// Velocities are in table units per step; the core never scales them by
/// elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Table width in world units.
    pub table_width: f32,
    /// Table height in world units.
    pub table_height: f32,
    /// Distance from the table edge to the cushion line a ball edge may touch.
    pub cushion_inset: f32,
    /// Radius shared by every ball.
    pub ball_radius: f32,
    /// Pocket radius. A ball drops when its centre is closer than
    /// `pocket_radius - ball_radius` to the pocket centre.
    pub pocket_radius: f32,
    /// Distance of pocket centres from the table edges.
    pub pocket_inset: f32,
    /// Per-step velocity retention, also applied to cushion rebounds.
    pub friction: f32,
    /// Below this speed on both axes a ball is snapped to rest.
    pub rest_speed: f32,
    /// Cue ball speed at full power.
    pub max_power: f32,
    /// Pointer pull distance that reaches full power.
    pub power_span: f32,
    /// Points credited per numbered ball.
    pub score_per_ball: u32,
    /// Maximum random offset applied to each racked ball on each axis.
    pub rack_jitter: f32,
    /// Seed for the rack jitter.
    pub seed: u64,
    pub mode: GameMode,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            table_width: 700.0,
            table_height: 400.0,
            cushion_inset: 22.0,
            ball_radius: 12.0,
            pocket_radius: 25.0,
            pocket_inset: 25.0,
            friction: 0.98,
            rest_speed: 0.1,
            max_power: 15.0,
            power_span: 50.0,
            score_per_ball: 10,
            rack_jitter: 1.0,
            seed: 0x5EED_CAFE,
            mode: GameMode::Versus,
        }
    }
}

impl PoolConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Same table with the rack laid out exactly, no jitter.
    pub fn without_jitter(mut self) -> Self {
        self.rack_jitter = 0.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PoolConfig::from_json(r#"{ "friction": 0.95, "mode": "solo" }"#).unwrap();
        assert_eq!(config.friction, 0.95);
        assert_eq!(config.mode, GameMode::Solo);
        assert_eq!(config.ball_radius, 12.0);
        assert_eq!(config.score_per_ball, 10);
    }

    #[test]
    fn empty_json_is_default() {
        let config = PoolConfig::from_json("{}").unwrap();
        assert_eq!(config, PoolConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PoolConfig::from_json("{ \"friction\": \"fast\" }").is_err());
        assert!(PoolConfig::from_json("not json").is_err());
    }

    #[test]
    fn mode_codes() {
        assert_eq!(GameMode::from_code(0.0, GameMode::Solo), GameMode::Versus);
        assert_eq!(GameMode::from_code(1.0, GameMode::Versus), GameMode::Solo);
        assert_eq!(GameMode::from_code(-1.0, GameMode::Solo), GameMode::Solo);
        assert_eq!(GameMode::from_code(GameMode::Solo.code(), GameMode::Versus), GameMode::Solo);
    }
}
