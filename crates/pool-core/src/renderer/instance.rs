use bytemuck::{Pod, Zeroable};

/// Per-ball render data written to the shared buffer for the JS renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    pub radius: f32,
    /// Printed number, 0 for cue balls.
    pub number: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Bit set of `FLAG_*`.
    pub flags: f32,
}

impl BallInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const FLAG_CUE: u32 = 1;
    pub const FLAG_STRIPED: u32 = 2;
    /// Cue ball of the player whose turn it is.
    pub const FLAG_ACTIVE: u32 = 4;
    /// Cue ball owned by the second player.
    pub const FLAG_PLAYER_TWO: u32 = 8;

    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags as u32) & flag != 0
    }
}

/// Aim overlay: the cue stick and power bar for the player at the table.
/// 8 floats, only meaningful while `visible` is 1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CueGuide {
    pub visible: f32,
    /// Cue ball centre.
    pub x: f32,
    pub y: f32,
    /// Unit direction the ball will travel.
    pub dir_x: f32,
    pub dir_y: f32,
    /// 0.0..=1.0 of full power.
    pub power: f32,
    /// 1.0 while the shot input is held.
    pub charging: f32,
    /// 1.0 or 2.0.
    pub player: f32,
}

impl CueGuide {
    pub const FLOATS: usize = 8;

    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Buffer of ball instances rebuilt every frame.
pub struct BallBuffer {
    instances: Vec<BallInstance>,
}

impl BallBuffer {
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BallInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[BallInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BallBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BallInstance>(), BallInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<CueGuide>(), CueGuide::FLOATS * 4);
    }

    #[test]
    fn flags_round_trip_through_float() {
        let inst = BallInstance {
            flags: (BallInstance::FLAG_CUE | BallInstance::FLAG_ACTIVE) as f32,
            ..Default::default()
        };
        assert!(inst.has_flag(BallInstance::FLAG_CUE));
        assert!(inst.has_flag(BallInstance::FLAG_ACTIVE));
        assert!(!inst.has_flag(BallInstance::FLAG_STRIPED));
    }

    #[test]
    fn buffer_push_and_clear() {
        let mut buf = BallBuffer::new();
        buf.push(BallInstance::default());
        buf.push(BallInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
