/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of simulation steps, so
/// ball speed does not depend on the display refresh rate.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Catch-up limit per frame (a backgrounded tab must not replay minutes).
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self::with_max_steps(dt, 10)
    }

    pub fn with_max_steps(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Negative or non-finite frame times count as no time at all.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        let available = (self.accumulator / self.dt) as u32;
        if available > self.max_steps {
            self.accumulator = 0.0;
            return self.max_steps;
        }
        self.accumulator -= available as f32 * self.dt;
        available
    }

    /// Fraction of a step left over (0.0 to 1.0), for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Drop any partial step, e.g. after a restart.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
