//! Seedable pseudo-random number generator (xorshift64) for rack jitter.
//! Deterministic per seed, so a seeded table racks the same way every time.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in [-amount, amount).
    pub fn jitter(&mut self, amount: f32) -> f32 {
        (self.next_f32() - 0.5) * 2.0 * amount
    }
}
