//! Seeded xorshift generator for shape selection.
//!
//! Same seed, same sequence of shapes. Tests and benches depend on that.

/// Marsaglia xorshift32 (13, 17, 5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

/// Substituted for seed 0, which xorshift can never leave.
const ZERO_SEED_STATE: u32 = 0x9E37_79B9;

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in `[0, max)`; `max == 0` yields 0.
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Multiply-shift maps the full 32-bit range onto `max` buckets.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
