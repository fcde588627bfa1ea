// Seeded pseudo-random streams.
//
// Every node gets its own generator keyed by a string, so a layout run explores
// the same candidate positions in the same order every time. There is no shared
// generator anywhere in the crate.

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
/// 2^32, the LCG modulus. Dividing by it keeps outputs strictly below 1.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Linear-congruential generator seeded from a string hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        Self { state: hash_seed(seed) }
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / LCG_MODULUS
    }

    /// Uniform draw in `[min, min + span)`.
    pub fn range(&mut self, min: f64, span: f64) -> f64 {
        min + self.next_f64() * span
    }
}

/// Closure form of [`SeededRng`]: each call yields the next value in `[0, 1)`.
pub fn make_rng(seed: &str) -> impl FnMut() -> f64 + use<> {
    let mut rng = SeededRng::new(seed);
    move || rng.next_f64()
}

/// `hash * 31 + c` over UTF-16 code units, wrapping in 32 bits.
fn hash_seed(seed: &str) -> u32 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash as u32
}
