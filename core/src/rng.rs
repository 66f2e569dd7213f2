//! Deterministic random number generation.
//!
//! RULE: No generator may call a platform RNG.
//! All randomness flows through a single SeededStream created
//! from the batch's seed text. The same seed text produces the
//! same stream on every platform, so a printed seed reproduces
//! the whole batch.
//!
//! Construction is two-stage:
//!   - the seed text is folded into one u32 by a multiply-xor-rotate
//!     string hash over its UTF-16 code units;
//!   - that u32 seeds a 32-bit counter-and-mix generator.
//!
//! Every step is wrapping u32 arithmetic. Changing any constant
//! below changes every recorded seed's output.

use rand::Rng;

const HASH_INIT: u32 = 1_779_033_703;
const HASH_MUL: u32 = 3_432_918_353;
const FINAL_MUL_A: u32 = 2_246_822_507;
const FINAL_MUL_B: u32 = 3_266_489_909;
const STREAM_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fold seed text into a single u32.
///
/// Order-dependent: every code unit and its position affects the
/// result. Length is mixed in first, so "" and "\0" differ.
pub fn hash_seed_text(text: &str) -> u32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut h = HASH_INIT ^ units.len() as u32;
    for unit in units {
        h = (h ^ unit as u32).wrapping_mul(HASH_MUL);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(FINAL_MUL_A);
    h = (h ^ (h >> 13)).wrapping_mul(FINAL_MUL_B);
    h ^ (h >> 16)
}

/// The random stream shared by every problem in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Seed directly from a 32-bit value.
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from text. Identical text gives an identical stream.
    pub fn from_seed_text(text: &str) -> Self {
        Self::from_seed(hash_seed_text(text))
    }

    /// Draw a raw u32 (full range).
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STREAM_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Uniform integer in [min, max_inclusive].
    /// Callers must check `max_inclusive >= min` first.
    pub fn draw_int(&mut self, min: i64, max_inclusive: i64) -> i64 {
        debug_assert!(
            max_inclusive >= min,
            "draw_int called with empty range {min}..={max_inclusive}"
        );
        let span = (max_inclusive - min + 1) as f64;
        min + (self.next_f64() * span).floor() as i64
    }

    /// Like `draw_int`, but an empty range yields None and consumes nothing.
    pub fn try_draw_int(&mut self, lo: i64, hi: i64) -> Option<i64> {
        if hi < lo {
            return None;
        }
        Some(self.draw_int(lo, hi))
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// A stream plus the seed text it was built from.
#[derive(Debug, Clone)]
pub struct ResolvedStream {
    pub stream:    SeededStream,
    pub seed_text: String,
    /// False when the seed was synthesized because none was given.
    pub supplied:  bool,
}

/// Create a stream from optional seed text.
///
/// Blank or missing text is replaced by a synthesized seed built from
/// the current time and a thread-local random value. The synthesized
/// text is returned so the run can be reproduced later.
pub fn create_stream(seed_text: Option<&str>) -> ResolvedStream {
    let trimmed = seed_text.map(str::trim).filter(|s| !s.is_empty());
    let (seed_text, supplied) = match trimmed {
        Some(text) => (text.to_string(), true),
        None => (synthesize_seed_text(), false),
    };
    log::debug!("seed resolved: {seed_text:?} (supplied={supplied})");
    ResolvedStream {
        stream: SeededStream::from_seed_text(&seed_text),
        seed_text,
        supplied,
    }
}

fn synthesize_seed_text() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let entropy: f64 = rand::thread_rng().gen();
    format!("{millis}:{entropy}")
}
