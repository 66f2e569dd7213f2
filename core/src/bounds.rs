//! Operand bounds for a digit count and digit/zero policy.

use serde::{Deserialize, Serialize};

pub const MIN_DIGITS: u32 = 1;
pub const MAX_DIGITS: u32 = 12;

/// Inclusive operand range. Derived, never stored on a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_val: i64,
    pub max_val: i64,
}

impl Bounds {
    pub fn contains(&self, n: i64) -> bool {
        (self.min_val..=self.max_val).contains(&n)
    }

    pub fn is_empty(&self) -> bool {
        self.min_val > self.max_val
    }
}

/// Compute the inclusive range of valid operands.
///
/// `digits` is clamped to 1..=12. With `exact_digits` the operand has
/// exactly that many digits, except that a single digit may be 0 when
/// `allow_zero` is set. Otherwise any value up to that many digits.
pub fn compute_bounds(digits: u32, exact_digits: bool, allow_zero: bool) -> Bounds {
    let d = digits.clamp(MIN_DIGITS, MAX_DIGITS);
    let max_val = 10i64.pow(d) - 1;

    let min_val = if exact_digits {
        if d == 1 && allow_zero {
            0
        } else {
            10i64.pow(d - 1)
        }
    } else if allow_zero {
        0
    } else {
        1
    };

    Bounds { min_val, max_val }
}
