//! Problem records handed to renderers.
//!
//! Records are immutable once produced. Every constructor computes
//! the answer itself, so a record's answer can never disagree with
//! its operands.

use crate::types::{Op, ProblemKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAddSub")]
pub struct AddSubProblem {
    nums:   Vec<i64>,
    ops:    Vec<Op>,
    answer: i64,
}

impl AddSubProblem {
    /// `ops[i]` applies to `nums[i + 1]`, so `ops.len() + 1 == nums.len()`.
    pub(crate) fn new(nums: Vec<i64>, ops: Vec<Op>) -> Self {
        debug_assert_eq!(ops.len() + 1, nums.len());
        let answer = running_totals(&nums, &ops).last().copied().unwrap_or_default();
        Self { nums, ops, answer }
    }

    pub fn nums(&self) -> &[i64] { &self.nums }
    pub fn ops(&self) -> &[Op] { &self.ops }
    pub fn answer(&self) -> i64 { self.answer }

    /// Running total after each operand, first operand included.
    pub fn running_totals(&self) -> Vec<i64> {
        running_totals(&self.nums, &self.ops)
    }
}

/// Loaded form of an `AddSubProblem`. Checked before it becomes one.
#[derive(Deserialize)]
struct RawAddSub {
    nums:   Vec<i64>,
    ops:    Vec<Op>,
    answer: i64,
}

impl TryFrom<RawAddSub> for AddSubProblem {
    type Error = String;

    fn try_from(raw: RawAddSub) -> Result<Self, Self::Error> {
        let RawAddSub { nums, ops, answer } = raw;
        if nums.len() < 2 || ops.len() + 1 != nums.len() {
            return Err(format!(
                "need at least 2 operands and one operator per later operand, got {} operand(s) and {} operator(s)",
                nums.len(),
                ops.len()
            ));
        }
        let mut total = nums[0];
        for (op, &n) in ops.iter().zip(&nums[1..]) {
            total = op
                .checked_apply(total, n)
                .ok_or_else(|| "running total overflows".to_string())?;
        }
        if total != answer {
            return Err(format!("answer {answer} does not match the operands (expected {total})"));
        }
        Ok(Self { nums, ops, answer })
    }
}

fn running_totals(nums: &[i64], ops: &[Op]) -> Vec<i64> {
    let Some((&first, rest)) = nums.split_first() else {
        return Vec::new();
    };
    let mut totals = Vec::with_capacity(nums.len());
    totals.push(first);
    let mut total = first;
    for (op, &n) in ops.iter().zip(rest) {
        total = op.apply(total, n);
        totals.push(total);
    }
    totals
}

/// Operands go up to 12 digits each, so the product is held in 128 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulProblem {
    pub a:      i64,
    pub b:      i64,
    pub answer: i128,
}

impl MulProblem {
    pub(crate) fn new(a: i64, b: i64) -> Self {
        Self { a, b, answer: i128::from(a) * i128::from(b) }
    }
}

/// Invariant: `dividend == divisor * quotient + remainder`,
/// `divisor >= 1` and `0 <= remainder < divisor`.
/// The dividend is 128-bit for the same reason as `MulProblem::answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivProblem {
    pub dividend:  i128,
    pub divisor:   i64,
    pub quotient:  i64,
    pub remainder: i64,
}

impl DivProblem {
    pub(crate) fn new(divisor: i64, quotient: i64, remainder: i64) -> Self {
        debug_assert!(divisor >= 1 && (0..divisor).contains(&remainder));
        Self {
            dividend: i128::from(divisor) * i128::from(quotient) + i128::from(remainder),
            divisor,
            quotient,
            remainder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    #[serde(rename = "addsub")]
    AddSub(AddSubProblem),
    Mul(MulProblem),
    Div(DivProblem),
}

impl Problem {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Problem::AddSub(_) => ProblemKind::AddSub,
            Problem::Mul(_)    => ProblemKind::Mul,
            Problem::Div(_)    => ProblemKind::Div,
        }
    }

    pub fn as_add_sub(&self) -> Option<&AddSubProblem> {
        match self {
            Problem::AddSub(p) => Some(p),
            _ => None,
        }
    }
}
