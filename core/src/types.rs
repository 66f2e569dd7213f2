//! Shared primitive types used across the generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family of problems a batch contains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    #[default]
    #[serde(rename = "addsub")]
    AddSub,
    Mul,
    Div,
}

impl ProblemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddSub => "addition/subtraction",
            Self::Mul    => "multiplication",
            Self::Div    => "division",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How problems are laid out for the reader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
    Flash,
}

impl Layout {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vertical   => "vertical (written)",
            Self::Horizontal => "horizontal (expression)",
            Self::Flash      => "flash",
        }
    }
}

/// Add/subtract sub-mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddSubMode {
    Add,
    Sub,
    #[default]
    Mixed,
}

/// Operator applied to an operand against the running total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
}

impl Op {
    pub fn apply(self, total: i64, n: i64) -> i64 {
        match self {
            Op::Add => total + n,
            Op::Sub => total - n,
        }
    }

    pub fn checked_apply(self, total: i64, n: i64) -> Option<i64> {
        match self {
            Op::Add => total.checked_add(n),
            Op::Sub => total.checked_sub(n),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }
}
