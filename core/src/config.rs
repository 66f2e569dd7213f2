use crate::types::{AddSubMode, Layout, ProblemKind};
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FLASH_SPEED_MS: u64 = 800;
/// Upper limit on add/subtract operands per problem.
pub const MAX_TERMS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSubOptions {
    pub mode: AddSubMode,
    pub digits: u32,
    /// Number of operands, first one included. 2..=MAX_TERMS.
    pub terms: u32,
    /// Keep every running total at or above zero.
    pub forbid_negative: bool,
    pub exact_digits: bool,
    pub allow_zero: bool,
    /// Percentage 0..=100 of steps that subtract. Mixed mode only.
    pub subtract_ratio: f64,
}

impl Default for AddSubOptions {
    fn default() -> Self {
        Self {
            mode: AddSubMode::Mixed,
            digits: 2,
            terms: 5,
            forbid_negative: true,
            exact_digits: true,
            allow_zero: false,
            subtract_ratio: 40.0,
        }
    }
}

/// Digit policy for one multiplication operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperandSpec {
    pub digits: u32,
    pub exact_digits: bool,
    pub allow_zero: bool,
}

impl OperandSpec {
    pub fn new(digits: u32) -> Self {
        Self { digits, ..Self::default() }
    }
}

impl Default for OperandSpec {
    fn default() -> Self {
        Self {
            digits: 1,
            exact_digits: true,
            allow_zero: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MulOptions {
    pub a: OperandSpec,
    pub b: OperandSpec,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self {
            a: OperandSpec::new(2),
            b: OperandSpec::new(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivOptions {
    pub divisor_digits: u32,
    pub quotient_digits: u32,
    /// Divide evenly (remainder always 0).
    pub exact: bool,
    /// Applies to the quotient only; the divisor is never zero.
    pub allow_zero: bool,
}

impl Default for DivOptions {
    fn default() -> Self {
        Self {
            divisor_digits: 1,
            quotient_digits: 2,
            exact: true,
            allow_zero: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashOptions {
    /// Display time per operand, blank gap included.
    pub speed_ms: u64,
}

impl Default for FlashOptions {
    fn default() -> Self {
        Self { speed_ms: DEFAULT_FLASH_SPEED_MS }
    }
}

/// Everything needed to generate and present one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub kind: ProblemKind,
    pub count: u32,
    pub layout: Layout,
    pub show_answers: bool,
    /// Blank or missing means a fresh, non-reproducible seed.
    pub seed: Option<String>,
    pub addsub: AddSubOptions,
    pub mul: MulOptions,
    pub div: DivOptions,
    pub flash: FlashOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            kind: ProblemKind::AddSub,
            count: 10,
            layout: Layout::Vertical,
            show_answers: false,
            seed: None,
            addsub: AddSubOptions::default(),
            mul: MulOptions::default(),
            div: DivOptions::default(),
            flash: FlashOptions::default(),
        }
    }
}

impl BatchConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    /// In tests, use BatchConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {path}"))?;
        Self::from_json(&content).with_context(|| format!("Invalid batch config in {path}"))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: BatchConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Small fixed-seed config for tests.
    pub fn default_test() -> Self {
        Self {
            count: 20,
            seed: Some("test".into()),
            ..Self::default()
        }
    }

    /// Problem count with 0 treated as 1.
    pub fn effective_count(&self) -> usize {
        self.count.max(1) as usize
    }
}
