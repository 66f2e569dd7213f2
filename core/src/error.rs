use crate::config::MAX_TERMS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Term count must be between 2 and {}, got {terms}", MAX_TERMS)]
    InvalidTermCount { terms: u32 },

    #[error(
        "Constraints too tight: {terms} terms of {digits} digit(s) need a first operand of at least {required}, \
         but the maximum is {max}. Try fewer terms, more digits, turning off exact digits, \
         or allowing negative running totals"
    )]
    InfeasibleInitialBound {
        terms:    u32,
        digits:   u32,
        required: i64,
        max:      i64,
    },

    #[error(
        "No operand fits at step {step} without going negative (running total {total}, range {lower}..={upper}). \
         Adjust the term count, digit count or exact-digit setting"
    )]
    InfeasibleStepBound {
        step:  usize,
        total: i64,
        lower: i64,
        upper: i64,
    },

    #[error("Cannot draw an operand for term {step}: the range is empty")]
    InfeasibleTerm { step: usize },

    #[error("Flash layout only supports addition/subtraction, not {kind}")]
    FlashRequiresAddSub { kind: String },

    #[error("Divisor bounds for {digits} digit(s) include zero")]
    DegenerateDivisor { digits: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
