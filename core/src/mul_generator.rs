//! Multiplication: one operand per slot, each with its own bounds.

use crate::{
    bounds::compute_bounds,
    config::{MulOptions, OperandSpec},
    error::GenResult,
    generator::ProblemGenerator,
    problem::{MulProblem, Problem},
    rng::SeededStream,
    types::ProblemKind,
};

pub struct MulGenerator {
    pub options: MulOptions,
}

impl MulGenerator {
    pub fn new(options: MulOptions) -> Self {
        Self { options }
    }
}

impl ProblemGenerator for MulGenerator {
    fn kind(&self) -> ProblemKind { ProblemKind::Mul }

    fn generate(&self, stream: &mut SeededStream) -> GenResult<Problem> {
        Ok(Problem::Mul(generate_mul(stream, &self.options)))
    }
}

/// Never fails: bounds are non-empty for every digit count.
/// Draw order is `a` then `b`.
pub fn generate_mul(stream: &mut SeededStream, opts: &MulOptions) -> MulProblem {
    let a = draw_operand(stream, &opts.a);
    let b = draw_operand(stream, &opts.b);
    let problem = MulProblem::new(a, b);
    log::debug!("mul: {a} x {b} = {}", problem.answer);
    problem
}

fn draw_operand(stream: &mut SeededStream, spec: &OperandSpec) -> i64 {
    let bounds = compute_bounds(spec.digits, spec.exact_digits, spec.allow_zero);
    stream.draw_int(bounds.min_val, bounds.max_val)
}
