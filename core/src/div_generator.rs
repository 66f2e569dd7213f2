//! Division: exact-digit divisor and quotient, optional remainder.

use crate::{
    bounds::compute_bounds,
    config::DivOptions,
    error::{GenError, GenResult},
    generator::ProblemGenerator,
    problem::{DivProblem, Problem},
    rng::SeededStream,
    types::ProblemKind,
};

pub struct DivGenerator {
    pub options: DivOptions,
}

impl DivGenerator {
    pub fn new(options: DivOptions) -> Self {
        Self { options }
    }
}

impl ProblemGenerator for DivGenerator {
    fn kind(&self) -> ProblemKind { ProblemKind::Div }

    fn generate(&self, stream: &mut SeededStream) -> GenResult<Problem> {
        generate_div(stream, &self.options).map(Problem::Div)
    }
}

/// Draw order: divisor, quotient, then the remainder when inexact.
pub fn generate_div(stream: &mut SeededStream, opts: &DivOptions) -> GenResult<DivProblem> {
    let d = compute_bounds(opts.divisor_digits, true, false);
    if d.min_val < 1 {
        log::error!("div: divisor bounds {d:?} include zero");
        return Err(GenError::DegenerateDivisor { digits: opts.divisor_digits });
    }
    let q = compute_bounds(opts.quotient_digits, true, opts.allow_zero);

    let divisor = stream.draw_int(d.min_val, d.max_val);
    let quotient = stream.draw_int(q.min_val, q.max_val);

    let remainder = if opts.exact {
        0
    } else {
        // Drawn even when divisor == 1 so the stream advances the same way.
        stream.draw_int(0, divisor - 1)
    };

    let problem = DivProblem::new(divisor, quotient, remainder);
    log::debug!(
        "div: {} / {divisor} = {quotient} r {remainder}",
        problem.dividend
    );
    Ok(problem)
}
