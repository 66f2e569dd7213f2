//! Addition / subtraction sequences.
//!
//! Three sub-modes:
//!   - add:   every operand drawn from the base bounds.
//!   - sub:   a first operand, then subtractions. With negative
//!            avoidance each step is capped by the running total and,
//!            under exact digits, headroom is reserved for the steps
//!            still to come. Any empty range is a hard error.
//!   - mixed: each step rolls subtract vs add. A subtraction that
//!            cannot fit is replaced by an addition for that step only.

use crate::{
    bounds::{compute_bounds, Bounds},
    config::{AddSubOptions, MAX_TERMS},
    error::{GenError, GenResult},
    generator::ProblemGenerator,
    problem::{AddSubProblem, Problem},
    rng::SeededStream,
    types::{AddSubMode, Op, ProblemKind},
};

/// Share of the maximum used as a starting buffer in loose-digit mixed mode.
const MIXED_LOOSE_BUFFER: f64 = 0.05;
/// Share of the minimum used as a starting buffer in exact-digit mixed mode.
const MIXED_EXACT_BUFFER: f64 = 0.35;

pub struct AddSubGenerator {
    pub options: AddSubOptions,
}

impl AddSubGenerator {
    pub fn new(options: AddSubOptions) -> Self {
        Self { options }
    }
}

impl ProblemGenerator for AddSubGenerator {
    fn kind(&self) -> ProblemKind { ProblemKind::AddSub }

    fn generate(&self, stream: &mut SeededStream) -> GenResult<Problem> {
        generate_add_sub(stream, &self.options).map(Problem::AddSub)
    }
}

pub fn generate_add_sub(stream: &mut SeededStream, opts: &AddSubOptions) -> GenResult<AddSubProblem> {
    if !(2..=MAX_TERMS).contains(&opts.terms) {
        return Err(GenError::InvalidTermCount { terms: opts.terms });
    }
    let bounds = compute_bounds(opts.digits, opts.exact_digits, opts.allow_zero);

    let problem = match opts.mode {
        AddSubMode::Add   => generate_add(stream, opts, bounds)?,
        AddSubMode::Sub   => generate_sub(stream, opts, bounds)?,
        AddSubMode::Mixed => generate_mixed(stream, opts, bounds)?,
    };

    log::debug!(
        "addsub {:?}: nums={:?} answer={}",
        opts.mode,
        problem.nums(),
        problem.answer()
    );
    Ok(problem)
}

fn draw(stream: &mut SeededStream, lo: i64, hi: i64, step: usize) -> GenResult<i64> {
    stream.try_draw_int(lo, hi).ok_or(GenError::InfeasibleTerm { step })
}

fn generate_add(
    stream: &mut SeededStream,
    opts: &AddSubOptions,
    bounds: Bounds,
) -> GenResult<AddSubProblem> {
    let terms = opts.terms as usize;
    let mut nums = Vec::with_capacity(terms);
    for step in 0..terms {
        nums.push(draw(stream, bounds.min_val, bounds.max_val, step)?);
    }
    Ok(AddSubProblem::new(nums, vec![Op::Add; terms - 1]))
}

fn generate_sub(
    stream: &mut SeededStream,
    opts: &AddSubOptions,
    bounds: Bounds,
) -> GenResult<AddSubProblem> {
    let Bounds { min_val, max_val } = bounds;
    let terms = opts.terms as usize;
    let reserve = opts.forbid_negative && opts.exact_digits;

    // Every later subtraction takes at least min_val, so the first
    // operand must cover all of them.
    let mut lower = min_val;
    if reserve {
        lower = lower.max((terms as i64 - 1).saturating_mul(min_val));
    }
    if lower > max_val {
        return Err(GenError::InfeasibleInitialBound {
            terms:    opts.terms,
            digits:   opts.digits,
            required: lower,
            max:      max_val,
        });
    }

    let first = draw(stream, lower, max_val, 0)?;
    let mut nums = Vec::with_capacity(terms);
    nums.push(first);
    let mut total = first;

    for step in 1..terms {
        if !opts.forbid_negative {
            let n = draw(stream, min_val, max_val, step)?;
            nums.push(n);
            total -= n;
            continue;
        }

        let mut hi = max_val.min(total);
        if reserve {
            let still_to_come = (terms - step - 1) as i64;
            hi = hi.min(total - still_to_come.saturating_mul(min_val));
        }
        let n = stream
            .try_draw_int(min_val, hi)
            .ok_or(GenError::InfeasibleStepBound {
                step,
                total,
                lower: min_val,
                upper: hi,
            })?;
        nums.push(n);
        total -= n;
    }

    Ok(AddSubProblem::new(nums, vec![Op::Sub; terms - 1]))
}

fn generate_mixed(
    stream: &mut SeededStream,
    opts: &AddSubOptions,
    bounds: Bounds,
) -> GenResult<AddSubProblem> {
    let Bounds { min_val, max_val } = bounds;
    let terms = opts.terms as usize;
    let sub_p = opts.subtract_ratio.clamp(0.0, 100.0) / 100.0;

    let first_lo = if opts.forbid_negative {
        mixed_first_lower(opts, bounds, sub_p)
    } else {
        min_val
    };

    let first = draw(stream, first_lo, max_val, 0)?;
    let mut nums = Vec::with_capacity(terms);
    let mut ops = Vec::with_capacity(terms - 1);
    nums.push(first);
    let mut total = first;

    for step in 1..terms {
        let mut op = if stream.chance(sub_p) { Op::Sub } else { Op::Add };
        if opts.forbid_negative && op == Op::Sub && total < min_val {
            op = Op::Add;
        }

        if op == Op::Sub {
            // No forward reservation here: a later step can always add.
            let hi = max_val.min(total);
            if let Some(n) = stream.try_draw_int(min_val, hi) {
                ops.push(Op::Sub);
                nums.push(n);
                total -= n;
                continue;
            }
            log::warn!("addsub mixed: step {step} cannot subtract from {total}, adding instead");
        }

        let n = draw(stream, min_val, max_val, step)?;
        ops.push(Op::Add);
        nums.push(n);
        total += n;
    }

    Ok(AddSubProblem::new(nums, ops))
}

/// Raise the first operand's floor so later subtractions are less
/// likely to fall back to additions. Scales with the number of steps
/// and the subtract share. Correctness never depends on it.
fn mixed_first_lower(opts: &AddSubOptions, bounds: Bounds, sub_p: f64) -> i64 {
    let Bounds { min_val, max_val } = bounds;
    let floor = if opts.exact_digits { min_val } else { min_val.max(1) };
    let per_step = if opts.exact_digits {
        min_val as f64 * MIXED_EXACT_BUFFER
    } else {
        max_val as f64 * MIXED_LOOSE_BUFFER
    };
    let buffer = ((opts.terms as f64 - 1.0) * sub_p * per_step).floor() as i64;
    max_val.min(floor.max(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(mode: AddSubMode) -> AddSubOptions {
        AddSubOptions {
            mode,
            digits: 2,
            terms: 4,
            forbid_negative: true,
            exact_digits: true,
            allow_zero: false,
            subtract_ratio: 50.0,
        }
    }

    #[test]
    fn single_term_is_rejected_before_drawing() {
        let mut stream = SeededStream::from_seed_text("terms");
        let before = stream.clone();
        let err = generate_add_sub(&mut stream, &AddSubOptions { terms: 1, ..opts(AddSubMode::Add) })
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidTermCount { terms: 1 }));
        assert_eq!(stream, before, "no draws before the precondition check");
    }

    #[test]
    fn oversized_term_count_is_rejected_before_drawing() {
        for mode in [AddSubMode::Add, AddSubMode::Sub, AddSubMode::Mixed] {
            let mut stream = SeededStream::from_seed_text("terms");
            let before = stream.clone();
            let o = AddSubOptions { terms: u32::MAX, digits: 12, ..opts(mode) };
            let err = generate_add_sub(&mut stream, &o).unwrap_err();
            assert!(matches!(err, GenError::InvalidTermCount { terms: u32::MAX }), "{mode:?}");
            assert_eq!(stream, before);
        }

        let mut stream = SeededStream::from_seed_text("terms");
        let o = AddSubOptions { terms: MAX_TERMS, digits: 12, exact_digits: false, ..opts(AddSubMode::Add) };
        let p = generate_add_sub(&mut stream, &o).unwrap();
        assert_eq!(p.nums().len(), MAX_TERMS as usize);
    }

    #[test]
    fn infeasible_sub_fails_before_drawing() {
        let mut stream = SeededStream::from_seed_text("tight");
        let before = stream.clone();
        let o = AddSubOptions { digits: 1, terms: 11, ..opts(AddSubMode::Sub) };
        let err = generate_add_sub(&mut stream, &o).unwrap_err();
        assert!(matches!(
            err,
            GenError::InfeasibleInitialBound { terms: 11, digits: 1, required: 10, max: 9 }
        ));
        assert_eq!(stream, before);
    }

    #[test]
    fn mixed_buffer_scales_with_terms_and_ratio() {
        let base = opts(AddSubMode::Mixed);
        let bounds = compute_bounds(2, true, false);
        // 3 steps * 0.5 * (10 * 0.35) = 5.25 -> 5, below min_val 10
        assert_eq!(mixed_first_lower(&base, bounds, 0.5), 10);

        let loose = AddSubOptions { exact_digits: false, terms: 10, ..base };
        let bounds = compute_bounds(2, false, false);
        // 9 * 1.0 * (99 * 0.05) = 44.55 -> 44
        assert_eq!(mixed_first_lower(&loose, bounds, 1.0), 44);

        let huge = AddSubOptions { exact_digits: false, terms: 1_000, ..base };
        assert_eq!(mixed_first_lower(&huge, bounds, 1.0), 99, "capped at max_val");
    }

    #[test]
    fn mixed_with_zero_ratio_only_adds() {
        let mut stream = SeededStream::from_seed_text("all-add");
        let o = AddSubOptions { subtract_ratio: 0.0, terms: 8, ..opts(AddSubMode::Mixed) };
        for _ in 0..50 {
            let p = generate_add_sub(&mut stream, &o).unwrap();
            assert!(p.ops().iter().all(|op| *op == Op::Add));
        }
    }

    #[test]
    fn sub_without_negative_avoidance_may_go_below_zero() {
        let mut stream = SeededStream::from_seed_text("negative");
        let o = AddSubOptions { forbid_negative: false, terms: 6, ..opts(AddSubMode::Sub) };
        let went_negative = (0..50)
            .map(|_| generate_add_sub(&mut stream, &o).unwrap())
            .any(|p| p.answer() < 0);
        assert!(went_negative);
    }
}
