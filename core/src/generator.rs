//! Generator trait.
//!
//! RULE: Every problem family implements ProblemGenerator.
//! The batch runner calls generate() once per problem, in order,
//! against one shared stream. Draw order inside generate() is part
//! of the seed contract and must never change.

use crate::{error::GenResult, problem::Problem, rng::SeededStream, types::ProblemKind};

pub trait ProblemGenerator {
    fn kind(&self) -> ProblemKind;

    /// Produce one problem, or fail without emitting anything.
    /// A failure aborts the whole batch.
    fn generate(&self, stream: &mut SeededStream) -> GenResult<Problem>;
}
