//! The batch runner.
//!
//! RULES:
//!   - One stream per batch, created from the resolved seed.
//!   - Problems are generated strictly in order against that stream,
//!     so problem i+1 only ever sees draws after problem i.
//!   - The first error aborts the batch. No partial batch is returned.
//!   - Configuration errors that can be checked up front are checked
//!     before anything is drawn.

use crate::{
    addsub_generator::AddSubGenerator,
    config::BatchConfig,
    div_generator::DivGenerator,
    error::{GenError, GenResult},
    format::format_problem,
    generator::ProblemGenerator,
    mul_generator::MulGenerator,
    problem::Problem,
    rng::{create_stream, SeededStream},
    types::{Layout, ProblemKind},
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Summary handed to renderers alongside the problems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMeta {
    pub batch_id:      Uuid,
    pub kind:          ProblemKind,
    pub count:         usize,
    pub layout:        Layout,
    pub show_answers:  bool,
    /// Always present. Feed it back as the seed to reproduce the batch.
    pub seed_text:     String,
    pub seed_supplied: bool,
    pub generated_at:  DateTime<Local>,
}

impl fmt::Display for BatchMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answers = if self.show_answers { "shown" } else { "hidden" };
        write!(
            f,
            "Kind: {} / Count: {} / Layout: {} / Answers: {answers} / ",
            self.kind,
            self.count,
            self.layout.label(),
        )?;
        if self.seed_supplied {
            write!(f, "Seed: {}", self.seed_text)?;
        } else {
            write!(f, "Seed: auto ({})", self.seed_text)?;
        }
        write!(f, " / Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub meta:     BatchMeta,
    pub problems: Vec<Problem>,
}

impl Batch {
    /// Numbered text blocks separated by blank lines.
    pub fn render_text(&self) -> String {
        self.problems
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let body = format_problem(p, self.meta.layout, self.meta.show_answers);
                format!("Problem {}\n{body}", i + 1)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct BatchEngine {
    config:        BatchConfig,
    stream:        SeededStream,
    seed_text:     String,
    seed_supplied: bool,
    generator:     Box<dyn ProblemGenerator>,
}

impl BatchEngine {
    /// Validate the config, resolve the seed and pick the generator.
    pub fn build(config: BatchConfig) -> GenResult<Self> {
        if config.layout == Layout::Flash && config.kind != ProblemKind::AddSub {
            return Err(GenError::FlashRequiresAddSub { kind: config.kind.to_string() });
        }

        let resolved = create_stream(config.seed.as_deref());
        let generator = generator_for(&config);
        debug_assert_eq!(generator.kind(), config.kind);

        Ok(Self {
            config,
            stream: resolved.stream,
            seed_text: resolved.seed_text,
            seed_supplied: resolved.supplied,
            generator,
        })
    }

    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    /// Generate the whole batch, consuming the engine and its stream.
    pub fn run(mut self) -> GenResult<Batch> {
        let count = self.config.effective_count();
        let generated_at = Local::now();

        let mut problems = Vec::with_capacity(count);
        for i in 0..count {
            let problem = self.generator.generate(&mut self.stream).map_err(|e| {
                log::warn!("batch aborted at problem {}: {e}", i + 1);
                e
            })?;
            problems.push(problem);
        }

        let meta = BatchMeta {
            batch_id:      Uuid::new_v4(),
            kind:          self.config.kind,
            count,
            layout:        self.config.layout,
            show_answers:  self.config.show_answers,
            seed_text:     self.seed_text,
            seed_supplied: self.seed_supplied,
            generated_at,
        };
        log::info!("generated {count} {} problem(s), seed={:?}", meta.kind, meta.seed_text);

        Ok(Batch { meta, problems })
    }
}

fn generator_for(config: &BatchConfig) -> Box<dyn ProblemGenerator> {
    match config.kind {
        ProblemKind::AddSub => Box::new(AddSubGenerator::new(config.addsub.clone())),
        ProblemKind::Mul    => Box::new(MulGenerator::new(config.mul)),
        ProblemKind::Div    => Box::new(DivGenerator::new(config.div)),
    }
}

/// Build and run in one step.
pub fn generate_batch(config: &BatchConfig) -> GenResult<Batch> {
    BatchEngine::build(config.clone())?.run()
}
