//! Flash mental-math display.
//!
//! Operands are shown one at a time, each followed by a short blank so
//! that repeated values read as separate numbers. This module only
//! computes frames and timings. Playback belongs to the caller.

use crate::{
    config::DEFAULT_FLASH_SPEED_MS,
    format::format_number,
    problem::{AddSubProblem, Problem},
};
use serde::Serialize;
use std::time::Duration;

pub const MIN_SPEED_MS: u64 = 200;
const MIN_BLANK_MS: u64 = 60;
const MAX_BLANK_MS: u64 = 180;
const MIN_NUMBER_MS: u64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum FlashFrame {
    Number { text: String, duration: Duration },
    Blank { duration: Duration },
}

impl FlashFrame {
    pub fn duration(&self) -> Duration {
        match self {
            FlashFrame::Number { duration, .. } | FlashFrame::Blank { duration } => *duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashSchedule {
    pub frames: Vec<FlashFrame>,
}

impl FlashSchedule {
    /// `speed_ms` is the time per operand, gap included.
    /// 0 means the default; anything below 200 ms is raised to 200.
    pub fn for_problem(problem: &AddSubProblem, speed_ms: u64) -> Self {
        let (number, blank) = frame_timings(speed_ms);
        let mut frames = Vec::with_capacity(problem.nums().len() * 2);

        let first = std::iter::once(problem.nums()[0].to_string());
        let rest = problem
            .ops()
            .iter()
            .zip(&problem.nums()[1..])
            .map(|(op, n)| format!("{}{n}", op.symbol()));

        for (i, text) in first.chain(rest).enumerate() {
            if i > 0 {
                frames.push(FlashFrame::Blank { duration: blank });
            }
            frames.push(FlashFrame::Number { text, duration: number });
        }
        Self { frames }
    }

    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(FlashFrame::duration).sum()
    }
}

/// (number, blank) display durations for a speed.
pub fn frame_timings(speed_ms: u64) -> (Duration, Duration) {
    let requested = if speed_ms == 0 { DEFAULT_FLASH_SPEED_MS } else { speed_ms };
    let speed = requested.max(MIN_SPEED_MS);
    let blank = (speed / 5).clamp(MIN_BLANK_MS, MAX_BLANK_MS);
    let number = speed.saturating_sub(blank).max(MIN_NUMBER_MS);
    (Duration::from_millis(number), Duration::from_millis(blank))
}

/// Navigation over a batch's add/subtract problems.
#[derive(Debug, Clone, Default)]
pub struct FlashDeck {
    problems: Vec<AddSubProblem>,
    index:    usize,
}

impl FlashDeck {
    /// Non add/subtract problems are skipped.
    pub fn from_problems<'a>(problems: impl IntoIterator<Item = &'a Problem>) -> Self {
        Self {
            problems: problems
                .into_iter()
                .filter_map(Problem::as_add_sub)
                .cloned()
                .collect(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize { self.problems.len() }
    pub fn is_empty(&self) -> bool { self.problems.is_empty() }
    pub fn index(&self) -> usize { self.index }

    pub fn current(&self) -> Option<&AddSubProblem> {
        self.problems.get(self.index)
    }

    /// Wraps around to the first problem.
    pub fn next_problem(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len();
        }
    }

    /// Wraps around to the last problem.
    pub fn prev_problem(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len() - 1) % self.len();
        }
    }

    pub fn progress(&self) -> String {
        if self.is_empty() {
            return "No problems".to_string();
        }
        format!("Problem {} / {}", self.index + 1, self.len())
    }

    pub fn answer_text(&self) -> Option<String> {
        self.current()
            .map(|p| format!("Answer: {}", format_number(p.answer())))
    }

    pub fn schedule(&self, speed_ms: u64) -> Option<FlashSchedule> {
        self.current().map(|p| FlashSchedule::for_problem(p, speed_ms))
    }
}
