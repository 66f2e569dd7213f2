//! Practice stopwatch. Owns elapsed time and running state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Time banked by earlier start/stop cycles.
    banked:     Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// No-op when already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// No-op when already stopped.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn toggle(&mut self) {
        if self.is_running() { self.stop() } else { self.start() }
    }

    pub fn reset(&mut self) {
        self.banked = Duration::ZERO;
        self.started_at = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    fn stop_at(&mut self, now: Instant) {
        if let Some(start) = self.started_at.take() {
            self.banked += now.saturating_duration_since(start);
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        self.banked + running
    }
}

/// `MM:SS.t` with tenths truncated, e.g. 83_456 ms -> "01:23.4".
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_tenths = elapsed.as_millis() / 100;
    let minutes = total_tenths / 600;
    let seconds = (total_tenths % 600) / 10;
    let tenths = total_tenths % 10;
    format!("{minutes:02}:{seconds:02}.{tenths}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_seconds_tenths() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00.0");
        assert_eq!(format_elapsed(Duration::from_millis(83_456)), "01:23.4");
        assert_eq!(format_elapsed(Duration::from_millis(99)), "00:00.0");
        assert_eq!(format_elapsed(Duration::from_secs(100 * 60)), "100:00.0");
    }

    #[test]
    fn banks_time_across_cycles() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();

        sw.start_at(t0);
        sw.stop_at(t0 + Duration::from_millis(1_500));
        assert!(!sw.is_running());

        sw.start_at(t0 + Duration::from_secs(10));
        assert_eq!(
            sw.elapsed_at(t0 + Duration::from_millis(10_700)),
            Duration::from_millis(2_200)
        );
    }

    #[test]
    fn double_start_keeps_first_instant() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start_at(t0);
        sw.start_at(t0 + Duration::from_secs(5));
        sw.stop_at(t0 + Duration::from_secs(6));
        assert_eq!(sw.elapsed_at(t0 + Duration::from_secs(60)), Duration::from_secs(6));
    }

    #[test]
    fn reset_clears_everything() {
        let mut sw = Stopwatch::new();
        sw.toggle();
        assert!(sw.is_running());
        sw.reset();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }
}
