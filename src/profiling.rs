//! Named timing blocks for instrumenting algorithm phases.
//!
//! Timing is compiled in only with the `profiling` feature. Without it every
//! method is a no-op and `summarize` emits nothing.

#[cfg(feature = "profiling")]
use std::collections::BTreeMap;
use std::time::Duration;
#[cfg(feature = "profiling")]
use std::time::Instant;

use log::info;
#[cfg(feature = "profiling")]
use log::warn;

/// Unit used when printing a profiling summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hours,
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl DurationUnit {
    /// Suffix printed after each value.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Hours => "h",
            Self::Minutes => "m",
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "us",
            Self::Nanos => "ns",
        }
    }

    /// Whole units contained in `duration` (truncating).
    pub fn convert(&self, duration: Duration) -> u128 {
        match self {
            Self::Hours => (duration.as_secs() / 3600) as u128,
            Self::Minutes => (duration.as_secs() / 60) as u128,
            Self::Seconds => duration.as_secs() as u128,
            Self::Millis => duration.as_millis(),
            Self::Micros => duration.as_micros(),
            Self::Nanos => duration.as_nanos(),
        }
    }
}

#[cfg(feature = "profiling")]
#[derive(Debug, Clone, Copy)]
struct TimeInfo {
    start: Instant,
    passed: Duration,
    finished: bool,
}

/// Accumulates wall-clock time per named block.
#[derive(Debug, Default)]
pub struct Profiler {
    #[cfg(feature = "profiling")]
    profiles: BTreeMap<String, TimeInfo>,
}

impl Profiler {
    /// Create a profiler with no blocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether timing is compiled in.
    pub const fn enabled() -> bool {
        cfg!(feature = "profiling")
    }

    /// Start (or restart) timing block `name`. Time already accumulated is kept.
    #[cfg(feature = "profiling")]
    pub fn start(&mut self, name: &str) {
        let now = Instant::now();
        self.profiles
            .entry(name.to_string())
            .and_modify(|info| {
                info.start = now;
                info.finished = false;
            })
            .or_insert(TimeInfo {
                start: now,
                passed: Duration::ZERO,
                finished: false,
            });
    }

    /// Start (or restart) timing block `name`.
    #[cfg(not(feature = "profiling"))]
    pub fn start(&mut self, _name: &str) {}

    /// Stop timing block `name`, adding the elapsed time. Unknown names are ignored.
    #[cfg(feature = "profiling")]
    pub fn end(&mut self, name: &str) {
        if let Some(info) = self.profiles.get_mut(name) {
            info.passed += info.start.elapsed();
            info.finished = true;
        }
    }

    /// Stop timing block `name`.
    #[cfg(not(feature = "profiling"))]
    pub fn end(&mut self, _name: &str) {}

    /// End block `name` if it is running, start it otherwise.
    #[cfg(feature = "profiling")]
    pub fn profile(&mut self, name: &str) {
        let running = self.profiles.get(name).is_some_and(|info| !info.finished);
        if running {
            self.end(name);
        } else {
            self.start(name);
        }
    }

    /// End block `name` if it is running, start it otherwise.
    #[cfg(not(feature = "profiling"))]
    pub fn profile(&mut self, _name: &str) {}

    /// Accumulated time of block `name`, if it exists.
    #[cfg(feature = "profiling")]
    pub fn elapsed(&self, name: &str) -> Option<Duration> {
        self.profiles.get(name).map(|info| info.passed)
    }

    /// Accumulated time of block `name`, if it exists.
    #[cfg(not(feature = "profiling"))]
    pub fn elapsed(&self, _name: &str) -> Option<Duration> {
        None
    }

    /// Emit one line per block through `sink`, then clear all blocks.
    ///
    /// Unfinished blocks are reported and closed first. Nothing is emitted
    /// when there are no blocks.
    #[cfg(feature = "profiling")]
    pub fn summarize(&mut self, unit: DurationUnit, mut sink: impl FnMut(&str)) {
        if self.profiles.is_empty() {
            return;
        }

        let unfinished: Vec<String> = self
            .profiles
            .iter()
            .filter(|(_, info)| !info.finished)
            .map(|(name, _)| name.clone())
            .collect();
        for name in unfinished {
            warn!("unfinished profile block: {}", name);
            sink(&format!("Unfinished profile block: {}", name));
            self.end(&name);
        }

        sink("");
        sink("Profiling summary");
        let mut overall: u128 = 0;
        for (name, info) in &self.profiles {
            let value = unit.convert(info.passed);
            overall += value;
            sink(&format_line(name, value, unit));
        }
        sink(&format_line("Summed: ", overall, unit));
        sink("Finished summary");
        self.profiles.clear();
    }

    /// Emit one line per block through `sink`, then clear all blocks.
    #[cfg(not(feature = "profiling"))]
    pub fn summarize(&mut self, _unit: DurationUnit, _sink: impl FnMut(&str)) {}

    /// [`Profiler::summarize`] into `log::info!`.
    pub fn summarize_to_log(&mut self, unit: DurationUnit) {
        self.summarize(unit, |line| info!("{}", line));
    }
}

/// One summary line: name left-aligned in 25 columns, value right-aligned in 11.
pub fn format_line(name: &str, value: u128, unit: DurationUnit) -> String {
    format!("  {:<25}{:>11}{}", name, value, unit.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("bfs", 42, DurationUnit::Millis),
            format!("  {:<25}{:>11}ms", "bfs", 42)
        );
    }

    #[test]
    fn test_unit_conversion() {
        let d = Duration::from_millis(125_000);
        assert_eq!(DurationUnit::Minutes.convert(d), 2);
        assert_eq!(DurationUnit::Seconds.convert(d), 125);
        assert_eq!(DurationUnit::Millis.convert(d), 125_000);
    }

    #[cfg(not(feature = "profiling"))]
    #[test]
    fn test_disabled_profiler_is_silent() {
        let mut profiler = Profiler::new();
        profiler.start("phase");
        profiler.end("phase");
        let mut lines = Vec::new();
        profiler.summarize(DurationUnit::Micros, |l| lines.push(l.to_string()));
        assert!(lines.is_empty());
        assert!(!Profiler::enabled());
    }

    #[cfg(feature = "profiling")]
    #[test]
    fn test_summary_closes_unfinished_blocks() {
        let mut profiler = Profiler::new();
        profiler.start("load");
        profiler.end("load");
        profiler.profile("scan");
        let mut lines = Vec::new();
        profiler.summarize(DurationUnit::Nanos, |l| lines.push(l.to_string()));
        assert_eq!(lines[0], "Unfinished profile block: scan");
        assert!(lines.contains(&"Profiling summary".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Finished summary"));
        assert!(profiler.elapsed("load").is_none());
    }
}
