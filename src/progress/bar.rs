//! Progress bar trait and a log-backed implementation.

use log::info;

/// A write-only sink for the progress of a long-running operation.
pub trait ProgressBar: Send {
    /// Label shown with every report.
    fn label(&self) -> &str;

    /// Number of discrete steps the bar reports.
    fn steps(&self) -> u32;

    /// Change the number of discrete steps.
    fn set_steps(&mut self, steps: u32);

    /// Report completion as a fraction in `[0, 1]`.
    fn poll(&mut self, progress: f32);

    /// Report `done` out of `todo` units of work. `todo == 0` counts as complete.
    fn poll_steps(&mut self, done: u32, todo: u32) {
        let progress = if todo == 0 {
            1.0
        } else {
            done as f32 / todo as f32
        };
        self.poll(progress);
    }
}

/// Reports progress through `log::info!`, once per crossed step.
#[derive(Debug, Clone)]
pub struct LogProgressBar {
    label: String,
    steps: u32,
    /// Last step reported, None before the first report.
    reported: Option<u32>,
}

impl LogProgressBar {
    /// Create a bar reporting `steps` times between 0% and 100% (at least once).
    pub fn new(label: impl Into<String>, steps: u32) -> Self {
        Self {
            label: label.into(),
            steps: steps.max(1),
            reported: None,
        }
    }

    /// Step index reached at `progress`.
    fn step_at(&self, progress: f32) -> u32 {
        let clamped = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        (clamped * self.steps as f32).floor() as u32
    }

    /// Last step reported so far.
    pub fn last_reported_step(&self) -> Option<u32> {
        self.reported
    }
}

impl ProgressBar for LogProgressBar {
    fn label(&self) -> &str {
        &self.label
    }

    fn steps(&self) -> u32 {
        self.steps
    }

    fn set_steps(&mut self, steps: u32) {
        self.steps = steps.max(1);
        self.reported = None;
    }

    fn poll(&mut self, progress: f32) {
        let step = self.step_at(progress);
        if self.reported.is_some_and(|last| step <= last) {
            return;
        }
        self.reported = Some(step);
        info!(
            "{}: {:>3}%",
            self.label,
            (step as f32 / self.steps as f32 * 100.0).round() as u32
        );
    }
}
