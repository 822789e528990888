//! A locked pool of progress bars created through a factory.

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use super::bar::{LogProgressBar, ProgressBar};

/// A progress bar shared between the pool and the code reporting into it.
pub type SharedProgressBar = Arc<Mutex<Box<dyn ProgressBar>>>;

/// Creates and disposes of concrete progress bars for a [`ProgressPool`].
pub trait ProgressBarFactory: Send + Sync {
    /// Create a new bar.
    fn create_bar(&self, label: &str, steps: u32) -> Box<dyn ProgressBar>;

    /// Called after the bar at `index` was removed from the pool.
    fn remove_bar(&self, _index: usize) {}
}

/// Factory for [`LogProgressBar`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgressFactory;

impl ProgressBarFactory for LogProgressFactory {
    fn create_bar(&self, label: &str, steps: u32) -> Box<dyn ProgressBar> {
        Box::new(LogProgressBar::new(label, steps))
    }
}

type CountCallback = Box<dyn Fn(usize) + Send>;

struct PoolState {
    bars: Vec<SharedProgressBar>,
    on_count_change: Option<CountCallback>,
}

/// Thread-safe collection of progress bars.
///
/// The count-change callback runs while the pool is locked and must not call
/// back into the pool.
pub struct ProgressPool<F: ProgressBarFactory = LogProgressFactory> {
    factory: F,
    state: Mutex<PoolState>,
}

impl<F: ProgressBarFactory> ProgressPool<F> {
    /// Create an empty pool using `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            state: Mutex::new(PoolState {
                bars: Vec::new(),
                on_count_change: None,
            }),
        }
    }

    /// Create a bar, register it and return a shared handle to it.
    pub fn create(&self, label: &str, steps: u32) -> SharedProgressBar {
        let mut state = self.state.lock();
        let bar: SharedProgressBar = Arc::new(Mutex::new(self.factory.create_bar(label, steps)));
        state.bars.push(Arc::clone(&bar));
        debug!("progress bar '{}' created ({} active)", label, state.bars.len());
        if let Some(callback) = &state.on_count_change {
            callback(state.bars.len());
        }
        bar
    }

    /// Remove the bar at `index`. Returns false if there is no such bar.
    pub fn remove(&self, index: usize) -> bool {
        let mut state = self.state.lock();
        if index >= state.bars.len() {
            return false;
        }
        state.bars.remove(index);
        self.factory.remove_bar(index);
        if let Some(callback) = &state.on_count_change {
            callback(state.bars.len());
        }
        true
    }

    /// Number of registered bars.
    pub fn count(&self) -> usize {
        self.state.lock().bars.len()
    }

    /// Register a callback receiving the bar count after every create/remove.
    pub fn set_count_change_callback(&self, callback: impl Fn(usize) + Send + 'static) {
        self.state.lock().on_count_change = Some(Box::new(callback));
    }
}

impl Default for ProgressPool<LogProgressFactory> {
    fn default() -> Self {
        Self::new(LogProgressFactory)
    }
}
