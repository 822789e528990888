//! Progress reporting for long-running graph work.
//!
//! The graph core never reports progress itself; callers poll a bar from
//! inside their own visitor and predicate callbacks.

pub mod bar;
pub mod pool;

pub use bar::{LogProgressBar, ProgressBar};
pub use pool::{LogProgressFactory, ProgressBarFactory, ProgressPool, SharedProgressBar};
