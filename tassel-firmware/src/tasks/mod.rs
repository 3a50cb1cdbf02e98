//! Embassy async tasks
//!
//! The tick task paces the refresh task through a signal.

pub mod refresh;
pub mod tick;

pub use refresh::{refresh_task, DigitBus};
pub use tick::tick_task;
