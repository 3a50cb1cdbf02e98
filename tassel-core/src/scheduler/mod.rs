//! Refresh scheduler
//!
//! Runs the display from a periodic tick: one digit refresh per tick plus
//! the scroll cadence.

pub mod refresh;

pub use refresh::{RefreshContext, RefreshScheduler, TickReport};
