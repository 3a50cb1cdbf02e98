//! Board-agnostic refresh engine for the scrolling seven-segment display
//!
//! This crate contains all display logic that does not depend on a specific
//! microcontroller:
//!
//! - Glyph encoding (segment bitmasks and a text font)
//! - Message catalog
//! - Digit multiplexer and scroll state machines
//! - Frame renderer
//! - Refresh scheduler (per-tick orchestration under a critical section)
//! - Display bus trait and a GPIO implementation over `embedded-hal`
//!
//! # Architecture
//!
//! ```text
//!  tick ──► RefreshScheduler ──► Multiplexer ──┐
//!                 │                            ├──► render() ──► DisplayBus
//!                 └────────────► ScrollMachine ┘
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod catalog;
pub mod config;
pub mod glyph;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use catalog::{Catalog, CatalogError, Message};
pub use config::{DisplayConfig, Polarity, VIEWPORT_WIDTH};
pub use glyph::Glyph;
pub use scheduler::{RefreshScheduler, TickReport};
