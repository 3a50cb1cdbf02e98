//! Hardware abstraction traits
//!
//! These traits define the interface between the refresh logic and the
//! board-specific outputs.

pub mod display;

pub use display::DisplayBus;
