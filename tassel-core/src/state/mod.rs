//! Display state machines
//!
//! Both machines are plain values owned by the refresh scheduler. They
//! start in a fixed state and run forever; there is no terminal state.

pub mod multiplex;
pub mod scroll;

pub use multiplex::{MultiplexState, Multiplexer};
pub use scroll::{lead_in_offset, ScrollEvent, ScrollMachine, ScrollState};
