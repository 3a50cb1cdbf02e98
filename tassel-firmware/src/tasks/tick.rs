//! Tick task for the display refresh
//!
//! Replaces a hardware timer overflow interrupt: every tick period it
//! raises `TICK_SIGNAL`, and the refresh task wakes to light the next digit.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use crate::catalog::DISPLAY_CONFIG;

/// Signal to notify the refresh task of a tick
///
/// A tick raised while the previous one is still pending is merged with it.
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Tick task - raises a tick signal at a fixed rate
#[embassy_executor::task]
pub async fn tick_task() {
    info!(
        "Tick task started ({} us period)",
        DISPLAY_CONFIG.tick_period_us
    );

    let mut ticker = Ticker::every(Duration::from_micros(
        DISPLAY_CONFIG.tick_period_us as u64,
    ));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(());
    }
}
