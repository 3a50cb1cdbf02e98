//! Tassel - scrolling seven-segment display firmware
//!
//! Main firmware binary for RP2040-based boards driving a 4-digit
//! multiplexed seven-segment display. Messages from `display.toml` crawl
//! across the digits one letter at a time and wrap around forever.
//!
//! Pin assignments:
//! - GPIO0..GPIO7: segments a, b, c, d, e, f, g, dp (active high)
//! - GPIO8..GPIO11: digit enables 0..3 (polarity from `display.toml`)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use tassel_core::{Polarity, VIEWPORT_WIDTH};
use {defmt_rtt as _, panic_probe as _};

use crate::catalog::{CATALOG, DISPLAY_CONFIG};
use crate::tasks::DigitBus;

mod catalog;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tassel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Display: {} digits, tick {} us, scroll step every {} ticks ({} ms), digits {}",
        VIEWPORT_WIDTH,
        DISPLAY_CONFIG.tick_period_us,
        DISPLAY_CONFIG.scroll_period_ticks.get(),
        DISPLAY_CONFIG.scroll_period_us() / 1000,
        DISPLAY_CONFIG.digit_polarity
    );
    info!(
        "Catalog: {} messages, longest {} glyphs",
        CATALOG.len(),
        CATALOG.longest()
    );

    // Start with every digit off so nothing flashes before the first tick
    let off = inactive_level(DISPLAY_CONFIG.digit_polarity);
    let digits = [
        Output::new(p.PIN_8, off),
        Output::new(p.PIN_9, off),
        Output::new(p.PIN_10, off),
        Output::new(p.PIN_11, off),
    ];
    let segments = [
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
    ];
    let bus = DigitBus::new(digits, segments, DISPLAY_CONFIG.digit_polarity);
    info!("Display pins initialized");

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::refresh_task(bus)));
    unwrap!(spawner.spawn(tasks::tick_task()));

    info!("All tasks spawned, display running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Pin level that keeps a digit dark
fn inactive_level(polarity: Polarity) -> Level {
    if polarity.level(false) {
        Level::High
    } else {
        Level::Low
    }
}
