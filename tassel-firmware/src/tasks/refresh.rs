//! Display refresh task
//!
//! Owns the display pins and runs the refresh scheduler. Each tick the
//! multiplex phase runs inside a critical section, so no interrupt handler
//! can observe the bus between disabling one digit and enabling the next.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use tassel_core::bus::GpioBus;
use tassel_core::render::render_frame;
use tassel_core::state::ScrollEvent;
use tassel_core::{Glyph, RefreshScheduler, VIEWPORT_WIDTH};

use super::tick::TICK_SIGNAL;
use crate::catalog::{self, CATALOG, DISPLAY_CONFIG};

/// The board's four digit lines and eight segment lines
pub type DigitBus = GpioBus<Output<'static>, VIEWPORT_WIDTH>;

/// Refresh task - lights one digit per tick and scrolls the catalog
#[embassy_executor::task]
pub async fn refresh_task(bus: DigitBus) {
    info!("Refresh task started");

    let scheduler: RefreshScheduler<'static, CriticalSectionRawMutex, DigitBus> =
        RefreshScheduler::new(bus, CATALOG, &DISPLAY_CONFIG);

    info!("Showing message 0: {=str}", catalog::label(0));

    scheduler
        .run(&TICK_SIGNAL, |report| {
            trace!("Digit {} = {}", report.digit, report.glyph);

            match report.scroll {
                ScrollEvent::Held => return,
                ScrollEvent::RolledOver { message_index } => {
                    debug!(
                        "Showing message {}: {=str}",
                        message_index,
                        catalog::label(message_index)
                    );
                }
                ScrollEvent::Shifted { .. } => {}
            }

            let (offset, frame) = scheduler.with_context(|ctx| {
                let scroll = ctx.scroll();
                let offset = scroll.current_offset();
                let frame: [Glyph; VIEWPORT_WIDTH] =
                    render_frame(&scroll.current_message(), offset);
                (offset, frame)
            });
            trace!("Frame at offset {}: {}", offset, frame);
        })
        .await;
}
