//! Per-tick refresh orchestration
//!
//! Each tick has two phases:
//!
//! 1. **Multiplex**: disable the lit digit, advance the multiplexer, render
//!    the new digit from the current scroll position, enable it. This runs
//!    as one critical section so the bus never shows two digits or a
//!    half-written glyph.
//! 2. **Scroll**: count the tick towards the next letter shift.
//!
//! Between ticks the scheduler waits on the tick signal.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::catalog::Catalog;
use crate::config::{DisplayConfig, VIEWPORT_WIDTH};
use crate::glyph::Glyph;
use crate::render::render;
use crate::state::{Multiplexer, ScrollEvent, ScrollMachine};
use crate::traits::DisplayBus;

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Digit lit by this tick
    pub digit: usize,
    /// Glyph written for that digit
    pub glyph: Glyph,
    /// Scroll phase outcome
    pub scroll: ScrollEvent,
}

/// Everything the scheduler mutates
pub struct RefreshContext<'a, B, const W: usize = VIEWPORT_WIDTH> {
    bus: B,
    multiplexer: Multiplexer<W>,
    scroll: ScrollMachine<'a, W>,
}

impl<'a, B: DisplayBus, const W: usize> RefreshContext<'a, B, W> {
    /// Break-before-make digit refresh
    fn multiplex_phase(&mut self) -> (usize, Glyph) {
        self.bus.disable_digits();

        let digit = self.multiplexer.advance();
        let glyph = render(
            &self.scroll.current_message(),
            self.scroll.current_offset(),
            digit,
        );

        self.bus.write_segments(glyph);
        self.bus.enable_digit(digit);

        (digit, glyph)
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn multiplexer(&self) -> &Multiplexer<W> {
        &self.multiplexer
    }

    pub fn scroll(&self) -> &ScrollMachine<'a, W> {
        &self.scroll
    }
}

/// Tick-driven display refresh
///
/// `M` decides how the multiplex phase is protected. Firmware uses
/// `CriticalSectionRawMutex`, which masks interrupts for the duration of
/// the phase.
pub struct RefreshScheduler<'a, M: RawMutex, B, const W: usize = VIEWPORT_WIDTH> {
    context: Mutex<M, RefCell<RefreshContext<'a, B, W>>>,
}

impl<'a, M: RawMutex, B: DisplayBus, const W: usize> RefreshScheduler<'a, M, B, W> {
    /// Blank the bus and start at the lead-in of the first message
    pub fn new(mut bus: B, catalog: Catalog<'a>, config: &DisplayConfig) -> Self {
        bus.blank();

        Self {
            context: Mutex::new(RefCell::new(RefreshContext {
                bus,
                multiplexer: Multiplexer::new(),
                scroll: ScrollMachine::new(catalog, config.scroll_period_ticks),
            })),
        }
    }

    /// Run one refresh tick
    ///
    /// The multiplexer advances before rendering, so the first tick after
    /// start lights digit 1.
    pub fn on_tick(&self) -> TickReport {
        let (digit, glyph) = self
            .context
            .lock(|context| context.borrow_mut().multiplex_phase());

        let scroll = self
            .context
            .lock(|context| context.borrow_mut().scroll.tick());

        TickReport {
            digit,
            glyph,
            scroll,
        }
    }

    /// Refresh on every tick signal, forever
    ///
    /// `observe` sees each tick's report after the critical section has
    /// been released. Never returns.
    pub async fn run<S: RawMutex>(
        &self,
        ticks: &Signal<S, ()>,
        mut observe: impl FnMut(&TickReport),
    ) {
        loop {
            ticks.wait().await;
            let report = self.on_tick();
            observe(&report);
        }
    }

    /// Inspect or adjust the context under the lock
    pub fn with_context<R>(&self, f: impl FnOnce(&mut RefreshContext<'a, B, W>) -> R) -> R {
        self.context.lock(|context| f(&mut context.borrow_mut()))
    }
}
