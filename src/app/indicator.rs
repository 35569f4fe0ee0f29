//! Status indicator loop — the only piece of domain logic in the firmware.
//!
//! [`StatusIndicator`] wraps the status LED driver and a blocking delay.
//! `main` calls [`setup`](StatusIndicator::setup) once and then
//! [`run_once`](StatusIndicator::run_once) forever.
//!
//! ```text
//!  blink on:  ─┐ HIGH 50ms ┌─ LOW 50ms ─┐ HIGH 50ms ┌─ ...
//!              └───────────┘            └───────────┘
//!  blink off: run_once() is a no-op
//! ```

use embedded_hal::delay::DelayNs;
use log::{info, trace};

use crate::config::{BLINK_HIGH_MS, BLINK_LOW_MS, IndicatorConfig};
use crate::drivers::status_led::StatusLed;
use crate::error::Result;

use super::ports::GpioPort;

pub struct StatusIndicator<G, D> {
    led: StatusLed<G>,
    delay: D,
    blink: bool,
    cycles: u64,
}

impl<G: GpioPort, D: DelayNs> StatusIndicator<G, D> {
    pub fn new(gpio: G, delay: D, config: IndicatorConfig) -> Self {
        Self {
            led: StatusLed::new(gpio, config.led_gpio),
            delay,
            blink: config.debug_blink,
            cycles: 0,
        }
    }

    /// Configure the LED pin as an output, leaving it LOW.
    ///
    /// Safe to call again; the pin ends up in the same state.
    pub fn setup(&mut self) -> Result<()> {
        self.led.init()?;
        info!(
            "indicator: GPIO{} ready, blink {}",
            self.led.pin(),
            if self.blink { "on" } else { "off" }
        );
        Ok(())
    }

    /// One pass of the main loop body.
    ///
    /// With blinking enabled: HIGH, wait 50 ms, LOW, wait 50 ms. Otherwise
    /// nothing is written and nothing waits.
    pub fn run_once(&mut self) -> Result<()> {
        if !self.blink {
            return Ok(());
        }

        self.led.on()?;
        self.delay.delay_ms(BLINK_HIGH_MS);
        self.led.off()?;
        self.delay.delay_ms(BLINK_LOW_MS);

        self.cycles = self.cycles.wrapping_add(1);
        trace!("indicator: cycle {}", self.cycles);
        Ok(())
    }

    pub fn is_blinking(&self) -> bool {
        self.blink
    }

    /// Completed blink cycles since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn led(&self) -> &StatusLed<G> {
        &self.led
    }

    pub fn into_parts(self) -> (G, D) {
        (self.led.into_gpio(), self.delay)
    }
}
