//! Single-colour status LED driver.
//!
//! One GPIO, active HIGH. Owns its [`GpioPort`] and remembers the last
//! level it wrote; the pin itself is the source of truth.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: backed by [`EspGpio`](crate::adapters::gpio::EspGpio).
//! On host/test: backed by [`SimGpio`](crate::adapters::gpio::SimGpio) or a
//! recording mock.

use embedded_hal::digital::PinState;

use crate::app::ports::GpioPort;
use crate::error::Result;

pub struct StatusLed<G> {
    gpio: G,
    pin: i32,
    level: Option<PinState>,
}

impl<G: GpioPort> StatusLed<G> {
    pub fn new(gpio: G, pin: i32) -> Self {
        Self {
            gpio,
            pin,
            level: None,
        }
    }

    /// Configure the pin as output and drive it LOW.
    pub fn init(&mut self) -> Result<()> {
        self.gpio.configure_output(self.pin)?;
        self.set(PinState::Low)
    }

    pub fn set(&mut self, level: PinState) -> Result<()> {
        self.gpio.write(self.pin, level)?;
        self.level = Some(level);
        Ok(())
    }

    pub fn on(&mut self) -> Result<()> {
        self.set(PinState::High)
    }

    pub fn off(&mut self) -> Result<()> {
        self.set(PinState::Low)
    }

    pub fn pin(&self) -> i32 {
        self.pin
    }

    /// Last level written, `None` before [`init`](Self::init).
    pub fn level(&self) -> Option<PinState> {
        self.level
    }

    pub fn is_on(&self) -> bool {
        self.level == Some(PinState::High)
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn into_gpio(self) -> G {
        self.gpio
    }
}
