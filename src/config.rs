//! Indicator configuration.
//!
//! The pin and the blink flag are plain values handed to
//! [`StatusIndicator`](crate::app::indicator::StatusIndicator); the blink
//! timing is fixed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Time the LED spends HIGH in each blink cycle.
pub const BLINK_HIGH_MS: u32 = 50;
/// Time the LED spends LOW in each blink cycle.
pub const BLINK_LOW_MS: u32 = 50;

/// Task watchdog timeout for the main loop.
pub const WATCHDOG_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// GPIO driving the status LED.
    pub led_gpio: i32,
    /// Blink the LED from the main loop.
    pub debug_blink: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            led_gpio: pins::STATUS_LED_GPIO,
            debug_blink: cfg!(feature = "debug-blink"),
        }
    }
}

impl IndicatorConfig {
    pub fn new(led_gpio: i32, debug_blink: bool) -> Self {
        Self {
            led_gpio,
            debug_blink,
        }
    }

    /// Reject pins that do not exist on the chip.
    pub fn validate(&self) -> Result<()> {
        if !pins::is_valid_gpio(self.led_gpio) {
            return Err(Error::Config("led_gpio is not a valid GPIO"));
        }
        Ok(())
    }
}
