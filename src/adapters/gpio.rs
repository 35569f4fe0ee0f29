//! GPIO adapters implementing [`GpioPort`].
//!
//! - **`EspGpio`** (`target_os = "espidf"`) — raw `gpio_config` /
//!   `gpio_set_level` calls, pins addressed by number.
//! - **`SimGpio`** — in-memory pin bank for host builds. Mirrors the
//!   driver's failure modes: unknown pins fail `configure_output` with
//!   `ESP_ERR_INVALID_ARG`, writes to non-output pins are refused.

use embedded_hal::digital::PinState;
use log::debug;

use crate::app::ports::GpioPort;
use crate::error::{GpioError, Result};
use crate::pins;

/// `ESP_ERR_INVALID_ARG` from `esp_err.h`.
pub const ESP_ERR_INVALID_ARG: i32 = 0x102;

// ── ESP-IDF ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub struct EspGpio;

#[cfg(target_os = "espidf")]
impl EspGpio {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl Default for EspGpio {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
impl GpioPort for EspGpio {
    fn configure_output(&mut self, pin: i32) -> Result<()> {
        use esp_idf_svc::sys as idf;

        if !pins::is_valid_gpio(pin) {
            return Err(GpioError::ConfigFailed { pin, rc: ESP_ERR_INVALID_ARG }.into());
        }
        let cfg = idf::gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: idf::gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: idf::gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: idf::gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: idf::gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        // SAFETY: gpio_config only touches the IO_MUX/GPIO registers of the
        // pin in the mask; called from the main task only.
        let rc = unsafe { idf::gpio_config(&cfg) };
        if rc != idf::ESP_OK as i32 {
            return Err(GpioError::ConfigFailed { pin, rc }.into());
        }
        log::info!("gpio: GPIO{} configured as output", pin);
        Ok(())
    }

    fn write(&mut self, pin: i32, level: PinState) -> Result<()> {
        // SAFETY: gpio_set_level writes the output register of a pin that
        // was validated by configure_output. Main task only.
        let rc = unsafe {
            esp_idf_svc::sys::gpio_set_level(pin, u32::from(level == PinState::High))
        };
        if rc != esp_idf_svc::sys::ESP_OK as i32 {
            return Err(GpioError::WriteFailed { pin, rc }.into());
        }
        Ok(())
    }
}

// ── Simulation ────────────────────────────────────────────────

const PIN_COUNT: usize = pins::MAX_GPIO as usize + 1;

#[derive(Debug, Clone, Copy, Default)]
struct SimPin {
    output: bool,
    level: Option<PinState>,
}

/// In-memory pin bank; one slot per GPIO.
#[derive(Debug, Clone)]
pub struct SimGpio {
    pins: [SimPin; PIN_COUNT],
    writes: u64,
}

impl Default for SimGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl SimGpio {
    pub fn new() -> Self {
        Self {
            pins: [SimPin::default(); PIN_COUNT],
            writes: 0,
        }
    }

    fn slot(&self, pin: i32) -> Option<&SimPin> {
        if pins::is_valid_gpio(pin) {
            self.pins.get(pin as usize)
        } else {
            None
        }
    }

    pub fn is_output(&self, pin: i32) -> bool {
        self.slot(pin).is_some_and(|p| p.output)
    }

    /// Last level driven on `pin`, `None` if never written.
    pub fn level(&self, pin: i32) -> Option<PinState> {
        self.slot(pin).and_then(|p| p.level)
    }

    /// Total successful level writes across all pins.
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl GpioPort for SimGpio {
    fn configure_output(&mut self, pin: i32) -> Result<()> {
        if !pins::is_valid_gpio(pin) {
            return Err(GpioError::ConfigFailed { pin, rc: ESP_ERR_INVALID_ARG }.into());
        }
        self.pins[pin as usize].output = true;
        debug!("gpio(sim): GPIO{} configured as output", pin);
        Ok(())
    }

    fn write(&mut self, pin: i32, level: PinState) -> Result<()> {
        if !self.is_output(pin) {
            return Err(GpioError::NotOutput { pin }.into());
        }
        self.pins[pin as usize].level = Some(level);
        self.writes += 1;
        Ok(())
    }
}
