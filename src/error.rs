//! Error types for the indicator firmware.
//!
//! The indicator never originates errors of its own; everything here is
//! reported by the GPIO layer or by configuration validation and handed
//! back to `main` unchanged. All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The GPIO layer rejected a direction or level change.
    Gpio(GpioError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

/// `rc` is the raw `esp_err_t` returned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// `gpio_config` failed, typically for a pin that does not exist.
    ConfigFailed { pin: i32, rc: i32 },
    /// `gpio_set_level` failed.
    WriteFailed { pin: i32, rc: i32 },
    /// Level written to a pin that was never configured as an output.
    NotOutput { pin: i32 },
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed { pin, rc } => write!(f, "GPIO{pin} config failed (rc={rc})"),
            Self::WriteFailed { pin, rc } => write!(f, "GPIO{pin} write failed (rc={rc})"),
            Self::NotOutput { pin } => write!(f, "GPIO{pin} is not an output"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
