//! GPIO assignments for the indicator board.
//!
//! Only [`IndicatorConfig::default`](crate::config::IndicatorConfig) reads
//! these; drivers take pin numbers as parameters.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Single-colour status LED, active HIGH through a series resistor.
pub const STATUS_LED_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// GPIO matrix limits (ESP32-S3)
// ---------------------------------------------------------------------------

/// Highest GPIO number on the ESP32-S3 (GPIO 22–25 do not exist).
pub const MAX_GPIO: i32 = 48;

/// Returns `true` if `pin` names a GPIO that physically exists on the chip.
pub const fn is_valid_gpio(pin: i32) -> bool {
    matches!(pin, 0..=21 | 26..=MAX_GPIO)
}
