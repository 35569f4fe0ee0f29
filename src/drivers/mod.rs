//! Peripheral drivers.

pub mod status_led;
pub mod watchdog;
