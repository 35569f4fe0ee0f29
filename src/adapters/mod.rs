//! Adapters — concrete implementations of the hardware-facing traits.
//!
//! | Adapter | Implements                     | Connects to                  |
//! |---------|--------------------------------|------------------------------|
//! | `gpio`  | GpioPort                       | ESP32 GPIO / in-memory bank  |
//! | `delay` | embedded_hal::delay::DelayNs   | FreeRTOS delay / thread sleep|

pub mod delay;
pub mod gpio;
