//! Application core — pure logic, no direct register access.
//!
//! The indicator talks to hardware only through [`ports::GpioPort`] and
//! `embedded_hal::delay::DelayNs`, so it runs unchanged against the
//! in-memory adapters and test mocks.

pub mod indicator;
pub mod ports;
