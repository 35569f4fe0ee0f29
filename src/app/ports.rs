//! Port traits — the boundary between the indicator and the GPIO hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StatusIndicator (domain)
//! ```
//!
//! Pin levels use [`embedded_hal::digital::PinState`]; blocking waits use
//! [`embedded_hal::delay::DelayNs`] directly, so no delay port is defined
//! here.

use embedded_hal::digital::PinState;

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Pin-number addressed digital output control.
///
/// Failures are whatever the underlying driver reports; callers pass them
/// through without interpretation.
pub trait GpioPort {
    /// Configure `pin` as a push-pull digital output.
    ///
    /// Must be safe to call more than once for the same pin.
    fn configure_output(&mut self, pin: i32) -> Result<()>;

    /// Drive `pin` to `level`.
    fn write(&mut self, pin: i32, level: PinState) -> Result<()>;
}
