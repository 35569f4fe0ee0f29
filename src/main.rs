//! Status Indicator Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  EspGpio (GpioPort)    SystemDelay (DelayNs) │
//! │  ─────────────── trait boundary ──────────── │
//! │        StatusIndicator: setup · run_once     │
//! └──────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info, warn};

use status_indicator::adapters::delay::SystemDelay;
use status_indicator::adapters::gpio::EspGpio;
use status_indicator::app::indicator::StatusIndicator;
use status_indicator::config::{IndicatorConfig, WATCHDOG_TIMEOUT_MS};
use status_indicator::drivers::watchdog::Watchdog;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Status indicator v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = IndicatorConfig::default();
    config.validate()?;

    // ── 3. Setup ──────────────────────────────────────────────
    let mut indicator = StatusIndicator::new(EspGpio::new(), SystemDelay::new(), config);
    if let Err(e) = indicator.setup() {
        // No LED pin, nothing to indicate. Halt.
        error!("indicator setup failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let mut watchdog = Watchdog::subscribe(WATCHDOG_TIMEOUT_MS);

    info!("System ready. Entering main loop.");

    // ── 4. Main loop ──────────────────────────────────────────
    loop {
        if let Err(e) = indicator.run_once() {
            warn!("indicator: {}", e);
        }
        watchdog.feed();
    }
}
