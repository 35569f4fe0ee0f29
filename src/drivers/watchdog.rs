//! Task watchdog for the main loop.
//!
//! Subscribes the calling task to the ESP-IDF TWDT. Idle tasks are left
//! unwatched so a loop that never blocks (blink off) does not trip it;
//! only a stalled main task does.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::{info, warn};

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
    #[cfg(not(target_os = "espidf"))]
    feeds: u64,
}

impl Watchdog {
    /// Subscribe the current task with a `timeout_ms` deadline.
    #[cfg(target_os = "espidf")]
    pub fn subscribe(timeout_ms: u32) -> Self {
        let cfg = esp_task_wdt_config_t {
            timeout_ms,
            idle_core_mask: 0,
            trigger_panic: true,
        };
        // SAFETY: plain FFI calls with a valid config; a null handle means
        // "the calling task".
        let ret = unsafe { esp_task_wdt_reconfigure(&cfg) };
        if ret != ESP_OK as i32 {
            warn!("watchdog: reconfigure returned {} (may already be configured)", ret);
        }

        let ret = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
        let subscribed = ret == ESP_OK as i32;
        if subscribed {
            info!("watchdog: main task subscribed ({}ms)", timeout_ms);
        } else {
            warn!("watchdog: subscribe failed ({})", ret);
        }
        Self { subscribed }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn subscribe(timeout_ms: u32) -> Self {
        info!("watchdog(sim): {}ms timeout not enforced", timeout_ms);
        if timeout_ms == 0 {
            warn!("watchdog(sim): zero timeout");
        }
        Self { feeds: 0 }
    }

    /// Reset the countdown.
    #[cfg(target_os = "espidf")]
    pub fn feed(&mut self) {
        if self.subscribed {
            // SAFETY: only reached after a successful esp_task_wdt_add.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn feed(&mut self) {
        self.feeds += 1;
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn feeds(&self) -> u64 {
        self.feeds
    }
}
