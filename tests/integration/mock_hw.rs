//! Mock GPIO and delay for integration tests.
//!
//! Both halves push into one shared trace, so tests can assert on the
//! exact interleaving of pin writes and waits without touching real
//! registers or sleeping.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use status_indicator::app::ports::GpioPort;
use status_indicator::error::{GpioError, Result};

// ── Hardware call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    ConfigureOutput(i32),
    Write(i32, PinState),
    DelayNs(u64),
}

pub type Trace = Rc<RefCell<Vec<HwCall>>>;

// ── MockGpio ──────────────────────────────────────────────────

pub struct MockGpio {
    trace: Trace,
    /// Pin for which `configure_output` fails, if any.
    pub reject_pin: Option<i32>,
}

impl GpioPort for MockGpio {
    fn configure_output(&mut self, pin: i32) -> Result<()> {
        if self.reject_pin == Some(pin) {
            return Err(GpioError::ConfigFailed { pin, rc: 0x102 }.into());
        }
        self.trace.borrow_mut().push(HwCall::ConfigureOutput(pin));
        Ok(())
    }

    fn write(&mut self, pin: i32, level: PinState) -> Result<()> {
        self.trace.borrow_mut().push(HwCall::Write(pin, level));
        Ok(())
    }
}

// ── MockDelay ─────────────────────────────────────────────────

pub struct MockDelay {
    trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.borrow_mut().push(HwCall::DelayNs(u64::from(ns)));
    }
}

// ── Helpers ───────────────────────────────────────────────────

pub fn mock_hw() -> (MockGpio, MockDelay, Trace) {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    (
        MockGpio {
            trace: Rc::clone(&trace),
            reject_pin: None,
        },
        MockDelay {
            trace: Rc::clone(&trace),
        },
        trace,
    )
}

/// Level writes only, in order.
pub fn writes(trace: &Trace) -> Vec<PinState> {
    trace
        .borrow()
        .iter()
        .filter_map(|c| match c {
            HwCall::Write(_, level) => Some(*level),
            _ => None,
        })
        .collect()
}

pub fn configure_count(trace: &Trace) -> usize {
    trace
        .borrow()
        .iter()
        .filter(|c| matches!(c, HwCall::ConfigureOutput(_)))
        .count()
}

/// Replay the trace against a virtual clock: each write is stamped with
/// the number of nanoseconds waited before it.
pub fn timeline(trace: &Trace) -> Vec<(u64, PinState)> {
    let mut now = 0u64;
    let mut out = Vec::new();
    for call in trace.borrow().iter() {
        match call {
            HwCall::DelayNs(ns) => now += ns,
            HwCall::Write(_, level) => out.push((now, *level)),
            HwCall::ConfigureOutput(_) => {}
        }
    }
    out
}

/// Total virtual time waited.
pub fn elapsed_ns(trace: &Trace) -> u64 {
    trace
        .borrow()
        .iter()
        .map(|c| match c {
            HwCall::DelayNs(ns) => *ns,
            _ => 0,
        })
        .sum()
}
