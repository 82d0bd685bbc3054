//! Stop signals for bounded runs
//!
//! The demo itself never stops. Hosts and tests that need a bound check one
//! of these before every pass.

use core::sync::atomic::{AtomicBool, Ordering};

/// Decides, before each pass, whether the loop should stop
pub trait StopSignal {
    /// Returns true to stop before running pass number `iteration`
    fn should_stop(&mut self, iteration: u64) -> bool;
}

/// Never stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl StopSignal for Never {
    fn should_stop(&mut self, _iteration: u64) -> bool {
        false
    }
}

/// Stops after a fixed number of passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationLimit(pub u64);

impl StopSignal for IterationLimit {
    fn should_stop(&mut self, iteration: u64) -> bool {
        iteration >= self.0
    }
}

/// External cancel flag, e.g. set from an interrupt handler or another thread
#[derive(Debug, Clone, Copy)]
pub struct CancelFlag<'a>(pub &'a AtomicBool);

impl StopSignal for CancelFlag<'_> {
    fn should_stop(&mut self, _iteration: u64) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl<F: FnMut(u64) -> bool> StopSignal for F {
    fn should_stop(&mut self, iteration: u64) -> bool {
        self(iteration)
    }
}
