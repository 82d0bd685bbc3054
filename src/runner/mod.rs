//! The demo loop
//!
//! One-time console setup, then the same update on every pass, forever.
//!
//! ```text
//! Uninitialized --initialize()--> Running --update returns Spin--> Spinning
//! ```
//!
//! There is no transition back and no exit state. Hosts that need a bound
//! use [`DemoLoop::run_until`] with a [`StopSignal`].

pub mod stop;

use core::convert::Infallible;

use crate::console::{ConsoleBackend, SETUP_SEQUENCE, SetupStep};
use crate::error::{DemoError, DemoResult};
use crate::update::{Flow, Update};

// Re-export main types
pub use stop::{CancelFlag, IterationLimit, Never, StopSignal};

/// Lifecycle state of a [`DemoLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Setup has not run; no output is allowed
    Uninitialized,
    /// Setup done; the update runs on every pass
    Running,
    /// The update asked to stop being called; passes produce no output
    Spinning,
}

impl LoopState {
    /// Returns true once setup has completed
    pub const fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

/// Console demo loop over an injected backend and update
///
/// # Example
/// ```rust
/// use console_demo::prelude::*;
///
/// let mut demo = DemoLoop::new(BufferConsole::<256>::new(), CountingValue::<DefaultConfig>::new());
/// demo.initialize()?;
/// demo.run_until(IterationLimit(3))?;
///
/// assert_eq!(demo.backend().as_str(), "i = 0\ni = 1\ni = 2\n");
/// # Ok::<(), console_demo::error::DemoError>(())
/// ```
#[derive(Debug)]
pub struct DemoLoop<B: ConsoleBackend, U: Update> {
    backend: B,
    update: U,
    state: LoopState,
    /// Passes run since initialization, spinning ones included
    iterations: u64,
}

impl<B: ConsoleBackend, U: Update> DemoLoop<B, U> {
    /// Creates an uninitialized loop
    pub fn new(backend: B, update: U) -> Self {
        Self {
            backend,
            update,
            state: LoopState::Uninitialized,
            iterations: 0,
        }
    }

    /// Runs console setup: console init, debug log init, debug routing on
    ///
    /// Must succeed before any pass can run. A failed setup leaves the loop
    /// uninitialized.
    pub fn initialize(&mut self) -> DemoResult<()> {
        if self.state.is_initialized() {
            return Err(DemoError::AlreadyInitialized);
        }
        self.update.validate()?;

        for step in SETUP_SEQUENCE {
            log::debug!("{}: {:?}", B::NAME, step);
            let result = match step {
                SetupStep::ConsoleInit => self.backend.console_init(),
                SetupStep::DebugInitUsbLog => self.backend.debug_init_usblog(),
                SetupStep::SetDebug(enabled) => self.backend.console_set_debug(enabled),
            };
            if let Err(error) = result {
                log::warn!("{}: {:?} failed: {}", B::NAME, step, error);
                return Err(error.into());
            }
        }

        self.state = LoopState::Running;
        log::debug!("{} running on {} backend", U::NAME, B::NAME);
        Ok(())
    }

    /// Runs one pass
    pub fn step(&mut self) -> DemoResult<()> {
        match self.state {
            LoopState::Uninitialized => Err(DemoError::NotInitialized),
            LoopState::Running => {
                log::trace!("{} pass {}", U::NAME, self.iterations);
                self.backend.checkpoint();
                let flow = match self.update.update(&mut self.backend) {
                    Ok(flow) => flow,
                    Err(error) => return Err(self.abandon_pass(error)),
                };
                self.iterations = self.iterations.wrapping_add(1);

                if flow == Flow::Spin {
                    log::debug!("{} done after {} passes, spinning", U::NAME, self.iterations);
                    self.state = LoopState::Spinning;
                }
                Ok(())
            }
            LoopState::Spinning => {
                core::hint::spin_loop();
                self.iterations = self.iterations.wrapping_add(1);
                Ok(())
            }
        }
    }

    /// Classifies a failed pass and drops its partial output
    ///
    /// Only output failures are rolled back; a pass that printed its line
    /// and then failed (a strict counter at its limit) keeps the line.
    fn abandon_pass(&mut self, error: DemoError) -> DemoError {
        let error = if error == DemoError::FormatFailed && self.backend.overflowed() {
            DemoError::BufferOverflow
        } else {
            error
        };

        if matches!(error, DemoError::BufferOverflow | DemoError::FormatFailed) {
            log::warn!("{} pass {} failed: {}", U::NAME, self.iterations, error);
            self.backend.rollback();
        }
        error
    }

    /// Runs passes until `stop` says otherwise
    ///
    /// `stop` is checked before every pass. Returns the number of passes run
    /// by this call.
    pub fn run_until<S: StopSignal>(&mut self, mut stop: S) -> DemoResult<u64> {
        if !self.state.is_initialized() {
            return Err(DemoError::NotInitialized);
        }

        let mut passes = 0;
        while !stop.should_stop(passes) {
            self.step()?;
            passes += 1;
        }
        Ok(passes)
    }

    /// Runs passes forever
    ///
    /// Only returns if a pass fails, which an SDK-backed console never does.
    pub fn run_forever(&mut self) -> DemoResult<Infallible> {
        if !self.state.is_initialized() {
            return Err(DemoError::NotInitialized);
        }

        loop {
            self.step()?;
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Passes run since initialization
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The console backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The console backend, mutably
    ///
    /// Lets a host drain or clear a full capture buffer after a
    /// [`DemoError::BufferOverflow`] and keep running.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The update action
    pub fn update(&self) -> &U {
        &self.update
    }

    /// Splits the loop back into its backend and update
    pub fn into_parts(self) -> (B, U) {
        (self.backend, self.update)
    }
}
