//! Host console backed by the process's standard output

use core::fmt;
use std::io::{self, Write};

use crate::console::ConsoleBackend;
use crate::error::BackendError;

/// Backend that writes to stdout, flushing at every line end
///
/// Flushing per line matters for the one-shot demo: it prints two lines and
/// then spins, so buffered text would otherwise never appear when stdout
/// is a pipe.
#[derive(Debug)]
pub struct StdoutConsole {
    out: io::Stdout,
    console_ready: bool,
    debug_enabled: bool,
}

impl StdoutConsole {
    /// Creates a console over the process's stdout
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            console_ready: false,
            debug_enabled: false,
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for StdoutConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = self.out.lock();
        out.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        if s.contains('\n') {
            out.flush().map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

impl ConsoleBackend for StdoutConsole {
    const NAME: &'static str = "stdout";

    fn console_init(&mut self) -> Result<(), BackendError> {
        self.console_ready = true;
        Ok(())
    }

    fn debug_init_usblog(&mut self) -> Result<(), BackendError> {
        // The host has no separate debug channel; stdout is both
        Ok(())
    }

    fn console_set_debug(&mut self, enabled: bool) -> Result<(), BackendError> {
        if enabled && !self.console_ready {
            return Err(BackendError::OutOfOrder);
        }
        self.debug_enabled = enabled;
        Ok(())
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}
