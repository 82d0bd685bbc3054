//! Console that discards output
//!
//! Like printing on hardware before a viewer is attached: every call
//! succeeds and nothing is shown. Byte and line counts are kept so the loop
//! can still be measured.

use core::fmt;

use crate::console::ConsoleBackend;
use crate::error::BackendError;

/// Backend that accepts and drops all output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullConsole {
    debug_enabled: bool,
    bytes: u64,
    lines: u64,
}

impl NullConsole {
    /// Creates a new null console
    pub const fn new() -> Self {
        Self {
            debug_enabled: false,
            bytes: 0,
            lines: 0,
        }
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Line terminators written so far
    pub fn lines_written(&self) -> u64 {
        self.lines
    }
}

impl fmt::Write for NullConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes = self.bytes.wrapping_add(s.len() as u64);
        self.lines = self
            .lines
            .wrapping_add(s.bytes().filter(|&byte| byte == b'\n').count() as u64);
        Ok(())
    }
}

impl ConsoleBackend for NullConsole {
    const NAME: &'static str = "null";

    fn console_init(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn debug_init_usblog(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    fn console_set_debug(&mut self, enabled: bool) -> Result<(), BackendError> {
        self.debug_enabled = enabled;
        Ok(())
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_counts_without_storing() {
        let mut console = NullConsole::new();
        writeln!(console, "value = {:X}", 0x1234).unwrap();
        writeln!(console, "value = {:X}", 0x1234).unwrap();

        assert_eq!(console.bytes_written(), 26);
        assert_eq!(console.lines_written(), 2);
    }

    #[test]
    fn test_setup_always_succeeds() {
        let mut console = NullConsole::new();
        assert!(console.console_init().is_ok());
        assert!(console.debug_init_usblog().is_ok());
        assert!(console.console_set_debug(true).is_ok());
        assert!(console.is_debug_enabled());
        assert!(!console.overflowed());
    }
}
