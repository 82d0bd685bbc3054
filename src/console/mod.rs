//! Console backend seam
//!
//! The demo never talks to hardware directly. Everything the SDK provides
//! (console bring-up, the debug/USB log channel, routing that channel to the
//! console, and formatted text output) sits behind [`ConsoleBackend`], so the
//! loop runs the same against real hardware, a host terminal or a test buffer.

pub mod buffer;
pub mod null;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod stdout;

use core::fmt;

use crate::error::BackendError;

// Re-export main types
pub use buffer::BufferConsole;
pub use null::NullConsole;
#[cfg(feature = "std")]
pub use stdout::StdoutConsole;

/// One setup call made against a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// `console_init()`
    ConsoleInit,
    /// `debug_init_usblog()`
    DebugInitUsbLog,
    /// `console_set_debug(enabled)`
    SetDebug(bool),
}

/// Setup calls in the order the loop issues them
pub const SETUP_SEQUENCE: [SetupStep; 3] = [
    SetupStep::ConsoleInit,
    SetupStep::DebugInitUsbLog,
    SetupStep::SetDebug(true),
];

/// Console/debug output capability supplied by the hosting environment
///
/// Text goes out through [`fmt::Write`]; writes are synchronous and return
/// once the text has been handed to the backend.
pub trait ConsoleBackend: fmt::Write {
    /// Backend name, used in log messages
    const NAME: &'static str;

    /// Brings up the console display
    fn console_init(&mut self) -> Result<(), BackendError>;

    /// Opens the secondary debug/USB log channel
    fn debug_init_usblog(&mut self) -> Result<(), BackendError>;

    /// Routes (or stops routing) debug output to the console
    fn console_set_debug(&mut self, enabled: bool) -> Result<(), BackendError>;

    /// Returns true once debug output is routed to the console
    fn is_debug_enabled(&self) -> bool;

    /// Returns true if a write was refused for lack of space
    fn overflowed(&self) -> bool {
        false
    }

    /// Marks the start of a pass's output
    fn checkpoint(&mut self) {}

    /// Drops output written since the last [`checkpoint`](Self::checkpoint)
    ///
    /// Backends that cannot take text back (a live display, stdout) leave
    /// this as a no-op.
    fn rollback(&mut self) {}
}

impl<B: ConsoleBackend + ?Sized> ConsoleBackend for &mut B {
    const NAME: &'static str = B::NAME;

    fn console_init(&mut self) -> Result<(), BackendError> {
        (**self).console_init()
    }

    fn debug_init_usblog(&mut self) -> Result<(), BackendError> {
        (**self).debug_init_usblog()
    }

    fn console_set_debug(&mut self, enabled: bool) -> Result<(), BackendError> {
        (**self).console_set_debug(enabled)
    }

    fn is_debug_enabled(&self) -> bool {
        (**self).is_debug_enabled()
    }

    fn overflowed(&self) -> bool {
        (**self).overflowed()
    }

    fn checkpoint(&mut self) {
        (**self).checkpoint()
    }

    fn rollback(&mut self) {
        (**self).rollback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup<B: ConsoleBackend>(backend: &mut B) -> Result<(), BackendError> {
        backend.console_init()?;
        backend.debug_init_usblog()?;
        backend.console_set_debug(true)
    }

    #[test]
    fn test_setup_through_reference() {
        let mut console = BufferConsole::<64>::new();
        assert!(setup(&mut &mut console).is_ok());
        assert!(console.is_debug_enabled());
        assert_eq!(console.setup_steps(), &SETUP_SEQUENCE);
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(BufferConsole::<64>::NAME, "buffer");
        assert_eq!(NullConsole::NAME, "null");
        assert_eq!(<&mut NullConsole as ConsoleBackend>::NAME, "null");
    }
}
