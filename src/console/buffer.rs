//! Fixed-size in-memory console
//!
//! Captures everything the loop does (setup calls and output text) in a
//! static buffer, with no allocation. Used for tests and for targets that
//! read the log back out of RAM.

use core::fmt;

use crate::console::{ConsoleBackend, SetupStep};
use crate::error::BackendError;

/// Maximum number of setup calls a [`BufferConsole`] records
pub const MAX_SETUP_STEPS: usize = 8;

/// In-memory console backend with a fixed capacity in bytes
///
/// # Memory Usage
/// - `CAPACITY` bytes of text plus a small fixed header
/// - No heap; a `write_str` that does not fit is refused, and the loop rolls
///   back whatever the failed pass already wrote, so no partial line is kept
///
/// # Example
/// ```rust
/// use console_demo::console::{BufferConsole, ConsoleBackend};
/// use core::fmt::Write;
///
/// let mut console = BufferConsole::<64>::new();
/// console.console_init().unwrap();
/// console.debug_init_usblog().unwrap();
/// console.console_set_debug(true).unwrap();
///
/// writeln!(console, "value = {:X}", 0x1234).unwrap();
/// assert_eq!(console.as_str(), "value = 1234\n");
/// ```
#[derive(Debug, Clone)]
pub struct BufferConsole<const CAPACITY: usize = 1024> {
    buffer: [u8; CAPACITY],
    len: usize,
    /// Length at the last checkpoint
    mark: usize,

    steps: [SetupStep; MAX_SETUP_STEPS],
    steps_len: usize,

    console_ready: bool,
    usblog_ready: bool,
    debug_enabled: bool,

    /// Writes that arrived before debug routing was enabled
    early_writes: u32,
    overflowed: bool,

    /// Setup call that should fail, and how
    fail_on: Option<(SetupStep, BackendError)>,
}

impl<const CAPACITY: usize> BufferConsole<CAPACITY> {
    /// Creates an empty, uninitialized console
    pub const fn new() -> Self {
        Self {
            buffer: [0; CAPACITY],
            len: 0,
            mark: 0,
            steps: [SetupStep::ConsoleInit; MAX_SETUP_STEPS],
            steps_len: 0,
            console_ready: false,
            usblog_ready: false,
            debug_enabled: false,
            early_writes: 0,
            overflowed: false,
            fail_on: None,
        }
    }

    /// Creates a console whose `step` setup call fails with `error`
    pub const fn failing_at(step: SetupStep, error: BackendError) -> Self {
        let mut console = Self::new();
        console.fail_on = Some((step, error));
        console
    }

    /// Returns the captured text
    pub fn as_str(&self) -> &str {
        // Only whole &str values are ever appended
        core::str::from_utf8(&self.buffer[..self.len]).unwrap_or_default()
    }

    /// Returns the captured bytes
    pub fn output(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Iterates over the captured lines, without terminators
    pub fn lines(&self) -> core::str::Lines<'_> {
        self.as_str().lines()
    }

    /// Returns the number of captured lines
    pub fn line_count(&self) -> usize {
        self.output().iter().filter(|&&byte| byte == b'\n').count()
    }

    /// Returns the setup calls that succeeded, in call order
    pub fn setup_steps(&self) -> &[SetupStep] {
        &self.steps[..self.steps_len]
    }

    /// Returns how many writes arrived before debug routing was enabled
    pub fn early_writes(&self) -> u32 {
        self.early_writes
    }

    /// Returns the number of bytes captured
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the remaining space in bytes
    pub fn remaining(&self) -> usize {
        CAPACITY - self.len
    }

    /// Returns the total capacity in bytes
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Drops captured text and clears the overflow flag; setup state is kept
    pub fn clear(&mut self) {
        self.len = 0;
        self.mark = 0;
        self.overflowed = false;
    }

    fn record(&mut self, step: SetupStep) -> Result<(), BackendError> {
        if let Some((failing, error)) = self.fail_on {
            if failing == step {
                return Err(error);
            }
        }
        if self.steps_len >= MAX_SETUP_STEPS {
            return Err(BackendError::SetupLogFull);
        }
        self.steps[self.steps_len] = step;
        self.steps_len += 1;
        Ok(())
    }
}

impl<const CAPACITY: usize> Default for BufferConsole<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> fmt::Write for BufferConsole<CAPACITY> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.debug_enabled {
            self.early_writes = self.early_writes.saturating_add(1);
        }

        let bytes = s.as_bytes();
        if bytes.len() > self.remaining() {
            self.overflowed = true;
            return Err(fmt::Error);
        }

        self.buffer[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

impl<const CAPACITY: usize> ConsoleBackend for BufferConsole<CAPACITY> {
    const NAME: &'static str = "buffer";

    fn console_init(&mut self) -> Result<(), BackendError> {
        self.record(SetupStep::ConsoleInit)?;
        self.console_ready = true;
        Ok(())
    }

    fn debug_init_usblog(&mut self) -> Result<(), BackendError> {
        self.record(SetupStep::DebugInitUsbLog)?;
        self.usblog_ready = true;
        Ok(())
    }

    fn console_set_debug(&mut self, enabled: bool) -> Result<(), BackendError> {
        // Routing needs both ends up
        if enabled && !(self.console_ready && self.usblog_ready) {
            return Err(BackendError::OutOfOrder);
        }
        self.record(SetupStep::SetDebug(enabled))?;
        self.debug_enabled = enabled;
        Ok(())
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    fn overflowed(&self) -> bool {
        self.overflowed
    }

    fn checkpoint(&mut self) {
        self.mark = self.len;
    }

    fn rollback(&mut self) {
        self.len = self.mark.min(self.len);
    }
}
