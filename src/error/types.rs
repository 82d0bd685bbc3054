//! Core error types for console-demo
//!
//! This module defines the main error type returned by the demo loop.

use core::fmt;

use crate::error::BackendError;

/// Main error type for demo loop operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoError {
    // Lifecycle errors
    /// Output attempted before setup completed
    NotInitialized,
    /// Setup attempted a second time
    AlreadyInitialized,

    // Backend errors
    /// Console backend rejected a setup call
    Backend(BackendError),
    /// Output did not fit in the backend's buffer
    BufferOverflow,
    /// Formatting a line failed for a reason other than space
    FormatFailed,

    // Counter errors
    /// Counter reached its limit under [`OverflowPolicy::Error`](crate::config::OverflowPolicy::Error)
    CounterOverflow,

    // Configuration errors
    /// A compile-time configuration failed validation
    InvalidConfiguration,
}

impl DemoError {
    /// Returns true if the loop can keep running after this error
    ///
    /// A full capture buffer counts: clear it through
    /// `DemoLoop::backend_mut` and run again.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NotInitialized | Self::AlreadyInitialized | Self::BufferOverflow => true,
            Self::Backend(error) => error.is_transient(),
            Self::FormatFailed | Self::CounterOverflow | Self::InvalidConfiguration => false,
        }
    }

    /// Returns true if this error comes from calling the loop in the wrong state
    pub const fn is_misuse(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::AlreadyInitialized)
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::NotInitialized | Self::AlreadyInitialized => "Lifecycle",
            Self::Backend(_) | Self::BufferOverflow | Self::FormatFailed => "Backend",
            Self::CounterOverflow => "Counter",
            Self::InvalidConfiguration => "Config",
        }
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("console not initialized"),
            Self::AlreadyInitialized => f.write_str("console already initialized"),
            Self::Backend(error) => write!(f, "backend error: {error}"),
            Self::BufferOverflow => f.write_str("output buffer full"),
            Self::FormatFailed => f.write_str("line formatting failed"),
            Self::CounterOverflow => f.write_str("counter overflow"),
            Self::InvalidConfiguration => f.write_str("invalid configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(error) => Some(error),
            _ => None,
        }
    }
}

impl From<BackendError> for DemoError {
    fn from(error: BackendError) -> Self {
        Self::Backend(error)
    }
}

// fmt::Error carries no detail; the loop refines this to BufferOverflow when
// the backend reports it ran out of room.
impl From<fmt::Error> for DemoError {
    fn from(_error: fmt::Error) -> Self {
        Self::FormatFailed
    }
}

/// Result type for demo loop operations
pub type DemoResult<T> = Result<T, DemoError>;
