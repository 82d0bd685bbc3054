//! Console backend error types
//!
//! Failures a [`ConsoleBackend`](crate::console::ConsoleBackend) may report
//! from its setup calls.

use core::fmt;

/// Errors reported by a console backend during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendError {
    /// Console display could not be brought up
    ConsoleUnavailable,
    /// Debug/USB log channel could not be opened
    DebugChannelUnavailable,
    /// A setup call arrived out of order
    OutOfOrder,
    /// Backend has no room left to record setup
    SetupLogFull,
}

impl BackendError {
    /// Returns true if retrying the same call may succeed
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ConsoleUnavailable | Self::DebugChannelUnavailable => true,
            Self::OutOfOrder | Self::SetupLogFull => false,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ConsoleUnavailable => "console subsystem unavailable",
            Self::DebugChannelUnavailable => "debug log channel unavailable",
            Self::OutOfOrder => "setup call out of order",
            Self::SetupLogFull => "setup log full",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(BackendError::ConsoleUnavailable.is_transient());
        assert!(BackendError::DebugChannelUnavailable.is_transient());
        assert!(!BackendError::OutOfOrder.is_transient());
        assert!(!BackendError::SetupLogFull.is_transient());
    }
}
