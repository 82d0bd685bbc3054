//! Demo configuration trait and the default implementation

use crate::error::{DemoError, DemoResult};

/// What the counter does when an increment would pass `i32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Two's-complement wrap to `i32::MIN`
    #[default]
    Wrap,
    /// Stay at `i32::MAX`
    Saturate,
    /// Refuse the increment with [`DemoError::CounterOverflow`]
    Error,
}

/// Demo configuration trait
///
/// Values here are what the demo programs print. Change them and rebuild;
/// nothing is read at runtime.
pub trait DemoConfig: Clone {
    /// Constant printed by the static-value variant (`value = %X`)
    const STATIC_VALUE: i32;

    /// First value printed by the counting variant
    const COUNTER_START: i32;

    /// Counter behavior at `i32::MAX`
    const OVERFLOW: OverflowPolicy;

    /// Line emitted once by the one-shot helper action
    const ONE_SHOT_LINE: &'static str;

    /// Greeting emitted once after the helper line
    const GREETING: &'static str;

    /// Validates that the configuration is consistent
    fn validate() -> Result<(), &'static str> {
        if Self::ONE_SHOT_LINE.is_empty() {
            return Err("ONE_SHOT_LINE must not be empty");
        }
        if Self::GREETING.is_empty() {
            return Err("GREETING must not be empty");
        }

        // Each of these is emitted as exactly one line
        if Self::ONE_SHOT_LINE.contains('\n') || Self::ONE_SHOT_LINE.contains('\r') {
            return Err("ONE_SHOT_LINE must be a single line");
        }
        if Self::GREETING.contains('\n') || Self::GREETING.contains('\r') {
            return Err("GREETING must be a single line");
        }

        Ok(())
    }

    /// Same as [`validate`](Self::validate), as a [`DemoResult`]
    fn check() -> DemoResult<()> {
        Self::validate().map_err(|reason| {
            log::warn!("invalid demo configuration: {}", reason);
            DemoError::InvalidConfiguration
        })
    }
}

/// Default configuration: the values the libdragon hello-world ships with
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl DemoConfig for DefaultConfig {
    const STATIC_VALUE: i32 = 0x1234;
    const COUNTER_START: i32 = 0;
    const OVERFLOW: OverflowPolicy = OverflowPolicy::Wrap;
    const ONE_SHOT_LINE: &'static str = "new";
    const GREETING: &'static str = "Hello world!";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        assert!(DefaultConfig::validate().is_ok());
        assert!(DefaultConfig::check().is_ok());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(DefaultConfig::STATIC_VALUE, 0x1234);
        assert_eq!(DefaultConfig::COUNTER_START, 0);
        assert_eq!(DefaultConfig::OVERFLOW, OverflowPolicy::Wrap);
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Wrap);
    }

    #[derive(Clone)]
    struct MultiLineGreeting;

    impl DemoConfig for MultiLineGreeting {
        const STATIC_VALUE: i32 = 0;
        const COUNTER_START: i32 = 0;
        const OVERFLOW: OverflowPolicy = OverflowPolicy::Wrap;
        const ONE_SHOT_LINE: &'static str = "new";
        const GREETING: &'static str = "Hello\nworld!";
    }

    #[test]
    fn test_multi_line_rejected() {
        assert!(MultiLineGreeting::validate().is_err());
        assert_eq!(
            MultiLineGreeting::check(),
            Err(DemoError::InvalidConfiguration)
        );
    }
}
