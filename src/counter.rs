//! Loop-owned counter
//!
//! The single piece of mutable state in the counting demo. It is owned by
//! whoever drives the loop, never global, and only moves forward by one.

use core::fmt;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, DemoConfig, OverflowPolicy};
use crate::error::{DemoError, DemoResult};

/// Signed counter advanced by exactly one per loop pass
///
/// Behavior at `i32::MAX` comes from `C::OVERFLOW`.
///
/// # Example
/// ```rust
/// use console_demo::counter::Counter;
///
/// let mut counter = Counter::<console_demo::config::DefaultConfig>::new();
/// assert_eq!(counter.value(), 0);
/// counter.increment()?;
/// counter.increment()?;
/// assert_eq!(counter.value(), 2);
/// assert_eq!(counter.increments(), 2);
/// # Ok::<(), console_demo::error::DemoError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct Counter<C: DemoConfig = DefaultConfig> {
    /// Current value
    value: i32,

    /// Successful increments since creation
    increments: u64,

    #[cfg_attr(feature = "serde", serde(skip))]
    _phantom: PhantomData<C>,
}

impl<C: DemoConfig> Counter<C> {
    /// Creates a counter at `C::COUNTER_START`
    pub fn new() -> Self {
        Self::starting_at(C::COUNTER_START)
    }

    /// Creates a counter at an explicit value
    pub fn starting_at(value: i32) -> Self {
        Self {
            value,
            increments: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the current value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns how many increments have succeeded
    pub fn increments(&self) -> u64 {
        self.increments
    }

    /// Returns the overflow policy in effect
    pub fn policy(&self) -> OverflowPolicy {
        C::OVERFLOW
    }

    /// Returns true if the next increment passes `i32::MAX`
    pub fn at_limit(&self) -> bool {
        self.value == i32::MAX
    }

    /// Advances the counter by one
    ///
    /// # Returns
    /// `Err(DemoError::CounterOverflow)` only under [`OverflowPolicy::Error`]
    /// at `i32::MAX`; the value is left unchanged in that case.
    pub fn increment(&mut self) -> DemoResult<()> {
        self.value = match C::OVERFLOW {
            OverflowPolicy::Wrap => self.value.wrapping_add(1),
            OverflowPolicy::Saturate => self.value.saturating_add(1),
            OverflowPolicy::Error => match self.value.checked_add(1) {
                Some(next) => next,
                None => {
                    log::warn!("counter reached i32::MAX after {} increments", self.increments);
                    return Err(DemoError::CounterOverflow);
                }
            },
        };
        self.increments = self.increments.saturating_add(1);
        Ok(())
    }
}

impl<C: DemoConfig> Default for Counter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DemoConfig> Clone for Counter<C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            increments: self.increments,
            _phantom: PhantomData,
        }
    }
}

impl<C: DemoConfig> PartialEq for Counter<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.increments == other.increments
    }
}

impl<C: DemoConfig> Eq for Counter<C> {}

impl<C: DemoConfig> fmt::Debug for Counter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value)
            .field("increments", &self.increments)
            .field("policy", &C::OVERFLOW)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::{NearOverflowConfig, SaturatingCounterConfig, StrictCounterConfig};

    #[test]
    fn test_new_counter() {
        let counter = Counter::<DefaultConfig>::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.increments(), 0);
        assert_eq!(counter.policy(), OverflowPolicy::Wrap);
        assert!(!counter.at_limit());
    }

    #[test]
    fn test_increment() {
        let mut counter = Counter::<DefaultConfig>::new();

        for expected in 1..=10 {
            assert!(counter.increment().is_ok());
            assert_eq!(counter.value(), expected);
        }
        assert_eq!(counter.increments(), 10);
    }

    #[test]
    fn test_start_from_config() {
        let counter = Counter::<NearOverflowConfig>::new();
        assert_eq!(counter.value(), i32::MAX - 4);
    }

    #[test]
    fn test_wrap_policy() {
        let mut counter = Counter::<DefaultConfig>::starting_at(i32::MAX);
        assert!(counter.at_limit());

        assert!(counter.increment().is_ok());
        assert_eq!(counter.value(), i32::MIN);
        assert_eq!(counter.increments(), 1);
    }

    #[test]
    fn test_saturate_policy() {
        let mut counter = Counter::<SaturatingCounterConfig>::starting_at(i32::MAX - 1);

        assert!(counter.increment().is_ok());
        assert_eq!(counter.value(), i32::MAX);

        assert!(counter.increment().is_ok());
        assert_eq!(counter.value(), i32::MAX);
        assert_eq!(counter.increments(), 2);
    }

    #[test]
    fn test_error_policy() {
        let mut counter = Counter::<StrictCounterConfig>::starting_at(i32::MAX - 1);

        assert!(counter.increment().is_ok());
        assert_eq!(counter.value(), i32::MAX);

        // This should fail (overflow) and leave the value alone
        assert_eq!(counter.increment(), Err(DemoError::CounterOverflow));
        assert_eq!(counter.value(), i32::MAX);
        assert_eq!(counter.increments(), 1);
    }

    #[test]
    fn test_clone_and_eq() {
        let mut counter = Counter::<DefaultConfig>::new();
        counter.increment().unwrap();

        let copy = counter.clone();
        assert_eq!(copy, counter);

        counter.increment().unwrap();
        assert_ne!(copy, counter);
    }
}
