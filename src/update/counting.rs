//! Counting variant: `i = %d`, then add one

use core::fmt;

use crate::config::{DefaultConfig, DemoConfig};
use crate::counter::Counter;
use crate::error::DemoResult;
use crate::update::{Flow, Update};

/// Prints the counter in decimal, then increments it
///
/// The counter belongs to this update; nothing else can move it.
pub struct CountingValue<C: DemoConfig = DefaultConfig> {
    counter: Counter<C>,
}

impl<C: DemoConfig> CountingValue<C> {
    /// Creates the update with a counter at `C::COUNTER_START`
    pub fn new() -> Self {
        Self {
            counter: Counter::new(),
        }
    }

    /// Creates the update around an existing counter
    pub fn with_counter(counter: Counter<C>) -> Self {
        Self { counter }
    }

    /// The counter, as of the end of the last pass
    pub fn counter(&self) -> &Counter<C> {
        &self.counter
    }

    /// Consumes the update, returning its counter
    pub fn into_counter(self) -> Counter<C> {
        self.counter
    }
}

impl<C: DemoConfig> Default for CountingValue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DemoConfig> fmt::Debug for CountingValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingValue")
            .field("counter", &self.counter)
            .finish()
    }
}

impl<C: DemoConfig> Update for CountingValue<C> {
    const NAME: &'static str = "counting-value";

    fn update<W: fmt::Write>(&mut self, out: &mut W) -> DemoResult<Flow> {
        writeln!(out, "i = {}", self.counter.value())?;
        self.counter.increment()?;
        Ok(Flow::Continue)
    }

    fn validate(&self) -> DemoResult<()> {
        C::check()
    }
}
