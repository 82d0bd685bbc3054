//! One-shot variant: two lines, then silence

use core::fmt;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, DemoConfig};
use crate::error::DemoResult;
use crate::update::{Flow, Update};

/// Prints `C::ONE_SHOT_LINE` and `C::GREETING` once, then asks to spin
pub struct OneShot<C: DemoConfig = DefaultConfig> {
    fired: bool,
    _phantom: PhantomData<C>,
}

impl<C: DemoConfig> OneShot<C> {
    /// Creates the update
    pub const fn new() -> Self {
        Self {
            fired: false,
            _phantom: PhantomData,
        }
    }

    /// Returns true once both lines have been written
    pub const fn has_fired(&self) -> bool {
        self.fired
    }

    fn announce<W: fmt::Write>(out: &mut W) -> fmt::Result {
        writeln!(out, "{}", C::ONE_SHOT_LINE)
    }
}

impl<C: DemoConfig> Default for OneShot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DemoConfig> fmt::Debug for OneShot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShot").field("fired", &self.fired).finish()
    }
}

impl<C: DemoConfig> Update for OneShot<C> {
    const NAME: &'static str = "one-shot";

    fn update<W: fmt::Write>(&mut self, out: &mut W) -> DemoResult<Flow> {
        if self.fired {
            return Ok(Flow::Spin);
        }

        Self::announce(out)?;
        writeln!(out, "{}", C::GREETING)?;
        self.fired = true;
        Ok(Flow::Spin)
    }

    fn validate(&self) -> DemoResult<()> {
        C::check()
    }
}
