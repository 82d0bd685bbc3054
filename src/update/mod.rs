//! Per-pass update actions
//!
//! Each demo variant is an [`Update`]: the action the loop performs once per
//! pass. An update may ask the loop to stop calling it and spin silently
//! from then on.

pub mod counting;
pub mod one_shot;
pub mod static_value;

use core::fmt;

use crate::error::DemoResult;

// Re-export main types
pub use counting::CountingValue;
pub use one_shot::OneShot;
pub use static_value::StaticValue;

/// What the loop should do after an update returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Call the update again on the next pass
    Continue,
    /// Never call the update again; spin with no output
    Spin,
}

/// One pass of a demo loop
pub trait Update {
    /// Variant name, used in log messages
    const NAME: &'static str;

    /// Runs one pass, writing any output to `out`
    fn update<W: fmt::Write>(&mut self, out: &mut W) -> DemoResult<Flow>;

    /// Checks the update's configuration before the loop starts
    fn validate(&self) -> DemoResult<()> {
        Ok(())
    }
}

impl<U: Update + ?Sized> Update for &mut U {
    const NAME: &'static str = U::NAME;

    fn update<W: fmt::Write>(&mut self, out: &mut W) -> DemoResult<Flow> {
        (**self).update(out)
    }

    fn validate(&self) -> DemoResult<()> {
        (**self).validate()
    }
}
