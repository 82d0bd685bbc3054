//! Static value variant: `value = %X` forever

use core::fmt;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, DemoConfig};
use crate::error::DemoResult;
use crate::update::{Flow, Update};

/// Prints `C::STATIC_VALUE` in upper-case hex on every pass
///
/// Negative values print as their two's-complement bits, the way `%X`
/// does on a 32-bit `int`.
///
/// # Example
/// ```rust
/// use console_demo::config::DefaultConfig;
/// use console_demo::console::BufferConsole;
/// use console_demo::update::{StaticValue, Update};
///
/// let mut out = BufferConsole::<32>::new();
/// StaticValue::<DefaultConfig>::new().update(&mut out)?;
/// assert_eq!(out.as_str(), "value = 1234\n");
/// # Ok::<(), console_demo::error::DemoError>(())
/// ```
pub struct StaticValue<C: DemoConfig = DefaultConfig> {
    _phantom: PhantomData<C>,
}

impl<C: DemoConfig> StaticValue<C> {
    /// Creates the update
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// The value this update prints
    pub const fn value(&self) -> i32 {
        C::STATIC_VALUE
    }
}

impl<C: DemoConfig> Default for StaticValue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DemoConfig> fmt::Debug for StaticValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticValue")
            .field("value", &C::STATIC_VALUE)
            .finish()
    }
}

impl<C: DemoConfig> Update for StaticValue<C> {
    const NAME: &'static str = "static-value";

    fn update<W: fmt::Write>(&mut self, out: &mut W) -> DemoResult<Flow> {
        writeln!(out, "value = {:X}", C::STATIC_VALUE)?;
        Ok(Flow::Continue)
    }

    fn validate(&self) -> DemoResult<()> {
        C::check()
    }
}
