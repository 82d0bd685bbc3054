#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Console demo loops for embedded console SDKs**
//!
//! console-demo is a `no_std` Rust library modelling the smallest programs
//! an embedded console SDK ships with: bring the console and the debug/USB
//! log channel up once, then print a line on every pass of a loop that
//! never ends.
//!
//! ## Features
//!
//! - **Injected backend** - the SDK sits behind [`ConsoleBackend`], so the loop runs unchanged on hardware, a host terminal or a test buffer
//! - **Owned state** - the counting demo's counter belongs to the loop, no globals
//! - **No Dynamic Allocation** - fixed-size buffers only
//! - **Compile-time configuration** - printed values and overflow behavior are associated constants
//!
//! ## Feature Overview
//!
//! - `std` - `StdoutConsole` host backend and `std::error::Error` impls
//! - `serde` - Serde serialization for the counter (no_std compatible)
//!
//! ## Demo Variants
//!
//! | Update | Output per pass | After first pass |
//! |--------|-----------------|------------------|
//! | [`StaticValue`] | `value = 1234` | same line forever |
//! | [`CountingValue`] | `i = 0`, `i = 1`, ... | counter + 1 each pass |
//! | [`OneShot`] | `new`, `Hello world!` | silent spin |
//!
//! ## Quick Start
//!
//! ```rust
//! use console_demo::prelude::*;
//!
//! fn example() -> Result<(), DemoError> {
//!     let mut demo = DemoLoop::new(BufferConsole::<128>::new(), StaticValue::<DefaultConfig>::new());
//!     demo.initialize()?;
//!
//!     // Hardware would call run_forever(); bound the run here instead
//!     demo.run_until(IterationLimit(2))?;
//!     assert_eq!(demo.backend().as_str(), "value = 1234\nvalue = 1234\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! [`ConsoleBackend`]: crate::console::ConsoleBackend
//! [`StaticValue`]: crate::update::StaticValue
//! [`CountingValue`]: crate::update::CountingValue
//! [`OneShot`]: crate::update::OneShot

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(test, allow(unused_mut))]

#[cfg(feature = "std")]
extern crate std;

// Core infrastructure modules
pub mod config;
pub mod console;
pub mod error;

// Demo modules
pub mod counter;
pub mod runner;
pub mod update;

// Configuration presets
pub mod configs;

/// Prelude module of console-demo
///
/// Convenient re-exports for common console-demo types and traits
pub mod prelude {

    // Re-export configuration
    pub use crate::config::{DefaultConfig, DemoConfig, OverflowPolicy, define_demo_config};

    // Re-export error types
    pub use crate::error::{BackendError, DemoError, DemoResult};

    // Re-export backends
    pub use crate::console::{BufferConsole, ConsoleBackend, NullConsole, SetupStep};
    #[cfg(feature = "std")]
    pub use crate::console::StdoutConsole;

    // Re-export the loop
    pub use crate::counter::Counter;
    pub use crate::runner::{CancelFlag, DemoLoop, IterationLimit, LoopState, Never, StopSignal};
    pub use crate::update::{CountingValue, Flow, OneShot, StaticValue, Update};
}
