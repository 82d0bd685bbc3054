//! Compile-time configuration for the demo loop
//!
//! Every tunable of the demo is an associated constant, fixed at build time.
//! There is no runtime configuration surface.

pub mod macros;
pub mod settings;

// Re-export main types
pub use macros::define_demo_config;
pub use settings::{DefaultConfig, DemoConfig, OverflowPolicy};
