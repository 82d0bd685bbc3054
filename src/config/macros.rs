//! Demo configuration macros
//!
//! This module provides the `define_demo_config!` macro for easy creation
//! of custom demo configurations.

/// Macro to define a custom demo configuration
///
/// Creates a unit struct implementing [`DemoConfig`](crate::config::DemoConfig).
/// Only `static_value` is required; everything else falls back to the
/// [`DefaultConfig`](crate::config::DefaultConfig) values.
///
/// # Example
///
/// ```rust
/// use console_demo::config::{DemoConfig, OverflowPolicy, define_demo_config};
///
/// define_demo_config! {
///     name: MyDemoConfig,
///     static_value: 0xBEEF,
///     counter_start: 100,
///     overflow: OverflowPolicy::Saturate,
/// }
///
/// assert_eq!(MyDemoConfig::GREETING, "Hello world!");
/// assert!(MyDemoConfig::validate().is_ok());
/// ```
#[macro_export]
macro_rules! define_demo_config {
    (
        name: $name:ident,
        static_value: $value:expr
        $(, counter_start: $start:expr)?
        $(, overflow: $overflow:expr)?
        $(, one_shot_line: $one_shot:expr)?
        $(, greeting: $greeting:expr)?
        $(,)?
    ) => {
        /// Custom demo configuration
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::config::DemoConfig for $name {
            const STATIC_VALUE: i32 = $value;

            // Optional parameters with defaults
            const COUNTER_START: i32 = $crate::define_demo_config!(@default $($start)?, 0);
            const OVERFLOW: $crate::config::OverflowPolicy = $crate::define_demo_config!(
                @default $($overflow)?, $crate::config::OverflowPolicy::Wrap
            );
            const ONE_SHOT_LINE: &'static str = $crate::define_demo_config!(@default $($one_shot)?, "new");
            const GREETING: &'static str = $crate::define_demo_config!(@default $($greeting)?, "Hello world!");
        }
    };

    // Helper macro for default values
    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

// Re-export the macro for convenience
pub use define_demo_config;
