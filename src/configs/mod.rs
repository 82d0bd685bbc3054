//! Configuration presets module
//!
//! Ready-made [`DemoConfig`](crate::config::DemoConfig) implementations for
//! the common ways of running the demos.

use crate::config::{OverflowPolicy, define_demo_config};

// Counter overflow presets
define_demo_config! {
    name: SaturatingCounterConfig,
    static_value: 0x1234,
    overflow: OverflowPolicy::Saturate,
}

define_demo_config! {
    name: StrictCounterConfig,
    static_value: 0x1234,
    overflow: OverflowPolicy::Error,
}

// Testing configurations
define_demo_config! {
    name: NearOverflowConfig,
    static_value: 0x1234,
    counter_start: i32::MAX - 4,
}

define_demo_config! {
    name: NegativeValueConfig,
    static_value: -0x1234,
    counter_start: -3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_presets_validate() {
        assert!(SaturatingCounterConfig::validate().is_ok());
        assert!(StrictCounterConfig::validate().is_ok());
        assert!(NearOverflowConfig::validate().is_ok());
        assert!(NegativeValueConfig::validate().is_ok());
    }

    #[test]
    fn test_preset_policies() {
        assert_eq!(SaturatingCounterConfig::OVERFLOW, OverflowPolicy::Saturate);
        assert_eq!(StrictCounterConfig::OVERFLOW, OverflowPolicy::Error);
        assert_eq!(NearOverflowConfig::OVERFLOW, OverflowPolicy::Wrap);
        assert_eq!(NearOverflowConfig::COUNTER_START, i32::MAX - 4);
    }
}
