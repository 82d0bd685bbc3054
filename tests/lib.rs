//! Common utilities and shared code for demo loop tests
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Common generators for loop runs and counter starts
//! - Helpers for running a bounded demo and reading its output back

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use console_demo::prelude::*;
use proptest::prelude::*;

/// Capture size used by bounded runs; fits `MAX_PASSES` of the longest line
pub const CAPTURE_BYTES: usize = 8 * 1024;

/// Upper bound on passes per generated run
pub const MAX_PASSES: u64 = 300;

/// Console used by every bounded run
pub type Capture = BufferConsole<CAPTURE_BYTES>;

/// Standard proptest configuration for loop property tests
pub fn demo_config() -> ProptestConfig {
    ProptestConfig {
        cases: 32,
        max_shrink_iters: 100,
        timeout: 2000,
        ..ProptestConfig::default()
    }
}

/// Generate pass counts for bounded runs
pub fn passes_strategy() -> impl Strategy<Value = u64> {
    1u64..MAX_PASSES
}

/// Generate counter start values, biased toward the overflow edge
pub fn counter_start_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        -1000i32..1000,
        (i32::MAX - 50)..=i32::MAX,
        any::<i32>(),
    ]
}

/// Initialize a loop over a fresh capture and run it for `passes` passes
pub fn run_bounded<U: Update>(update: U, passes: u64) -> DemoLoop<Capture, U> {
    let mut demo = DemoLoop::new(Capture::new(), update);
    demo.initialize().expect("setup on a buffer console succeeds");
    let ran = demo
        .run_until(IterationLimit(passes))
        .expect("bounded run fits in the capture");
    assert_eq!(ran, passes);
    demo
}

/// Parse an `i = N` line
pub fn parse_counting_line(line: &str) -> Option<i32> {
    line.strip_prefix("i = ")?.parse().ok()
}

/// Parse a `value = HEX` line
pub fn parse_value_line(line: &str) -> Option<u32> {
    u32::from_str_radix(line.strip_prefix("value = ")?, 16).ok()
}
