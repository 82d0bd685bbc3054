//! Property-based tests for the loop counter
//!
//! - Monotonicity: each increment adds exactly one until the limit
//! - Overflow: wrap, saturate and error policies behave as configured

#![allow(special_module_name)]

use console_demo::configs::{SaturatingCounterConfig, StrictCounterConfig};
use console_demo::prelude::*;
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

mod lib;
use lib::*;

proptest! {
    #![proptest_config(demo_config())]

    /// Under the default policy the counter always matches wrapping addition
    #[test]
    fn wrap_matches_wrapping_add(start in counter_start_strategy(), steps in 0u32..200) {
        let mut counter = Counter::<DefaultConfig>::starting_at(start);
        for _ in 0..steps {
            prop_assert!(counter.increment().is_ok());
        }
        prop_assert_eq!(counter.value(), start.wrapping_add(steps as i32));
        prop_assert_eq!(counter.increments(), steps as u64);
    }

    /// Saturation never moves past i32::MAX and never goes backwards
    #[test]
    fn saturate_is_monotonic(start in counter_start_strategy(), steps in 0u32..200) {
        let mut counter = Counter::<SaturatingCounterConfig>::starting_at(start);
        let mut previous = counter.value();
        for _ in 0..steps {
            prop_assert!(counter.increment().is_ok());
            prop_assert!(counter.value() >= previous);
            previous = counter.value();
        }
        prop_assert_eq!(counter.value(), start.saturating_add(steps as i32));
    }

    /// The strict policy fails exactly at i32::MAX and keeps the value
    #[test]
    fn strict_fails_only_at_limit(start in counter_start_strategy(), steps in 0u32..200) {
        let mut counter = Counter::<StrictCounterConfig>::starting_at(start);
        for _ in 0..steps {
            let before = counter.value();
            match counter.increment() {
                Ok(()) => prop_assert_eq!(counter.value(), before + 1),
                Err(error) => {
                    prop_assert_eq!(error, DemoError::CounterOverflow);
                    prop_assert_eq!(before, i32::MAX);
                    prop_assert_eq!(counter.value(), i32::MAX);
                }
            }
        }
    }
}

#[quickcheck]
fn increment_adds_one_below_limit(start: i32) -> bool {
    if start == i32::MAX {
        return true;
    }
    let mut counter = Counter::<StrictCounterConfig>::starting_at(start);
    counter.increment().is_ok() && counter.value() == start + 1
}

#[quickcheck]
fn clone_is_independent(start: i32, steps: u8) -> bool {
    let original = Counter::<DefaultConfig>::starting_at(start);
    let mut copy = original.clone();
    for _ in 0..steps {
        let _ = copy.increment();
    }
    original.value() == start && original.increments() == 0
}

#[test]
fn counting_loop_stops_on_strict_overflow() {
    let update = CountingValue::with_counter(Counter::<StrictCounterConfig>::starting_at(i32::MAX - 2));
    let mut demo = DemoLoop::new(Capture::new(), update);
    demo.initialize().unwrap();

    assert!(matches!(demo.run_forever(), Err(DemoError::CounterOverflow)));
    assert_eq!(
        demo.backend().lines().collect::<Vec<_>>(),
        vec!["i = 2147483645", "i = 2147483646", "i = 2147483647"]
    );
}
