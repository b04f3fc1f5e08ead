//! Property tests for severity ordering and confidence classification.

use proptest::prelude::*;

use ontograph_core::impact::{ConfidenceLevel, Severity};

fn rank(level: ConfidenceLevel) -> u8 {
    match level {
        ConfidenceLevel::VeryLow => 0,
        ConfidenceLevel::Low => 1,
        ConfidenceLevel::Medium => 2,
        ConfidenceLevel::High => 3,
    }
}

proptest! {
    #[test]
    fn ripple_severity_never_increases_with_depth(a in 0_usize..64, b in 0_usize..64) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Severity::for_ripple_depth(near) >= Severity::for_ripple_depth(far));
    }

    #[test]
    fn step_down_is_monotone_and_saturates(index in 0_usize..4, steps in 0_usize..8) {
        let mut severity = Severity::ALL[index];
        for _ in 0..steps {
            let next = severity.step_down();
            prop_assert!(next <= severity);
            severity = next;
        }
        if steps >= index {
            prop_assert_eq!(severity, Severity::Low);
        }
    }

    #[test]
    fn confidence_level_is_monotone_in_score(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            rank(ConfidenceLevel::from_score(low)) <= rank(ConfidenceLevel::from_score(high))
        );
    }
}
