//! Proportional conversion of solid-angle coverage into integer sample
//! counts.

use ndarray::Array2;

use crate::coverage::Coverage;

/// Per-pixel sample counts: floor(budget x solid / max).
///
/// Truncation keeps any pixel from overshooting the budget granted to the
/// most prominent one. A zero maximum (fully masked detector) allocates
/// nothing rather than dividing by zero.
pub fn allocate(coverage: &Coverage, budget: u32) -> Array2<u32> {
    let max = coverage.max_reference;
    coverage.emission.map(|&solid| {
        if max > 0.0 {
            (budget as f32 * (solid / max)).floor() as u32
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn coverage_of(emission: Array2<f32>, max_reference: f32) -> Coverage {
        Coverage { emission, max_reference }
    }

    // Equal coverage everywhere: every pixel gets the full budget, with no
    // truncation loss.
    #[test]
    fn uniform_coverage_allocates_the_full_budget_everywhere() {
        let c = coverage_of(arr2(&[[0.01, 0.01], [0.01, 0.01]]), 0.01);
        assert_eq!(allocate(&c, 100), arr2(&[[100, 100], [100, 100]]));
    }

    #[test]
    fn allocation_is_proportional_and_truncated() {
        let c = coverage_of(arr2(&[[0.01, 0.005], [0.00999, 0.0]]), 0.01);
        let n = allocate(&c, 100);
        assert_eq!(n[[0, 0]], 100);
        assert_eq!(n[[0, 1]],  50);
        assert_eq!(n[[1, 0]],  99); // 99.9 rounds *down*
        assert_eq!(n[[1, 1]],   0);
    }

    #[test]
    fn zero_maximum_allocates_nothing() {
        let c = coverage_of(arr2(&[[0.0, 0.0], [0.0, 0.0]]), 0.0);
        assert_eq!(allocate(&c, 100), arr2(&[[0, 0], [0, 0]]));
    }

    #[test]
    fn zero_budget_allocates_nothing() {
        let c = coverage_of(arr2(&[[0.01, 0.002], [0.007, 0.0]]), 0.01);
        assert_eq!(allocate(&c, 0), arr2(&[[0, 0], [0, 0]]));
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coverage_below_the_maximum_never_exceeds_the_budget(
            budget in 0..1000u32,
            solid  in 0.0..0.01f32,
        ) {
            let c = coverage_of(arr2(&[[solid]]), 0.01);
            prop_assert!(allocate(&c, budget)[[0, 0]] <= budget);
        }
    }
}
