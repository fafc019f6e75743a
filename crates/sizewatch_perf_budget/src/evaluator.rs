use log::trace;

use crate::types::{SizeKind, Verdict};

/// Compare a measured value against its budget. Passing is non-strict: a
/// value exactly at the budget is acceptable. Percent-of-budget is defined as
/// 0 for a zero budget to avoid the degenerate division.
pub fn evaluate(label: impl Into<String>, actual: u64, budget: u64, kind: SizeKind) -> Verdict {
    let label = label.into();
    let passed = actual <= budget;
    let percent_used = if budget == 0 { 0.0 } else { actual as f64 / budget as f64 * 100.0 };

    trace!(
        "Evaluated '{}': {} / {} bytes ({}), {:.1}% used, passed={}",
        label, actual, budget, kind.label(), percent_used, passed
    );

    Verdict { label, actual, budget, percent_used, passed, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_budget_passes() {
        let v = evaluate("Vendor chunk", 140_000, 153_600, SizeKind::Gzipped);
        assert!(v.passed);
        assert!((v.percent_used - 91.1).abs() < 0.05, "got {:.3}%", v.percent_used);
    }

    #[test]
    fn test_over_budget_fails() {
        let v = evaluate("Vendor chunk", 160_000, 153_600, SizeKind::Gzipped);
        assert!(!v.passed);
        assert!((v.percent_used - 104.2).abs() < 0.05, "got {:.3}%", v.percent_used);
    }

    #[test]
    fn test_exactly_at_budget_passes() {
        let v = evaluate("Total build size", 256_000, 256_000, SizeKind::Raw);
        assert!(v.passed);
        assert_eq!(v.percent_used, 100.0);
    }

    #[test]
    fn test_zero_budget_defines_percentage_as_zero() {
        let v = evaluate("chunk", 5_000, 0, SizeKind::Gzipped);
        assert!(!v.passed);
        assert_eq!(v.percent_used, 0.0);

        let v = evaluate("chunk", 0, 0, SizeKind::Gzipped);
        assert!(v.passed);
        assert_eq!(v.percent_used, 0.0);
    }

    #[test]
    fn test_percentage_is_monotonic_in_actual() {
        let budget = 12_288;
        let mut last = -1.0;
        for actual in [0, 1, 100, 6_144, 12_288, 20_000] {
            let v = evaluate("chunk", actual, budget, SizeKind::Gzipped);
            assert!(v.percent_used >= last);
            last = v.percent_used;
        }
    }
}
