//! Maintainability and technical-debt estimates.

use super::QualityMetrics;

/// Maintainability index reported when no syntax tree was available.
pub const DEGRADED_MAINTAINABILITY: f64 = 50.0;
/// Debt ratio reported when no syntax tree was available.
pub const DEGRADED_DEBT_RATIO: f64 = 0.5;

/// Maintainability index on a 0-100 scale.
///
/// `171 - 5.2 * cc^0.23 - 0.23 * cc - 16.2 * loc^0.5`, rescaled by `100/171`
/// and clamped. An empty file scores 100.
pub fn maintainability_index(cyclomatic: u32, loc: usize) -> f64 {
    if loc == 0 {
        return 100.0;
    }
    let cc = f64::from(cyclomatic.max(1));
    let loc = loc as f64;
    let raw = 171.0 - 5.2 * cc.powf(0.23) - 0.23 * cc - 16.2 * loc.sqrt();
    (raw * 100.0 / 171.0).clamp(0.0, 100.0)
}

pub fn technical_debt_ratio(maintainability: f64) -> f64 {
    ((100.0 - maintainability) / 100.0).clamp(0.0, 1.0)
}

/// Quality estimates for a file that went through the syntax tree.
pub fn from_tree_metrics(cyclomatic: u32, loc: usize) -> QualityMetrics {
    let mi = maintainability_index(cyclomatic, loc);
    QualityMetrics {
        maintainability_index: mi,
        technical_debt_ratio: technical_debt_ratio(mi),
        duplication_estimate: 0.0,
        test_coverage_estimate: 0.0,
    }
}

pub fn degraded() -> QualityMetrics {
    QualityMetrics {
        maintainability_index: DEGRADED_MAINTAINABILITY,
        technical_debt_ratio: DEGRADED_DEBT_RATIO,
        duplication_estimate: 0.0,
        test_coverage_estimate: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_fully_maintainable() {
        assert_eq!(maintainability_index(1, 0), 100.0);
        assert_eq!(technical_debt_ratio(100.0), 0.0);
    }

    #[test]
    fn test_small_function() {
        // cc = 2, loc = 3
        let mi = maintainability_index(2, 3);
        assert!((mi - 79.75).abs() < 0.05, "mi = {}", mi);
        let debt = technical_debt_ratio(mi);
        assert!((debt - 0.2025).abs() < 0.001, "debt = {}", debt);
    }

    #[test]
    fn test_zero_complexity_is_treated_as_one() {
        assert_eq!(maintainability_index(0, 40), maintainability_index(1, 40));
    }

    #[test]
    fn test_clamped_to_zero_for_huge_files() {
        assert_eq!(maintainability_index(500, 200_000), 0.0);
        assert_eq!(technical_debt_ratio(0.0), 1.0);
    }

    #[test]
    fn test_monotonic_in_size() {
        let small = maintainability_index(5, 50);
        let large = maintainability_index(5, 500);
        assert!(small > large);
    }
}
