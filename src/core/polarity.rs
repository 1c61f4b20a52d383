//! Polarity summary over the flattened triangle

use crate::types::{Balance, PolarityDetail, PolaritySummary, Triangle};
use crate::{POLARITY_NEGATIVE, POLARITY_POSITIVE};

/// Classify every cell as positive, negative or neutral and tally a
/// balance verdict.
///
/// Membership is fixed: positive {C,D,F,G}, negative {A,B,E}, everything
/// else neutral.
pub fn summarize_polarity(t: &Triangle) -> PolaritySummary {
    let mut detail = PolarityDetail::default();

    for (label, digit) in t.flatten() {
        if POLARITY_POSITIVE.contains(&label) {
            detail.positive.push((label, digit));
        } else if POLARITY_NEGATIVE.contains(&label) {
            detail.negative.push((label, digit));
        } else {
            detail.neutral.push((label, digit));
        }
    }

    let (positive, negative, neutral) = (
        detail.positive.len(),
        detail.negative.len(),
        detail.neutral.len(),
    );

    let balance = if positive > negative {
        Balance::MostlyPositive
    } else if negative > positive {
        Balance::MostlyNegative
    } else {
        Balance::Neutral
    };

    PolaritySummary {
        positive,
        negative,
        neutral,
        balance,
        detail,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::triangle::triangle_from_dob;

    #[test]
    fn test_counts_cover_all_cells() {
        let t = triangle_from_dob("29-10-2001").unwrap();
        let pol = summarize_polarity(&t);
        assert_eq!(pol.positive + pol.negative + pol.neutral, 18);
        assert_eq!(pol.positive, 4);
        assert_eq!(pol.negative, 3);
        assert_eq!(pol.neutral, 11);
    }

    #[test]
    fn test_fixed_memberships_make_balance_positive() {
        // 4 positive vs 3 negative positions for any full triangle
        let t = triangle_from_dob("28-01-2005").unwrap();
        assert_eq!(summarize_polarity(&t).balance, Balance::MostlyPositive);
    }

    #[test]
    fn test_detail_carries_labels_and_digits() {
        let t = triangle_from_dob("29-10-2001").unwrap();
        let pol = summarize_polarity(&t);
        assert!(pol.detail.positive.contains(&('G', t.layer1.g)));
        assert!(pol.detail.negative.contains(&('A', t.inputs.a)));
        assert!(pol.detail.neutral.iter().any(|(l, _)| *l == 'P'));
    }

    #[test]
    fn test_balance_display_strings() {
        assert_eq!(Balance::MostlyPositive.to_string(), "Mostly positive");
        assert_eq!(Balance::MostlyNegative.to_string(), "Mostly negative");
        assert_eq!(Balance::Neutral.to_string(), "Neutral");
    }
}
