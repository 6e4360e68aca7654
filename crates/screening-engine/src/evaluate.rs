//! Compliance classification
//!
//! The single decision procedure: input tuple -> row lookup -> column
//! selection -> sentinel check -> range check. Total over the integer
//! domain; invalid inputs classify, they never error.

use screening_types::{AgeGroup, Compliance, ComplianceResult, Gender, Standard};

use crate::standards::{self, NO_STANDARD};

/// Classify a subject's weight against the screening table.
///
/// The height-bounds outcome takes precedence over the age outcome, so an
/// out-of-range height reports `HeightNotWithinBounds` even when the age is
/// also disqualifying. Both standard bounds are inclusive.
pub fn evaluate(gender: Gender, age: i32, height: i32, weight: i32) -> Compliance {
    // Height check first; the spec orders the error-like outcomes.
    let row = match standards::row_for(height) {
        Some(row) => row,
        None => return Compliance::HeightNotWithinBounds,
    };

    let group = match AgeGroup::from_age(age) {
        Some(group) => group,
        None => return Compliance::DoesNotMeetMinimumAge,
    };

    let min = row.min_weight;
    let max = standards::max_for(row, gender, group);
    if min == NO_STANDARD || max == NO_STANDARD {
        return Compliance::NoStandardAvailable;
    }

    let standard = Standard { min, max };
    if weight < min {
        // Saturating: the delta stays a positive magnitude even at the
        // integer extremes, so no input can panic the classifier.
        Compliance::Under(ComplianceResult {
            standard,
            actual: weight,
            delta: min.saturating_sub(weight),
        })
    } else if weight > max {
        Compliance::Over(ComplianceResult {
            standard,
            actual: weight,
            delta: weight.saturating_sub(max),
        })
    } else {
        Compliance::Compliant(ComplianceResult {
            standard,
            actual: weight,
            delta: 0,
        })
    }
}
