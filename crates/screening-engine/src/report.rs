//! Human-readable rendering of screening outcomes
//!
//! Presentation collaborator for CLI/log output. Deterministic: built only
//! from the variant's fields, same input always yields the same string.

use screening_types::Compliance;

/// Describe a classification for display
pub fn describe(outcome: &Compliance) -> String {
    match outcome {
        Compliance::Under(r) => format!(
            "Under standard by {} lb: {} lb is below the allowed {}-{} lb range.",
            r.delta, r.actual, r.standard.min, r.standard.max
        ),
        Compliance::Over(r) => format!(
            "Over standard by {} lb: {} lb exceeds the allowed {}-{} lb range.",
            r.delta, r.actual, r.standard.min, r.standard.max
        ),
        Compliance::Compliant(r) => format!(
            "Within standard (deviation {} lb): {} lb falls in the allowed {}-{} lb range.",
            r.delta, r.actual, r.standard.min, r.standard.max
        ),
        Compliance::DoesNotMeetMinimumAge => {
            "Subject does not meet the minimum screening age of 17 years.".to_string()
        }
        Compliance::HeightNotWithinBounds => {
            "Height falls outside the 58-80 inch range covered by the screening table.".to_string()
        }
        Compliance::NoStandardAvailable => {
            "No standard is published for this height, gender, and age group.".to_string()
        }
    }
}
