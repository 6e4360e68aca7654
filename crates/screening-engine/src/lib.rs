pub mod evaluate;
pub mod report;
pub mod standards;

pub use screening_types::{
    AgeGroup, Compliance, ComplianceResult, Gender, ScreeningReport, Standard,
};

/// ScreeningEngine entry point
pub struct ScreeningEngine;

impl ScreeningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify a subject against the weight-for-height table
    pub fn evaluate(&self, gender: Gender, age: i32, height: i32, weight: i32) -> Compliance {
        evaluate::evaluate(gender, age, height, weight)
    }

    /// Classify and wrap the outcome in a timestamped, serializable record
    pub fn screen(&self, gender: Gender, age: i32, height: i32, weight: i32) -> ScreeningReport {
        let outcome = evaluate::evaluate(gender, age, height, weight);
        tracing::debug!(
            gender = gender.name(),
            age,
            height,
            weight,
            ?outcome,
            "weight screening evaluated"
        );

        ScreeningReport {
            gender,
            age,
            height,
            weight,
            outcome,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_runs_reference_scenarios() {
        let engine = ScreeningEngine::new();

        let cases = [
            (96, Compliance::Under(ComplianceResult {
                standard: Standard { min: 97, max: 131 },
                actual: 96,
                delta: 1,
            })),
            (97, Compliance::Compliant(ComplianceResult {
                standard: Standard { min: 97, max: 131 },
                actual: 97,
                delta: 0,
            })),
            (131, Compliance::Compliant(ComplianceResult {
                standard: Standard { min: 97, max: 131 },
                actual: 131,
                delta: 0,
            })),
            (132, Compliance::Over(ComplianceResult {
                standard: Standard { min: 97, max: 131 },
                actual: 132,
                delta: 1,
            })),
        ];
        for (weight, expected) in cases {
            assert_eq!(engine.evaluate(Gender::Female, 30, 60, weight), expected);
        }

        assert_eq!(
            engine.evaluate(Gender::Female, 30, 57, 120),
            Compliance::HeightNotWithinBounds
        );
        assert_eq!(
            engine.evaluate(Gender::Female, 16, 60, 120),
            Compliance::DoesNotMeetMinimumAge
        );
        assert_eq!(
            engine.evaluate(Gender::Male, 25, 58, 120),
            Compliance::NoStandardAvailable
        );
    }

    #[test]
    fn test_screen_echoes_subject_and_outcome() {
        let engine = ScreeningEngine::default();
        let report = engine.screen(Gender::Male, 22, 70, 170);

        assert_eq!(report.gender, Gender::Male);
        assert_eq!(report.age, 22);
        assert_eq!(report.height, 70);
        assert_eq!(report.weight, 170);
        assert!(report.outcome.is_within_standard());
        assert!(report.checked_at > 0);
    }

    #[test]
    fn test_screen_report_serializes() {
        let engine = ScreeningEngine::new();
        let report = engine.screen(Gender::Female, 45, 65, 160);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["height"], 65);
        // Female, 40+, height 65 -> (114, 156); 160 is 4 lb over.
        assert_eq!(json["outcome"]["Over"]["delta"], 4);
    }
}
