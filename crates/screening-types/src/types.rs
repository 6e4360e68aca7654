#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Get the printable gender name
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Regulatory age bands used to select a maximum-weight column.
///
/// The screening table publishes four maximums per gender, one per band.
/// Ages 16 and under have no band; screening does not apply to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AgeGroup {
    /// Ages 17-20
    Group1,
    /// Ages 21-27
    Group2,
    /// Ages 28-39
    Group3,
    /// Ages 40 and over
    Group4,
}

impl AgeGroup {
    /// Classify an age into its regulatory band. `None` for age <= 16
    /// (negative ages included).
    pub fn from_age(age: i32) -> Option<AgeGroup> {
        match age {
            i32::MIN..=16 => None,
            17..=20 => Some(AgeGroup::Group1),
            21..=27 => Some(AgeGroup::Group2),
            28..=39 => Some(AgeGroup::Group3),
            _ => Some(AgeGroup::Group4),
        }
    }

    /// Zero-based column offset within a gender's four maximum-weight columns
    pub fn index(&self) -> usize {
        match self {
            AgeGroup::Group1 => 0,
            AgeGroup::Group2 => 1,
            AgeGroup::Group3 => 2,
            AgeGroup::Group4 => 3,
        }
    }

    /// Printable band label, e.g. "21-27"
    pub fn bounds_label(&self) -> &'static str {
        match self {
            AgeGroup::Group1 => "17-20",
            AgeGroup::Group2 => "21-27",
            AgeGroup::Group3 => "28-39",
            AgeGroup::Group4 => "40+",
        }
    }
}

/// Allowed weight bounds in pounds for one (height, gender, age group) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Standard {
    pub min: i32,
    pub max: i32,
}

/// Outcome payload for the three weight-comparison classifications.
///
/// `delta` is the non-negative distance to the nearest violated bound,
/// exactly zero when the weight is within the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceResult {
    pub standard: Standard,
    pub actual: i32,
    pub delta: i32,
}

/// Classification of one screening. Every evaluation produces exactly one
/// of these six variants; invalid inputs are outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Compliance {
    /// Weight below the allowed minimum
    Under(ComplianceResult),
    /// Weight above the allowed maximum
    Over(ComplianceResult),
    /// Weight within the allowed band, bounds inclusive
    Compliant(ComplianceResult),
    /// Age 16 or under
    DoesNotMeetMinimumAge,
    /// Height outside the 58-80 inch table range
    HeightNotWithinBounds,
    /// The table has no published standard for this cell
    NoStandardAvailable,
}

impl Compliance {
    pub fn is_within_standard(&self) -> bool {
        matches!(self, Compliance::Compliant(_))
    }

    /// Payload accessor for the three weight-comparison variants
    pub fn result(&self) -> Option<&ComplianceResult> {
        match self {
            Compliance::Under(result)
            | Compliance::Over(result)
            | Compliance::Compliant(result) => Some(result),
            _ => None,
        }
    }
}

/// Serializable record of one screening: the subject inputs, the
/// classification, and when the check ran.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScreeningReport {
    pub gender: Gender,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub outcome: Compliance,
    pub checked_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bands_cover_documented_ranges() {
        assert_eq!(AgeGroup::from_age(16), None);
        assert_eq!(AgeGroup::from_age(0), None);
        assert_eq!(AgeGroup::from_age(-3), None);
        assert_eq!(AgeGroup::from_age(17), Some(AgeGroup::Group1));
        assert_eq!(AgeGroup::from_age(20), Some(AgeGroup::Group1));
        assert_eq!(AgeGroup::from_age(21), Some(AgeGroup::Group2));
        assert_eq!(AgeGroup::from_age(27), Some(AgeGroup::Group2));
        assert_eq!(AgeGroup::from_age(28), Some(AgeGroup::Group3));
        assert_eq!(AgeGroup::from_age(39), Some(AgeGroup::Group3));
        assert_eq!(AgeGroup::from_age(40), Some(AgeGroup::Group4));
        assert_eq!(AgeGroup::from_age(97), Some(AgeGroup::Group4));
    }

    #[test]
    fn test_age_group_indices_are_column_order() {
        assert_eq!(AgeGroup::Group1.index(), 0);
        assert_eq!(AgeGroup::Group2.index(), 1);
        assert_eq!(AgeGroup::Group3.index(), 2);
        assert_eq!(AgeGroup::Group4.index(), 3);
    }

    #[test]
    fn test_result_accessor_only_on_weight_variants() {
        let result = ComplianceResult {
            standard: Standard { min: 97, max: 131 },
            actual: 120,
            delta: 0,
        };
        assert_eq!(Compliance::Compliant(result).result(), Some(&result));
        assert_eq!(Compliance::NoStandardAvailable.result(), None);
        assert_eq!(Compliance::HeightNotWithinBounds.result(), None);
        assert_eq!(Compliance::DoesNotMeetMinimumAge.result(), None);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ScreeningReport {
            gender: Gender::Female,
            age: 30,
            height: 60,
            weight: 120,
            outcome: Compliance::Compliant(ComplianceResult {
                standard: Standard { min: 97, max: 131 },
                actual: 120,
                delta: 0,
            }),
            checked_at: 1_756_512_000,
        };

        let json = serde_json::to_string(&report).unwrap();
        let decoded: ScreeningReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.outcome, report.outcome);
        assert_eq!(decoded.gender, Gender::Female);
        assert_eq!(decoded.checked_at, report.checked_at);
    }
}
