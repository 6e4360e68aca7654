pub mod types;

pub use types::{
    AgeGroup, Compliance, ComplianceResult, Gender, ScreeningReport, Standard,
};
