//! Weight-for-height screening table
//!
//! The 23 published rows covering heights 58-80 inches. Each row carries a
//! uniform minimum weight and eight maximums: four male columns and four
//! female columns, one per regulatory age band (17-20, 21-27, 28-39, 40+).
//! A zero in a maximum column is the no-published-standard sentinel; it
//! occurs only in the male columns at heights 58 and 59.

use screening_types::{AgeGroup, Gender};
use thiserror::Error;

/// Shortest tabulated height, in inches
pub const MIN_HEIGHT: i32 = 58;
/// Tallest tabulated height, in inches
pub const MAX_HEIGHT: i32 = 80;

/// Sentinel for a cell with no published standard
pub const NO_STANDARD: i32 = 0;

/// One height row of the screening table. Weights are pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub height: i32,
    pub min_weight: i32,
    /// Male maximums by age band, column order 17-20, 21-27, 28-39, 40+
    pub male_max: [i32; 4],
    /// Female maximums, same column order
    pub female_max: [i32; 4],
}

const ROWS: [TableRow; 23] = [
    TableRow { height: 58, min_weight: 91, male_max: [0, 0, 0, 0], female_max: [119, 121, 122, 124] },
    TableRow { height: 59, min_weight: 94, male_max: [0, 0, 0, 0], female_max: [124, 125, 126, 128] },
    TableRow { height: 60, min_weight: 97, male_max: [132, 136, 139, 141], female_max: [128, 129, 131, 133] },
    TableRow { height: 61, min_weight: 100, male_max: [136, 140, 144, 146], female_max: [132, 134, 135, 137] },
    TableRow { height: 62, min_weight: 104, male_max: [141, 144, 148, 150], female_max: [136, 138, 140, 142] },
    TableRow { height: 63, min_weight: 107, male_max: [145, 149, 153, 155], female_max: [141, 143, 144, 146] },
    TableRow { height: 64, min_weight: 110, male_max: [150, 154, 158, 160], female_max: [145, 147, 149, 151] },
    TableRow { height: 65, min_weight: 114, male_max: [155, 159, 163, 165], female_max: [150, 152, 154, 156] },
    TableRow { height: 66, min_weight: 117, male_max: [160, 163, 168, 170], female_max: [155, 156, 158, 161] },
    TableRow { height: 67, min_weight: 121, male_max: [165, 169, 174, 176], female_max: [159, 161, 163, 166] },
    TableRow { height: 68, min_weight: 125, male_max: [170, 174, 179, 181], female_max: [164, 166, 168, 171] },
    TableRow { height: 69, min_weight: 128, male_max: [175, 179, 184, 186], female_max: [169, 171, 173, 176] },
    TableRow { height: 70, min_weight: 132, male_max: [180, 185, 189, 192], female_max: [174, 176, 178, 181] },
    TableRow { height: 71, min_weight: 136, male_max: [185, 189, 194, 197], female_max: [179, 181, 183, 186] },
    TableRow { height: 72, min_weight: 140, male_max: [190, 195, 200, 203], female_max: [184, 186, 188, 191] },
    TableRow { height: 73, min_weight: 144, male_max: [195, 200, 205, 208], female_max: [189, 191, 194, 197] },
    TableRow { height: 74, min_weight: 148, male_max: [201, 206, 211, 214], female_max: [194, 197, 199, 202] },
    TableRow { height: 75, min_weight: 152, male_max: [206, 212, 217, 220], female_max: [200, 202, 204, 208] },
    TableRow { height: 76, min_weight: 156, male_max: [212, 217, 223, 226], female_max: [205, 207, 210, 213] },
    TableRow { height: 77, min_weight: 160, male_max: [218, 223, 229, 232], female_max: [210, 213, 215, 219] },
    TableRow { height: 78, min_weight: 164, male_max: [223, 229, 235, 238], female_max: [216, 218, 221, 225] },
    TableRow { height: 79, min_weight: 168, male_max: [229, 235, 241, 244], female_max: [221, 224, 227, 230] },
    TableRow { height: 80, min_weight: 173, male_max: [234, 241, 247, 250], female_max: [227, 230, 233, 236] },
];

/// Look up the row for an exact height. `None` outside 58-80 inches.
///
/// Heights are contiguous, so the lookup is a bounds check plus a direct
/// index; `verify` proves the stored heights match their indices.
pub fn row_for(height: i32) -> Option<&'static TableRow> {
    if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height) {
        return None;
    }
    Some(&ROWS[(height - MIN_HEIGHT) as usize])
}

/// Select the maximum-weight cell for a gender and age band
pub fn max_for(row: &TableRow, gender: Gender, group: AgeGroup) -> i32 {
    match gender {
        Gender::Male => row.male_max[group.index()],
        Gender::Female => row.female_max[group.index()],
    }
}

/// Defects in the shipped table constant. Any in-range height missing its
/// row is a data-integrity bug, never a normal lookup outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StandardsError {
    #[error("table row {index} stores height {found}, expected {expected}")]
    MisplacedRow {
        index: usize,
        found: i32,
        expected: i32,
    },
    #[error("height {height} has non-positive minimum weight {min}")]
    BadMinimum { height: i32, min: i32 },
}

/// Check the table data: one row per height in 58..=80, stored at its
/// computed index, with a positive minimum weight.
pub fn verify() -> Result<(), StandardsError> {
    for (index, row) in ROWS.iter().enumerate() {
        let expected = MIN_HEIGHT + index as i32;
        if row.height != expected {
            return Err(StandardsError::MisplacedRow {
                index,
                found: row.height,
                expected,
            });
        }
        if row.min_weight <= 0 {
            return Err(StandardsError::BadMinimum {
                height: row.height,
                min: row.min_weight,
            });
        }
    }
    Ok(())
}
