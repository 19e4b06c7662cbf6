//! Education-conditioned performance profiles

use std::ops::{Range, RangeInclusive};

use crate::domain::student::HighestEducation;

/// Distribution parameters for the performance-linked fields of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceProfile {
    /// Half-open range for `avg_score`
    pub avg_score: Range<f64>,
    pub num_assessments: RangeInclusive<i64>,
    pub prev_attempts: RangeInclusive<i64>,
}

const HIGHER_EDUCATION: PerformanceProfile = PerformanceProfile {
    avg_score: 60.0..100.0,
    num_assessments: 8..=15,
    prev_attempts: 0..=1,
};

const A_LEVEL: PerformanceProfile = PerformanceProfile {
    avg_score: 50.0..100.0,
    num_assessments: 5..=14,
    prev_attempts: 0..=2,
};

const BELOW_A_LEVEL: PerformanceProfile = PerformanceProfile {
    avg_score: 30.0..100.0,
    num_assessments: 3..=14,
    prev_attempts: 0..=3,
};

/// Education level to profile. Every level has exactly one row.
static PROFILE_TABLE: [(HighestEducation, &PerformanceProfile); 5] = [
    (HighestEducation::NoFormalQuals, &BELOW_A_LEVEL),
    (HighestEducation::LowerThanALevel, &BELOW_A_LEVEL),
    (HighestEducation::ALevelOrEquivalent, &A_LEVEL),
    (HighestEducation::HeQualification, &HIGHER_EDUCATION),
    (HighestEducation::PostGraduate, &HIGHER_EDUCATION),
];

impl PerformanceProfile {
    /// Looks up the profile for an education level
    pub fn for_education(education: HighestEducation) -> &'static PerformanceProfile {
        PROFILE_TABLE
            .iter()
            .find(|(level, _)| *level == education)
            .map(|(_, profile)| *profile)
            .unwrap_or(&BELOW_A_LEVEL)
    }
}
