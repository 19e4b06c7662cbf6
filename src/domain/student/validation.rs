//! Student record range validation

use std::fmt;

use super::entity::StudentRecord;

pub const PREV_ATTEMPTS_RANGE: (i64, i64) = (0, 10);
pub const STUDIED_CREDITS_RANGE: (i64, i64) = (30, 360);
pub const STUDIED_CREDITS_STEP: i64 = 30;
pub const AVG_SCORE_RANGE: (f64, f64) = (0.0, 100.0);
pub const NUM_ASSESSMENTS_RANGE: (i64, i64) = (0, 20);

/// Student record validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum StudentValidationError {
    /// Previous attempts outside [0, 10]
    InvalidPrevAttempts { value: i64, min: i64, max: i64 },
    /// Studied credits outside [30, 360]
    InvalidStudiedCredits { value: i64, min: i64, max: i64 },
    /// Studied credits not on the 30-credit ladder
    UnalignedStudiedCredits { value: i64, step: i64 },
    /// Average score outside [0, 100] or not a finite number
    InvalidAvgScore { value: f64, min: f64, max: f64 },
    /// Assessment count outside [0, 20]
    InvalidNumAssessments { value: i64, min: i64, max: i64 },
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrevAttempts { value, min, max } => {
                write!(
                    f,
                    "Invalid num_of_prev_attempts {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidStudiedCredits { value, min, max } => {
                write!(
                    f,
                    "Invalid studied_credits {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::UnalignedStudiedCredits { value, step } => {
                write!(
                    f,
                    "Invalid studied_credits {}: must be a multiple of {}",
                    value, step
                )
            }
            Self::InvalidAvgScore { value, min, max } => {
                write!(
                    f,
                    "Invalid avg_score {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidNumAssessments { value, min, max } => {
                write!(
                    f,
                    "Invalid num_assessments {}: must be between {} and {}",
                    value, min, max
                )
            }
        }
    }
}

impl std::error::Error for StudentValidationError {}

pub fn validate_prev_attempts(value: i64) -> Result<(), StudentValidationError> {
    let (min, max) = PREV_ATTEMPTS_RANGE;

    if !(min..=max).contains(&value) {
        return Err(StudentValidationError::InvalidPrevAttempts { value, min, max });
    }

    Ok(())
}

pub fn validate_studied_credits(value: i64) -> Result<(), StudentValidationError> {
    let (min, max) = STUDIED_CREDITS_RANGE;

    if !(min..=max).contains(&value) {
        return Err(StudentValidationError::InvalidStudiedCredits { value, min, max });
    }

    if value % STUDIED_CREDITS_STEP != 0 {
        return Err(StudentValidationError::UnalignedStudiedCredits {
            value,
            step: STUDIED_CREDITS_STEP,
        });
    }

    Ok(())
}

/// NaN fails the range check as well
pub fn validate_avg_score(value: f64) -> Result<(), StudentValidationError> {
    let (min, max) = AVG_SCORE_RANGE;

    if !(min..=max).contains(&value) {
        return Err(StudentValidationError::InvalidAvgScore { value, min, max });
    }

    Ok(())
}

pub fn validate_num_assessments(value: i64) -> Result<(), StudentValidationError> {
    let (min, max) = NUM_ASSESSMENTS_RANGE;

    if !(min..=max).contains(&value) {
        return Err(StudentValidationError::InvalidNumAssessments { value, min, max });
    }

    Ok(())
}

/// Validate every numeric field of a record, collecting all violations
pub fn validate_record(record: &StudentRecord) -> Result<(), Vec<StudentValidationError>> {
    let errors: Vec<StudentValidationError> = [
        validate_prev_attempts(record.num_of_prev_attempts),
        validate_studied_credits(record.studied_credits),
        validate_avg_score(record.avg_score),
        validate_num_assessments(record.num_assessments),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(validate_prev_attempts(0).is_ok());
        assert!(validate_prev_attempts(10).is_ok());
        assert!(validate_studied_credits(30).is_ok());
        assert!(validate_studied_credits(360).is_ok());
        assert!(validate_avg_score(0.0).is_ok());
        assert!(validate_avg_score(100.0).is_ok());
        assert!(validate_num_assessments(20).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            validate_prev_attempts(11),
            Err(StudentValidationError::InvalidPrevAttempts { value: 11, .. })
        ));
        assert!(matches!(
            validate_studied_credits(390),
            Err(StudentValidationError::InvalidStudiedCredits { .. })
        ));
        assert!(validate_avg_score(100.1).is_err());
        assert!(validate_avg_score(f64::NAN).is_err());
        assert!(validate_num_assessments(-1).is_err());
    }

    #[test]
    fn test_unaligned_credits() {
        let err = validate_studied_credits(45).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid studied_credits 45: must be a multiple of 30"
        );
    }

    #[test]
    fn test_validate_record_collects_all_errors() {
        let mut record = StudentRecord::example();
        assert!(validate_record(&record).is_ok());

        record.num_of_prev_attempts = 12;
        record.avg_score = 120.0;

        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].to_string(),
            "Invalid num_of_prev_attempts 12: must be between 0 and 10"
        );
    }
}
