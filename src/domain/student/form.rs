//! Editable form state for a student record

use serde::Serialize;
use thiserror::Error;

use super::entity::{
    AgeBand, Disability, Gender, HighestEducation, ImdBand, LiteralOption, Region, StudentRecord,
};

/// Errors raised while editing or completing the form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid number '{value}' for field '{field}'")]
    InvalidNumber { field: String, value: String },

    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownOption { field: String, value: String },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// The ten editable fields, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Gender,
    Region,
    HighestEducation,
    ImdBand,
    AgeBand,
    NumOfPrevAttempts,
    StudiedCredits,
    Disability,
    AvgScore,
    NumAssessments,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        Self::Gender,
        Self::Region,
        Self::HighestEducation,
        Self::ImdBand,
        Self::AgeBand,
        Self::NumOfPrevAttempts,
        Self::StudiedCredits,
        Self::Disability,
        Self::AvgScore,
        Self::NumAssessments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Region => "region",
            Self::HighestEducation => "highest_education",
            Self::ImdBand => "imd_band",
            Self::AgeBand => "age_band",
            Self::NumOfPrevAttempts => "num_of_prev_attempts",
            Self::StudiedCredits => "studied_credits",
            Self::Disability => "disability",
            Self::AvgScore => "avg_score",
            Self::NumAssessments => "num_assessments",
        }
    }

    /// Numeric fields coerce their raw input to a number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::NumOfPrevAttempts | Self::StudiedCredits | Self::AvgScore | Self::NumAssessments
        )
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A student record under edit: categorical fields stay unset until chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDraft {
    pub gender: Option<Gender>,
    pub region: Option<Region>,
    pub highest_education: Option<HighestEducation>,
    pub imd_band: Option<ImdBand>,
    pub age_band: Option<AgeBand>,
    pub num_of_prev_attempts: i64,
    pub studied_credits: i64,
    pub disability: Option<Disability>,
    pub avg_score: f64,
    pub num_assessments: i64,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            gender: None,
            region: None,
            highest_education: None,
            imd_band: None,
            age_band: None,
            num_of_prev_attempts: 0,
            studied_credits: 60,
            disability: Some(Disability::No),
            avg_score: 0.0,
            num_assessments: 0,
        }
    }
}

impl From<StudentRecord> for StudentDraft {
    fn from(record: StudentRecord) -> Self {
        Self {
            gender: Some(record.gender),
            region: Some(record.region),
            highest_education: Some(record.highest_education),
            imd_band: Some(record.imd_band),
            age_band: Some(record.age_band),
            num_of_prev_attempts: record.num_of_prev_attempts,
            studied_credits: record.studied_credits,
            disability: Some(record.disability),
            avg_score: record.avg_score,
            num_assessments: record.num_assessments,
        }
    }
}

impl StudentDraft {
    /// Fields that still need a value before the draft can be submitted
    pub fn missing_fields(&self) -> Vec<FieldName> {
        let unset = [
            (FieldName::Gender, self.gender.is_none()),
            (FieldName::Region, self.region.is_none()),
            (FieldName::HighestEducation, self.highest_education.is_none()),
            (FieldName::ImdBand, self.imd_band.is_none()),
            (FieldName::AgeBand, self.age_band.is_none()),
            (FieldName::Disability, self.disability.is_none()),
        ];

        unset
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| field)
            .collect()
    }

    /// Converts the draft into a record when every required field is set
    pub fn complete(&self) -> Result<StudentRecord, FormError> {
        match (
            self.gender,
            self.region,
            self.highest_education,
            self.imd_band,
            self.age_band,
            self.disability,
        ) {
            (
                Some(gender),
                Some(region),
                Some(highest_education),
                Some(imd_band),
                Some(age_band),
                Some(disability),
            ) => Ok(StudentRecord {
                gender,
                region,
                highest_education,
                imd_band,
                age_band,
                num_of_prev_attempts: self.num_of_prev_attempts,
                studied_credits: self.studied_credits,
                disability,
                avg_score: self.avg_score,
                num_assessments: self.num_assessments,
            }),
            _ => Err(FormError::MissingFields(
                self.missing_fields()
                    .iter()
                    .map(|f| f.as_str().to_string())
                    .collect(),
            )),
        }
    }
}

/// Single source of truth for the record being edited
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: StudentDraft,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &StudentDraft {
        &self.draft
    }

    /// Stores `raw` at `field`, coercing numeric fields to numbers.
    ///
    /// Ranges are not checked here; a failed coercion leaves the state untouched.
    pub fn update(&mut self, field: FieldName, raw: &str) -> Result<(), FormError> {
        let raw = raw.trim();

        match field {
            FieldName::Gender => self.draft.gender = parse_option(field, raw)?,
            FieldName::Region => self.draft.region = parse_option(field, raw)?,
            FieldName::HighestEducation => {
                self.draft.highest_education = parse_option(field, raw)?
            }
            FieldName::ImdBand => self.draft.imd_band = parse_option(field, raw)?,
            FieldName::AgeBand => self.draft.age_band = parse_option(field, raw)?,
            FieldName::Disability => self.draft.disability = parse_option(field, raw)?,
            FieldName::NumOfPrevAttempts => {
                self.draft.num_of_prev_attempts = parse_integer(field, raw)?
            }
            FieldName::StudiedCredits => self.draft.studied_credits = parse_integer(field, raw)?,
            FieldName::NumAssessments => self.draft.num_assessments = parse_integer(field, raw)?,
            FieldName::AvgScore => self.draft.avg_score = parse_number(field, raw)?,
        }

        Ok(())
    }

    /// Atomically replaces the whole draft with a complete record
    pub fn reset(&mut self, record: StudentRecord) {
        self.draft = StudentDraft::from(record);
    }

    pub fn complete(&self) -> Result<StudentRecord, FormError> {
        self.draft.complete()
    }

    pub fn is_complete(&self) -> bool {
        self.draft.missing_fields().is_empty()
    }
}

/// Empty input selects the "pick one" placeholder
fn parse_option<T: LiteralOption>(field: FieldName, raw: &str) -> Result<Option<T>, FormError> {
    if raw.is_empty() {
        return Ok(None);
    }

    T::from_literal(raw)
        .map(Some)
        .ok_or_else(|| FormError::UnknownOption {
            field: field.as_str().to_string(),
            value: raw.to_string(),
        })
}

fn parse_number(field: FieldName, raw: &str) -> Result<f64, FormError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field: field.as_str().to_string(),
            value: raw.to_string(),
        })
}

/// Count fields accept integral numbers only ("3" and "3.0", not "3.5")
fn parse_integer(field: FieldName, raw: &str) -> Result<i64, FormError> {
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }

    let value = parse_number(field, raw)?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(FormError::InvalidNumber {
            field: field.as_str().to_string(),
            value: raw.to_string(),
        });
    }

    Ok(value as i64)
}
