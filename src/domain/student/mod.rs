//! Student record domain: attribute domains, form state and validation

mod entity;
mod form;
mod validation;

pub use entity::{
    AgeBand, CREDIT_LADDER, Disability, Gender, HighestEducation, ImdBand, LiteralOption, Region,
    StudentRecord,
};
pub use form::{FieldName, FormError, FormState, StudentDraft};
pub use validation::{
    AVG_SCORE_RANGE, NUM_ASSESSMENTS_RANGE, PREV_ATTEMPTS_RANGE, STUDIED_CREDITS_RANGE,
    STUDIED_CREDITS_STEP, StudentValidationError, validate_record,
};
