//! Domain layer - Core business logic and entities

pub mod error;
pub mod prediction;
pub mod sample;
pub mod student;

pub use error::DomainError;
pub use prediction::{
    ModelInfo, OutcomeColor, PredictionResult, PresentedResult, Probabilities, ResultPresenter,
    ServiceStatus,
};
pub use sample::{PerformanceProfile, SampleGenerator};
pub use student::{FieldName, FormError, FormState, StudentDraft, StudentRecord};
