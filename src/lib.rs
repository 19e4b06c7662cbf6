//! Student Outcome client
//!
//! Client-side workflow of a student outcome prediction tool:
//! - Editable student records with fixed attribute domains
//! - Correlated random sample generation
//! - Submission to a remote classifier with a single loading/result state
//! - Presentation of the returned class probabilities

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    DomainError, FieldName, FormError, FormState, PredictionResult, PresentedResult,
    ResultPresenter, SampleGenerator, StudentRecord,
};
pub use infrastructure::{HttpClient, HttpClientTrait, PredictionClient, PredictionSession};
