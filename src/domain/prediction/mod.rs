//! Prediction results and their presentation

mod presenter;
mod result;

pub use presenter::{OutcomeColor, PresentedResult, ProbabilityBar, ResultPresenter};
pub use result::{
    ExampleInput, ModelInfo, PredictionResult, Probabilities, ServiceStatus,
    TRANSPORT_FAILURE_MESSAGE,
};
