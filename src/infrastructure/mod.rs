//! Infrastructure layer - HTTP transport, prediction client and logging

pub mod http_client;
pub mod logging;
pub mod prediction;

pub use http_client::{HttpClient, HttpClientTrait};
pub use prediction::{
    DEFAULT_API_URL, PredictionClient, PredictionSession, SessionObserver, SessionSnapshot,
    TracingObserver,
};
