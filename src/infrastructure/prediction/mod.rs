//! Prediction client and session state

mod client;
mod session;

pub use client::{DEFAULT_API_URL, PredictionClient};
pub use session::{PredictionSession, SessionObserver, SessionSnapshot, TracingObserver};

#[cfg(test)]
pub use session::MockSessionObserver;
