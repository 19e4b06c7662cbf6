//! Client for the remote student outcome classifier

use serde::de::DeserializeOwned;
use tracing::{error, info, instrument};

use crate::domain::prediction::{ExampleInput, ModelInfo, PredictionResult, ServiceStatus};
use crate::domain::{DomainError, StudentRecord};
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Drives request/response cycles against the classification service
#[derive(Debug)]
pub struct PredictionClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> PredictionClient<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    /// Submit a record and return the service's verdict.
    ///
    /// Never fails: transport and parse errors become a failure result with
    /// the fixed connection message. The `success` field of the body decides
    /// the outcome, not the HTTP status.
    #[instrument(skip_all)]
    pub async fn submit(&self, record: &StudentRecord) -> PredictionResult {
        match self.try_submit(record).await {
            Ok(result) => {
                info!(
                    success = result.success,
                    prediction = %result.prediction,
                    "Prediction completed"
                );
                result
            }
            Err(e) => {
                error!(error = %e, "Prediction request failed");
                PredictionResult::transport_failure()
            }
        }
    }

    async fn try_submit(&self, record: &StudentRecord) -> Result<PredictionResult, DomainError> {
        let body = serde_json::to_value(record).map_err(|e| {
            DomainError::validation(format!("Failed to encode student record: {}", e))
        })?;

        let response = self
            .client
            .post_json(&self.url("/predict"), self.headers(), &body)
            .await?;

        PredictionResult::from_json(&response).ok_or_else(|| {
            DomainError::invalid_response(format!("Expected a JSON object, got {}", response))
        })
    }

    /// Fetch the service banner from the root endpoint
    pub async fn status(&self) -> Result<ServiceStatus, DomainError> {
        parse(self.client.get_json(&self.url("/")).await?)
    }

    /// Fetch a description of the loaded model
    pub async fn model_info(&self) -> Result<ModelInfo, DomainError> {
        let info: ModelInfo = parse(self.client.get_json(&self.url("/model-info")).await?)?;

        if let Some(message) = &info.error {
            return Err(DomainError::invalid_response(format!(
                "Model info unavailable: {}",
                message
            )));
        }

        Ok(info)
    }

    /// Fetch the example input published by the service
    pub async fn example_input(&self) -> Result<ExampleInput, DomainError> {
        parse(self.client.get_json(&self.url("/example-input")).await?)
    }
}

fn parse<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, DomainError> {
    serde_json::from_value(json)
        .map_err(|e| DomainError::invalid_response(format!("Failed to parse response: {}", e)))
}
