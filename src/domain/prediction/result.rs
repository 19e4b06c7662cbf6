//! Classification service response types

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::student::StudentRecord;

/// Message shown when the classification service cannot be reached
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Gagal terhubung ke server. Pastikan API server berjalan di port 5000.";

/// Per-class probabilities, kept in the order the service sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities(Vec<(String, f64)>);

impl Probabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, probability: f64) -> Self {
        self.insert(label, probability);
        self
    }

    /// Sets `label`, keeping its original position when already present
    pub fn insert(&mut self, label: impl Into<String>, probability: f64) {
        let label = label.into();

        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = probability,
            None => self.0.push((label, probability)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(l, p)| (l.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, p)| p).sum()
    }
}

impl Serialize for Probabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, probability) in &self.0 {
            map.serialize_entry(label, probability)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProbabilitiesVisitor;

        impl<'de> Visitor<'de> for ProbabilitiesVisitor {
            type Value = Probabilities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of class label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut probabilities = Probabilities::new();
                while let Some((label, probability)) = access.next_entry::<String, f64>()? {
                    probabilities.insert(label, probability);
                }
                Ok(probabilities)
            }
        }

        deserializer.deserialize_map(ProbabilitiesVisitor)
    }
}

/// Outcome of one prediction request.
///
/// Decoded as-is from the service body: `success` is the discriminator and
/// defaults to `false` when absent. On failure only `error` is meaningful.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: Probabilities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn success(
        prediction: impl Into<String>,
        confidence: f64,
        probabilities: Probabilities,
    ) -> Self {
        Self {
            success: true,
            prediction: prediction.into(),
            confidence,
            probabilities,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Decode a service body field by field.
    ///
    /// Fields of an unexpected type (`null`, wrong JSON type) fall back to
    /// their defaults instead of discarding the whole body, so a server
    /// `error` always survives. Non-numeric probability entries are skipped.
    /// Returns `None` only when the body is not a JSON object.
    pub fn from_json(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;

        let probabilities = object
            .get("probabilities")
            .and_then(serde_json::Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(label, p)| p.as_f64().map(|p| (label, p)))
                    .fold(Probabilities::new(), |acc, (label, p)| acc.with(label.as_str(), p))
            })
            .unwrap_or_default();

        Some(Self {
            success: object
                .get("success")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
            prediction: object
                .get("prediction")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string(),
            confidence: object
                .get("confidence")
                .and_then(serde_json::Value::as_f64)
                .unwrap_or(0.0),
            probabilities,
            error: object
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        })
    }

    /// The synthesized result for an unreachable or unparseable service
    pub fn transport_failure() -> Self {
        Self::failure(TRANSPORT_FAILURE_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Response of the service root endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

/// Description of the model currently loaded by the service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default)]
    pub feature_columns: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Example input published by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleInput {
    pub example_input: StudentRecord,
    #[serde(default)]
    pub field_descriptions: BTreeMap<String, String>,
    #[serde(default)]
    pub possible_predictions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_keeps_probability_order() {
        let body = r#"{
            "success": true,
            "prediction": "Pass",
            "confidence": 0.87,
            "probabilities": {"Withdrawn": 0.03, "Pass": 0.87, "Fail": 0.05, "Distinction": 0.05},
            "input_data": {"gender": "M"}
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();

        assert!(result.is_success());
        assert_eq!(result.prediction, "Pass");
        assert_eq!(result.confidence, 0.87);
        let labels: Vec<&str> = result.probabilities.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Withdrawn", "Pass", "Fail", "Distinction"]);
        assert!((result.probabilities.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_server_failure() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"success": false, "error": "model not loaded"}"#).unwrap();

        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("model not loaded"));
        assert!(result.probabilities.is_empty());
    }

    #[test]
    fn test_missing_success_means_failure() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"error": "Missing required fields", "missing_fields": ["gender"]}"#,
        )
        .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("Missing required fields"));
    }

    #[test]
    fn test_from_json_tolerates_null_fields() {
        let body = serde_json::json!({
            "success": false,
            "error": "Model prediction failed",
            "prediction": null,
            "confidence": null,
            "probabilities": null
        });

        let result = PredictionResult::from_json(&body).unwrap();

        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("Model prediction failed"));
        assert_eq!(result.prediction, "");
        assert_eq!(result.confidence, 0.0);
        assert!(result.probabilities.is_empty());
    }

    #[test]
    fn test_from_json_skips_non_numeric_probabilities() {
        let body = serde_json::json!({
            "success": true,
            "prediction": "Pass",
            "confidence": 0.9,
            "probabilities": {"Pass": 0.9, "Fail": "n/a", "Withdrawn": 0.1}
        });

        let result = PredictionResult::from_json(&body).unwrap();

        assert!(result.is_success());
        let labels: Vec<&str> = result.probabilities.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Pass", "Withdrawn"]);
    }

    #[test]
    fn test_from_json_requires_an_object() {
        assert_eq!(PredictionResult::from_json(&serde_json::json!([1, 2])), None);
        assert_eq!(PredictionResult::from_json(&serde_json::json!("ok")), None);
    }

    #[test]
    fn test_transport_failure_message() {
        let result = PredictionResult::transport_failure();
        assert!(!result.success);
        assert_eq!(
            result.error_message(),
            Some("Gagal terhubung ke server. Pastikan API server berjalan di port 5000.")
        );
    }

    #[test]
    fn test_probabilities_insert_keeps_position() {
        let mut probabilities = Probabilities::new().with("Fail", 0.2).with("Pass", 0.8);
        probabilities.insert("Fail", 0.1);

        assert_eq!(probabilities.len(), 2);
        assert_eq!(probabilities.iter().next(), Some(("Fail", 0.1)));
        assert_eq!(probabilities.get("Pass"), Some(0.8));
        assert_eq!(probabilities.get("Distinction"), None);
    }

    #[test]
    fn test_decode_model_info() {
        let info: ModelInfo = serde_json::from_value(serde_json::json!({
            "model_loaded": true,
            "model_type": "RandomForestClassifier",
            "feature_columns": ["gender", "region"],
            "classes": ["Distinction", "Fail", "Pass", "Withdrawn"],
            "categorical_encoders": ["gender"]
        }))
        .unwrap();

        assert!(info.model_loaded);
        assert_eq!(info.classes.len(), 4);
        assert_eq!(info.model_type.as_deref(), Some("RandomForestClassifier"));
    }
}
