//! Mapping from prediction results to display semantics

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::result::PredictionResult;

/// Semantic color of an outcome label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeColor {
    Green,
    Blue,
    Red,
    Amber,
    Gray,
}

impl OutcomeColor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Gray => "gray",
        }
    }

    /// Background utility class used by the web form
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Green => "bg-emerald-500",
            Self::Blue => "bg-blue-500",
            Self::Red => "bg-red-500",
            Self::Amber => "bg-amber-500",
            Self::Gray => "bg-gray-500",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Blue => "#3b82f6",
            Self::Red => "#ef4444",
            Self::Amber => "#f59e0b",
            Self::Gray => "#6b7280",
        }
    }
}

/// Serialized with its styling metadata so JSON consumers can paint it
impl Serialize for OutcomeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OutcomeColor", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("css_class", self.css_class())?;
        state.serialize_field("hex", self.hex())?;
        state.end()
    }
}

impl std::fmt::Display for OutcomeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the probability chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityBar {
    pub label: String,
    pub probability: f64,
    pub percentage: String,
    pub color: OutcomeColor,
}

/// Display-ready view of a prediction result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentedResult {
    Prediction {
        label: String,
        color: OutcomeColor,
        confidence: String,
        explanation: Option<&'static str>,
        bars: Vec<ProbabilityBar>,
    },
    Error {
        message: String,
    },
}

impl PresentedResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Stateless presenter for prediction results
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPresenter;

impl ResultPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Color for an outcome label; unknown labels are gray
    pub fn color_for(label: &str) -> OutcomeColor {
        match label {
            "Pass" => OutcomeColor::Green,
            "Distinction" => OutcomeColor::Blue,
            "Fail" => OutcomeColor::Red,
            "Withdrawn" => OutcomeColor::Amber,
            _ => OutcomeColor::Gray,
        }
    }

    /// Guidance text for an outcome label; unknown labels have none
    pub fn explanation_for(label: &str) -> Option<&'static str> {
        match label {
            "Pass" => Some(
                "Siswa diprediksi akan lulus dengan baik. Pertahankan performa akademik dan motivasi belajar.",
            ),
            "Distinction" => Some(
                "Siswa diprediksi akan lulus dengan predikat terbaik! Performa sangat memuaskan.",
            ),
            "Fail" => Some(
                "Siswa berisiko tidak lulus. Perlu dukungan tambahan, bimbingan ekstra, dan evaluasi metode belajar.",
            ),
            "Withdrawn" => Some(
                "Siswa berisiko mengundurkan diri. Perlu perhatian khusus, konseling, dan dukungan motivasi.",
            ),
            _ => None,
        }
    }

    /// Formats a probability in [0, 1] as a percentage with one decimal
    pub fn percentage(probability: f64) -> String {
        format!("{:.1}%", probability * 100.0)
    }

    pub fn present(&self, result: &PredictionResult) -> PresentedResult {
        if !result.is_success() {
            return PresentedResult::Error {
                message: result.error_message().unwrap_or_default().to_string(),
            };
        }

        let bars = result
            .probabilities
            .iter()
            .map(|(label, probability)| ProbabilityBar {
                label: label.to_string(),
                probability,
                percentage: Self::percentage(probability),
                color: Self::color_for(label),
            })
            .collect();

        PresentedResult::Prediction {
            label: result.prediction.clone(),
            color: Self::color_for(&result.prediction),
            confidence: Self::percentage(result.confidence),
            explanation: Self::explanation_for(&result.prediction),
            bars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::Probabilities;

    #[test]
    fn test_color_for_known_and_unknown_labels() {
        assert_eq!(ResultPresenter::color_for("Pass"), OutcomeColor::Green);
        assert_eq!(ResultPresenter::color_for("Distinction"), OutcomeColor::Blue);
        assert_eq!(ResultPresenter::color_for("Fail"), OutcomeColor::Red);
        assert_eq!(ResultPresenter::color_for("Withdrawn"), OutcomeColor::Amber);
        assert_eq!(ResultPresenter::color_for("Deferred"), OutcomeColor::Gray);
        assert_eq!(ResultPresenter::color_for(""), OutcomeColor::Gray);
        assert_eq!(ResultPresenter::color_for("pass"), OutcomeColor::Gray);
    }

    #[test]
    fn test_explanation_for_is_total() {
        for label in ["Pass", "Distinction", "Fail", "Withdrawn"] {
            assert!(ResultPresenter::explanation_for(label).is_some());
        }
        assert_eq!(ResultPresenter::explanation_for("Deferred"), None);
        assert_eq!(ResultPresenter::explanation_for(""), None);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(ResultPresenter::percentage(0.87), "87.0%");
        assert_eq!(ResultPresenter::percentage(0.0), "0.0%");
        assert_eq!(ResultPresenter::percentage(1.0), "100.0%");
        assert_eq!(ResultPresenter::percentage(0.1234), "12.3%");
    }

    #[test]
    fn test_present_success_keeps_received_order() {
        let result = PredictionResult::success(
            "Fail",
            0.6,
            Probabilities::new()
                .with("Pass", 0.3)
                .with("Fail", 0.6)
                .with("Distinction", 0.1),
        );

        let presented = ResultPresenter::new().present(&result);

        match presented {
            PresentedResult::Prediction {
                label,
                color,
                confidence,
                explanation,
                bars,
            } => {
                assert_eq!(label, "Fail");
                assert_eq!(color, OutcomeColor::Red);
                assert_eq!(confidence, "60.0%");
                assert!(explanation.unwrap().starts_with("Siswa berisiko tidak lulus"));
                let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
                assert_eq!(labels, vec!["Pass", "Fail", "Distinction"]);
                assert_eq!(bars[0].percentage, "30.0%");
            }
            PresentedResult::Error { .. } => panic!("expected a prediction"),
        }
    }

    #[test]
    fn test_present_unknown_label() {
        let result = PredictionResult::success("Deferred", 0.5, Probabilities::new());

        let presented = ResultPresenter::new().present(&result);

        assert!(matches!(
            presented,
            PresentedResult::Prediction {
                color: OutcomeColor::Gray,
                explanation: None,
                ..
            }
        ));
    }

    #[test]
    fn test_presented_json_carries_color_styling() {
        let result = PredictionResult::success(
            "Pass",
            0.9,
            Probabilities::new().with("Pass", 0.9).with("Withdrawn", 0.1),
        );

        let json = serde_json::to_value(ResultPresenter::new().present(&result)).unwrap();

        assert_eq!(json["kind"], "prediction");
        assert_eq!(
            json["color"],
            serde_json::json!({"name": "green", "css_class": "bg-emerald-500", "hex": "#10b981"})
        );
        assert_eq!(json["bars"][1]["color"]["css_class"], "bg-amber-500");
        assert_eq!(json["bars"][1]["color"]["hex"], "#f59e0b");
    }

    #[test]
    fn test_present_failure() {
        let result = PredictionResult::failure("model not loaded");

        let presented = ResultPresenter::new().present(&result);

        assert!(presented.is_error());
        assert_eq!(
            presented,
            PresentedResult::Error {
                message: "model not loaded".to_string()
            }
        );
    }
}
