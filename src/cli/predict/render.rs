//! Text rendering of presented results

use std::fmt;

use crate::domain::PresentedResult;

const BAR_WIDTH: usize = 30;

/// Terminal view of a presented result
pub struct TextView<'a>(pub &'a PresentedResult);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            PresentedResult::Prediction {
                label,
                color,
                confidence,
                explanation,
                bars,
            } => {
                writeln!(f, "Prediction: {} [{}]", label, color)?;
                writeln!(f, "Confidence: {}", confidence)?;

                if !bars.is_empty() {
                    writeln!(f, "Probabilities:")?;
                    let width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
                    for bar in bars {
                        let filled = bar_cells(bar.probability);
                        writeln!(
                            f,
                            "  {:<width$}  {}{}  {:>6}",
                            bar.label,
                            "█".repeat(filled),
                            "·".repeat(BAR_WIDTH - filled),
                            bar.percentage,
                            width = width
                        )?;
                    }
                }

                if let Some(text) = explanation {
                    writeln!(f, "\n{}", text)?;
                }

                Ok(())
            }
            PresentedResult::Error { message } => writeln!(f, "Error: {}", message),
        }
    }
}

fn bar_cells(probability: f64) -> usize {
    let cells = (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round();
    cells as usize
}
