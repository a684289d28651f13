// Derived statistics data models
use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};

/// Descriptive summary over one field of a series.
/// Always derived from the series, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub mean: f64,
    pub std_dev: f64, // Population standard deviation (divides by N)
    pub min: f64,
    pub max: f64,
}

/// Display form of a summary: mean and std dev fixed to one decimal,
/// min and max left at full precision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub mean: String,
    pub std_dev: String,
    pub min: f64,
    pub max: f64,
}

impl SummaryStatistics {
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            mean: format!("{:.1}", self.mean),
            std_dev: format!("{:.1}", self.std_dev),
            min: self.min,
            max: self.max,
        }
    }
}

/// Heatmap band for a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CorrelationBand {
    Perfect,
    ModeratePositive,
    Weak,
    StrongNegative,
    Unclassified, // NaN never satisfies any band
}

impl CorrelationBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationBand::Perfect => "perfect",
            CorrelationBand::ModeratePositive => "moderatePositive",
            CorrelationBand::Weak => "weak",
            CorrelationBand::StrongNegative => "strongNegative",
            CorrelationBand::Unclassified => "unclassified",
        }
    }

    /// Legend text shown next to the heatmap
    pub fn legend_label(&self) -> &'static str {
        match self {
            CorrelationBand::Perfect => "Perfect (+1.0)",
            CorrelationBand::ModeratePositive => "Mod. Pos (+0.5)",
            CorrelationBand::Weak => "Weak (±0.5)",
            CorrelationBand::StrongNegative => "Strong Neg (-0.5)",
            CorrelationBand::Unclassified => "Unclassified",
        }
    }
}

/// Square, symmetric coefficient matrix with a unit diagonal.
/// Deserializing goes through the same checks as `new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCorrelationMatrix")]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

/// Unchecked wire form of `CorrelationMatrix`
#[derive(Deserialize)]
struct RawCorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl TryFrom<RawCorrelationMatrix> for CorrelationMatrix {
    type Error = LabError;

    fn try_from(raw: RawCorrelationMatrix) -> Result<Self, Self::Error> {
        Self::new(raw.labels, raw.values)
    }
}

const SYMMETRY_TOLERANCE: f64 = 1e-9;

impl CorrelationMatrix {
    pub fn new(labels: Vec<String>, values: Vec<Vec<f64>>) -> LabResult<Self> {
        let n = labels.len();
        if values.len() != n || values.iter().any(|row| row.len() != n) {
            return Err(LabError::InvalidCorrelationMatrix(format!(
                "expected a {}x{} grid to match the labels",
                n, n
            )));
        }

        for i in 0..n {
            if (values[i][i] - 1.0).abs() > SYMMETRY_TOLERANCE {
                return Err(LabError::InvalidCorrelationMatrix(format!(
                    "diagonal entry for '{}' is {}, expected 1.0",
                    labels[i], values[i][i]
                )));
            }
            for j in 0..n {
                let v = values[i][j];
                if !(-1.0..=1.0).contains(&v) {
                    return Err(LabError::InvalidCorrelationMatrix(format!(
                        "coefficient {} at ({}, {}) is outside [-1, 1]",
                        v, i, j
                    )));
                }
                if (v - values[j][i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(LabError::InvalidCorrelationMatrix(format!(
                        "entries ({}, {}) and ({}, {}) differ",
                        i, j, j, i
                    )));
                }
            }
        }

        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Coefficient between two variables by label
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.values[i][j])
    }
}

/// One heatmap cell, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationCell {
    pub row: String,
    pub column: String,
    pub value: f64,
    pub band: CorrelationBand,
}

/// Forecast error metrics over actual vs forecast pairs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForecastAccuracy {
    pub wmape: f64, // Percent
    pub rmse: f64,
    pub mae: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub bucket: String,
    pub count: u32,
}

impl HistogramBucket {
    pub fn new(bucket: &str, count: u32) -> Self {
        Self {
            bucket: bucket.to_string(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_rounds_mean_and_std_only() {
        let summary = SummaryStatistics {
            mean: 85.0,
            std_dev: 11.180339887,
            min: 70.123,
            max: 100.0,
        };
        let display = summary.display();
        assert_eq!(display.mean, "85.0");
        assert_eq!(display.std_dev, "11.2");
        assert_eq!(display.min, 70.123);
        assert_eq!(display.max, 100.0);
    }

    #[test]
    fn test_matrix_accepts_valid_grid() {
        let matrix = CorrelationMatrix::new(
            labels(&["A", "B"]),
            vec![vec![1.0, -0.65], vec![-0.65, 1.0]],
        )
        .unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.get("A", "B"), Some(-0.65));
        assert_eq!(matrix.get("A", "C"), None);
    }

    #[test]
    fn test_matrix_rejects_bad_shapes() {
        assert!(CorrelationMatrix::new(labels(&["A", "B"]), vec![vec![1.0, 0.2]]).is_err());
        // Asymmetric
        assert!(CorrelationMatrix::new(
            labels(&["A", "B"]),
            vec![vec![1.0, 0.2], vec![0.3, 1.0]]
        )
        .is_err());
        // Diagonal not 1
        assert!(CorrelationMatrix::new(
            labels(&["A", "B"]),
            vec![vec![0.9, 0.2], vec![0.2, 1.0]]
        )
        .is_err());
        // Out of range
        assert!(CorrelationMatrix::new(
            labels(&["A", "B"]),
            vec![vec![1.0, 1.5], vec![1.5, 1.0]]
        )
        .is_err());
    }

    #[test]
    fn test_matrix_deserialize_validates() {
        let ragged = r#"{"labels":["A"],"values":[[1.0,7.5],[0.2,3.0]]}"#;
        assert!(serde_json::from_str::<CorrelationMatrix>(ragged).is_err());

        let asymmetric = r#"{"labels":["A","B"],"values":[[1.0,0.2],[0.3,1.0]]}"#;
        assert!(serde_json::from_str::<CorrelationMatrix>(asymmetric).is_err());

        let valid = CorrelationMatrix::new(
            labels(&["A", "B"]),
            vec![vec![1.0, -0.65], vec![-0.65, 1.0]],
        )
        .unwrap();
        let json = serde_json::to_string(&valid).unwrap();
        assert_eq!(serde_json::from_str::<CorrelationMatrix>(&json).unwrap(), valid);
    }

    #[test]
    fn test_band_serialization() {
        let json = serde_json::to_string(&CorrelationBand::ModeratePositive).unwrap();
        assert_eq!(json, "\"moderatePositive\"");
        assert_eq!(CorrelationBand::StrongNegative.as_str(), "strongNegative");
    }
}
