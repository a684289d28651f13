// Forecasting model comparison data models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selectable forecasting model family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelFamily {
    Arima,
    Sarima,
    #[default]
    Sarimax,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 3] = [ModelFamily::Arima, ModelFamily::Sarima, ModelFamily::Sarimax];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Arima => "ARIMA",
            ModelFamily::Sarima => "SARIMA",
            ModelFamily::Sarimax => "SARIMAX",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One trained candidate with its fit and accuracy scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCandidate {
    pub name: ModelFamily,
    pub display_name: String,            // e.g. "ARIMA (1,1,1)"
    pub aic: f64,
    pub wmape: f64,                      // Percent
    pub rmse: f64,
    pub mae: Option<f64>,                // Not published for every candidate
    pub r2: f64,
    pub training_time_seconds: f64,
}

/// Comparable score on a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelMetric {
    Aic,
    Wmape,
    Rmse,
    Mae,
    R2,
    TrainingTime,
}

impl ModelMetric {
    pub fn higher_is_better(&self) -> bool {
        matches!(self, ModelMetric::R2)
    }

    pub fn value_of(&self, candidate: &ModelCandidate) -> Option<f64> {
        match self {
            ModelMetric::Aic => Some(candidate.aic),
            ModelMetric::Wmape => Some(candidate.wmape),
            ModelMetric::Rmse => Some(candidate.rmse),
            ModelMetric::Mae => candidate.mae,
            ModelMetric::R2 => Some(candidate.r2),
            ModelMetric::TrainingTime => Some(candidate.training_time_seconds),
        }
    }
}

/// A candidate row plus its derived comparison figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateComparison {
    pub candidate: ModelCandidate,
    pub aic_improvement_percent: f64, // Relative AIC reduction against the baseline
    pub accuracy_percent: f64,
    pub is_baseline: bool,
    pub is_best: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ModelFamily::Sarimax).unwrap(), "\"SARIMAX\"");
        let family: ModelFamily = serde_json::from_str("\"ARIMA\"").unwrap();
        assert_eq!(family, ModelFamily::Arima);
        assert!(serde_json::from_str::<ModelFamily>("\"PROPHET\"").is_err());
    }

    #[test]
    fn test_default_family_is_sarimax() {
        assert_eq!(ModelFamily::default(), ModelFamily::Sarimax);
        assert_eq!(ModelFamily::Sarima.to_string(), "SARIMA");
    }
}
