// Stationarity and decomposition display data
use serde::{Deserialize, Serialize};

/// Significance level for the ADF p-value
pub const STATIONARITY_ALPHA: f64 = 0.05;

/// Augmented Dickey-Fuller result as supplied by the dataset provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationarityReport {
    pub title: String,
    pub differencing_order: u32,
    pub adf_statistic: f64,
    pub p_value: f64,
    pub confidence_percent: Option<f64>,
}

impl StationarityReport {
    pub fn is_stationary(&self) -> bool {
        self.p_value < STATIONARITY_ALPHA
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_stationary() {
            "Stationary"
        } else {
            "Non-Stationary"
        }
    }
}

/// Level series test and the differenced series test, side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationarityComparison {
    pub original: StationarityReport,
    pub differenced: StationarityReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecompositionComponent {
    Trend,
    Seasonality,
    Residuals,
}

/// Headline findings for one decomposition component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnalysis {
    pub component: DecompositionComponent,
    pub label: String,
    pub primary_metric: (String, String),   // (title, value)
    pub secondary_metric: (String, String), // (title, value)
    pub analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(p_value: f64) -> StationarityReport {
        StationarityReport {
            title: "Original Series".to_string(),
            differencing_order: 0,
            adf_statistic: -1.0,
            p_value,
            confidence_percent: None,
        }
    }

    #[test]
    fn test_stationarity_threshold() {
        assert!(report(0.03).is_stationary());
        assert!(!report(0.05).is_stationary());
        assert!(!report(0.85).is_stationary());
        assert_eq!(report(0.85).status_label(), "Non-Stationary");
    }
}
