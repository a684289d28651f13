// Statistics Tauri commands - stateless helpers for ad-hoc series
use log::debug;

use crate::models::{CorrelationBand, Series, SummaryDisplay, SummaryStatistics};
use crate::stats::{build_correlation_color, compute_summary};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummaryResponse {
    pub summary: SummaryStatistics,
    pub display: SummaryDisplay,
}

/// Summarize one field of a caller-supplied series
#[tauri::command]
pub fn compute_series_summary(series: Series, field: String) -> SeriesSummaryResponse {
    debug!("Summarizing field '{}' over {} observations", field, series.len());
    let summary = compute_summary(&series, &field);
    SeriesSummaryResponse {
        display: summary.display(),
        summary,
    }
}

#[tauri::command]
pub fn classify_correlation(value: f64) -> CorrelationBand {
    build_correlation_color(value)
}
