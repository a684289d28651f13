// Forecast error metrics and residual diagnostics

use crate::models::statistics::{ForecastAccuracy, HistogramBucket};

use super::summary::summarize;

const SIGMA_LABELS: [&str; 7] = ["-3σ", "-2σ", "-1σ", "0σ", "+1σ", "+2σ", "+3σ"];

/// WMAPE, RMSE and MAE over paired actual and forecast values.
/// Extra values on the longer side are ignored; no pairs yields zeros.
pub fn forecast_accuracy(actual: &[f64], forecast: &[f64]) -> ForecastAccuracy {
    let pairs: Vec<(f64, f64)> = actual
        .iter()
        .zip(forecast.iter())
        .map(|(a, f)| (*a, *f))
        .collect();

    if pairs.is_empty() {
        return ForecastAccuracy::default();
    }

    let n = pairs.len() as f64;
    let abs_error_sum: f64 = pairs.iter().map(|(a, f)| (a - f).abs()).sum();
    let squared_error_sum: f64 = pairs.iter().map(|(a, f)| (a - f).powi(2)).sum();
    let actual_sum: f64 = pairs.iter().map(|(a, _)| a.abs()).sum();

    let wmape = if actual_sum > 0.0 {
        abs_error_sum / actual_sum * 100.0
    } else {
        0.0
    };

    ForecastAccuracy {
        wmape,
        rmse: (squared_error_sum / n).sqrt(),
        mae: abs_error_sum / n,
    }
}

/// Actual minus forecast, pairwise
pub fn residuals(actual: &[f64], forecast: &[f64]) -> Vec<f64> {
    actual.iter().zip(forecast.iter()).map(|(a, f)| a - f).collect()
}

/// Lagged difference `x[t] - x[t - lag]`. Empty when the lag covers the series.
pub fn difference(values: &[f64], lag: usize) -> Vec<f64> {
    if lag == 0 {
        return values.to_vec();
    }
    if lag >= values.len() {
        return Vec::new();
    }
    values.windows(lag + 1).map(|w| w[lag] - w[0]).collect()
}

/// Count residuals per whole standard deviation from zero, clamped to ±3σ
pub fn residual_histogram(residuals: &[f64]) -> Vec<HistogramBucket> {
    let finite: Vec<f64> = residuals.iter().copied().filter(|r| r.is_finite()).collect();
    let mut counts = [0u32; 7];
    let sigma = summarize(&finite).std_dev;

    for r in &finite {
        let z = if sigma > 0.0 { (r / sigma).round() } else { 0.0 };
        let slot = (z.clamp(-3.0, 3.0) as i32 + 3) as usize;
        counts[slot] += 1;
    }

    SIGMA_LABELS
        .iter()
        .zip(counts.iter())
        .map(|(label, count)| HistogramBucket::new(label, *count))
        .collect()
}
