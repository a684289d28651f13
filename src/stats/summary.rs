// Descriptive statistics and correlation classification

use crate::models::series::Series;
use crate::models::statistics::{CorrelationBand, CorrelationCell, CorrelationMatrix, SummaryStatistics};
use crate::models::views::CorrelationHighlight;

/// Compute mean, population std dev, min and max of one field.
///
/// An empty series (or a field with no finite values) yields the all-zero
/// summary instead of an error, so the ingest cards always have something to
/// show. Non-finite values are ignored. Nothing is cached: call again whenever
/// the series changes.
pub fn compute_summary(series: &Series, field: &str) -> SummaryStatistics {
    summarize(&series.values(field))
}

/// Same as `compute_summary` over a bare slice. Non-finite values are ignored.
pub fn summarize(values: &[f64]) -> SummaryStatistics {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return SummaryStatistics::default();
    }

    let n = values.len() as f64;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Floating point summation can land a hair outside [min, max] for constant series
    let mean = (values.iter().sum::<f64>() / n).clamp(min, max);

    // Population variance: divide by N, not N - 1
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    SummaryStatistics { mean, std_dev, min, max }
}

/// Classify a coefficient into its heatmap band.
/// Bands are tested top to bottom and the first match wins, so exactly 0.5
/// is ModeratePositive and exactly -0.5 is StrongNegative.
pub fn build_correlation_color(value: f64) -> CorrelationBand {
    if value >= 1.0 {
        CorrelationBand::Perfect
    } else if value >= 0.5 {
        CorrelationBand::ModeratePositive
    } else if value > -0.5 && value < 0.5 {
        CorrelationBand::Weak
    } else if value <= -0.5 {
        CorrelationBand::StrongNegative
    } else {
        CorrelationBand::Unclassified
    }
}

/// Row-major cells with their bands
pub fn correlation_cells(matrix: &CorrelationMatrix) -> Vec<CorrelationCell> {
    let labels = matrix.labels();
    matrix
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| CorrelationCell {
                row: labels[i].clone(),
                column: labels[j].clone(),
                value,
                band: build_correlation_color(value),
            })
        })
        .collect()
}

/// Off-diagonal pair with the largest absolute coefficient.
/// Ties keep the first pair in row-major order.
pub fn strongest_correlation(matrix: &CorrelationMatrix) -> Option<CorrelationHighlight> {
    let labels = matrix.labels();
    let mut best: Option<(usize, usize, f64)> = None;

    for (i, row) in matrix.rows().iter().enumerate() {
        for (j, &value) in row.iter().enumerate().skip(i + 1) {
            let stronger = match best {
                Some((_, _, current)) => value.abs() > current.abs(),
                None => true,
            };
            if stronger {
                best = Some((i, j, value));
            }
        }
    }

    best.map(|(i, j, value)| CorrelationHighlight {
        first: labels[i].clone(),
        second: labels[j].clone(),
        value,
        band: build_correlation_color(value),
    })
}
