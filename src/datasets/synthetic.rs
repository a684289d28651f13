// Synthetic dataset generation for the lab
// Shapes follow the demo data: a noisy sine for bookings, a linear trend with
// yearly seasonality for decomposition, and a phase-shifted forecast for evaluation

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use super::reference::{
    CORRELATION_GRID, CORRELATION_LABELS, DECOMPOSITION_ANALYSES, MODEL_CANDIDATES,
    RESIDUAL_HISTOGRAM, STATIONARITY,
};
use super::DatasetProvider;
use crate::error::LabResult;
use crate::models::*;

/// Datasets generated once and served read-only
#[derive(Debug, Clone)]
pub struct SyntheticDatasets {
    ingest: Series,
    decomposition: Series,
    evaluation: Series,
    correlations: CorrelationMatrix,
}

impl SyntheticDatasets {
    pub fn generate(settings: &LabSettings) -> LabResult<Self> {
        settings.validate()?;

        let mut rng = match settings.dataset_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ingest = generate_ingest(&mut rng, settings.ingest_points);
        let decomposition = generate_decomposition(&mut rng, settings.decomposition_points);
        let evaluation = generate_evaluation(settings.evaluation_points);

        let correlations = CorrelationMatrix::new(
            CORRELATION_LABELS.iter().map(|l| l.to_string()).collect(),
            CORRELATION_GRID.iter().map(|row| row.to_vec()).collect(),
        )?;

        debug!(
            "Generated datasets: {} ingest, {} decomposition, {} evaluation points (seed: {:?})",
            ingest.len(),
            decomposition.len(),
            evaluation.len(),
            settings.dataset_seed
        );

        Ok(Self {
            ingest,
            decomposition,
            evaluation,
            correlations,
        })
    }
}

/// Uniform noise in [-half_width, half_width)
fn noise(rng: &mut StdRng, width: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * width
}

fn generate_ingest(rng: &mut StdRng, points: usize) -> Series {
    let mut series = Series::default();
    for i in 0..points {
        let x = i as f64;
        let bookings = 80.0 + (x / 3.0).sin() * 15.0 + noise(rng, 10.0);
        let revenue = 120.0 + (x / 4.0).cos() * 20.0 + noise(rng, 15.0);
        series.push(
            Observation::new(i as u32 + 1)
                .with(BOOKINGS, bookings)
                .with(REVENUE, revenue),
        );
    }
    series
}

fn generate_decomposition(rng: &mut StdRng, points: usize) -> Series {
    let mut series = Series::default();
    for i in 0..points {
        let x = i as f64;
        series.push(
            Observation::new(i as u32 + 1)
                .with(TREND, 100.0 + x * 2.0)
                .with(SEASONAL, (x / 12.0 * PI * 2.0).sin() * 10.0)
                .with(RESIDUAL, noise(rng, 8.0)),
        );
    }
    series
}

fn generate_evaluation(points: usize) -> Series {
    let mut series = Series::default();
    for i in 0..points {
        let x = i as f64;
        series.push(
            Observation::new(i as u32 + 1)
                .with(ACTUAL, 110.0 + (x / 3.0).sin() * 18.0)
                .with(FORECAST, 108.0 + (x / 3.0 + 0.1).sin() * 17.0),
        );
    }
    series
}

impl DatasetProvider for SyntheticDatasets {
    fn ingest_series(&self) -> &Series {
        &self.ingest
    }

    fn decomposition(&self) -> &Series {
        &self.decomposition
    }

    fn evaluation_series(&self) -> &Series {
        &self.evaluation
    }

    fn correlations(&self) -> &CorrelationMatrix {
        &self.correlations
    }

    fn model_candidates(&self) -> &[ModelCandidate] {
        &MODEL_CANDIDATES
    }

    fn stationarity(&self) -> &StationarityComparison {
        &STATIONARITY
    }

    fn decomposition_analysis(&self) -> &[ComponentAnalysis] {
        &DECOMPOSITION_ANALYSES
    }

    fn residual_histogram(&self) -> &[HistogramBucket] {
        &RESIDUAL_HISTOGRAM
    }
}
