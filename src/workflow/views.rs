// Step view builders
// One pure function per step, looked up by step index. Builders only read
// from the provider and never modify it.

use crate::datasets::DatasetProvider;
use crate::models::*;
use crate::stats;

type ViewBuilder = fn(&dyn DatasetProvider) -> StepView;

/// Indexed by `step.index() - 1`
const STEP_VIEWS: [ViewBuilder; 6] = [
    ingest_view,
    correlations_view,
    stationarity_view,
    decomposition_view,
    training_view,
    evaluation_view,
];

pub fn build_step_view(step: WorkflowStep, datasets: &dyn DatasetProvider) -> StepView {
    STEP_VIEWS[(step.index() - 1) as usize](datasets)
}

fn ingest_view(datasets: &dyn DatasetProvider) -> StepView {
    let series = datasets.ingest_series();
    let summary = stats::compute_summary(series, BOOKINGS);

    StepView::Ingest(IngestView {
        series: series.clone(),
        field: BOOKINGS.to_string(),
        observation_count: series.len(),
        summary,
        summary_display: summary.display(),
    })
}

fn correlations_view(datasets: &dyn DatasetProvider) -> StepView {
    let matrix = datasets.correlations();

    StepView::Correlations(CorrelationsView {
        matrix: matrix.clone(),
        cells: stats::correlation_cells(matrix),
        strongest: stats::strongest_correlation(matrix),
    })
}

fn stationarity_view(datasets: &dyn DatasetProvider) -> StepView {
    // Level = trend + seasonal + residual
    let level: Vec<f64> = datasets
        .decomposition()
        .observations()
        .iter()
        .map(|o| {
            o.get(TREND).unwrap_or(0.0) + o.get(SEASONAL).unwrap_or(0.0) + o.get(RESIDUAL).unwrap_or(0.0)
        })
        .collect();
    let differenced = stats::difference(&level, 1);

    StepView::Stationarity(StationarityView {
        level,
        differenced,
        tests: datasets.stationarity().clone(),
    })
}

fn decomposition_view(datasets: &dyn DatasetProvider) -> StepView {
    StepView::Decomposition(DecompositionView {
        components: datasets.decomposition().clone(),
        analyses: datasets.decomposition_analysis().to_vec(),
    })
}

fn training_view(datasets: &dyn DatasetProvider) -> StepView {
    let candidates = datasets.model_candidates();

    StepView::Training(TrainingView {
        baseline: stats::BASELINE_FAMILY,
        comparisons: stats::compare_candidates(candidates),
        best: stats::best_by(candidates, ModelMetric::Wmape).map(|c| c.name),
    })
}

fn evaluation_view(datasets: &dyn DatasetProvider) -> StepView {
    let best = stats::best_by(datasets.model_candidates(), ModelMetric::Wmape).cloned();
    let forecast = datasets.evaluation_series();
    let (actual, predicted) = forecast.paired_values(ACTUAL, FORECAST);

    StepView::Evaluation(EvaluationView {
        accuracy_percent: best.as_ref().map(stats::accuracy_percent),
        best,
        measured: stats::forecast_accuracy(&actual, &predicted),
        forecast: forecast.clone(),
        residual_histogram: datasets.residual_histogram().to_vec(),
    })
}
