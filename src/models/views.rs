// Per-step view data handed to the rendering layer
use serde::{Deserialize, Serialize};

use super::diagnostics::{ComponentAnalysis, StationarityComparison};
use super::series::Series;
use super::statistics::{
    CorrelationBand, CorrelationCell, CorrelationMatrix, ForecastAccuracy, HistogramBucket,
    SummaryDisplay, SummaryStatistics,
};
use super::training::{CandidateComparison, ModelCandidate, ModelFamily};
use super::workflow::WorkflowStep;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestView {
    pub series: Series,
    pub field: String,
    pub observation_count: usize,
    pub summary: SummaryStatistics,
    pub summary_display: SummaryDisplay,
}

/// Strongest off-diagonal relationship in the matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationHighlight {
    pub first: String,
    pub second: String,
    pub value: f64,
    pub band: CorrelationBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationsView {
    pub matrix: CorrelationMatrix,
    pub cells: Vec<CorrelationCell>,
    pub strongest: Option<CorrelationHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationarityView {
    pub level: Vec<f64>,
    pub differenced: Vec<f64>,
    pub tests: StationarityComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionView {
    pub components: Series,
    pub analyses: Vec<ComponentAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingView {
    pub baseline: ModelFamily,
    pub comparisons: Vec<CandidateComparison>,
    pub best: Option<ModelFamily>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    pub best: Option<ModelCandidate>,
    pub accuracy_percent: Option<f64>,
    pub forecast: Series,
    pub measured: ForecastAccuracy, // Recomputed from the forecast pairs above
    pub residual_histogram: Vec<HistogramBucket>,
}

/// Data slice for exactly one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StepView {
    Ingest(IngestView),
    Correlations(CorrelationsView),
    Stationarity(StationarityView),
    Decomposition(DecompositionView),
    Training(TrainingView),
    Evaluation(EvaluationView),
}

impl StepView {
    pub fn step(&self) -> WorkflowStep {
        match self {
            StepView::Ingest(_) => WorkflowStep::Ingest,
            StepView::Correlations(_) => WorkflowStep::Correlations,
            StepView::Stationarity(_) => WorkflowStep::Stationarity,
            StepView::Decomposition(_) => WorkflowStep::Decomposition,
            StepView::Training(_) => WorkflowStep::Training,
            StepView::Evaluation(_) => WorkflowStep::Evaluation,
        }
    }
}

/// Everything the canvas needs for the active step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveView {
    pub step: WorkflowStep,
    pub step_label: String,
    pub selected_model: ModelFamily,
    pub primary_action_label: String,
    pub data: StepView,
}
