// Dataset provider: the read-only data each step displays
pub mod reference;
pub mod synthetic;

pub use synthetic::SyntheticDatasets;

use crate::models::*;

/// Source of every dataset the lab shows. Implementations are read-only.
pub trait DatasetProvider: Send + Sync {
    /// Bookings and revenue per day
    fn ingest_series(&self) -> &Series;
    /// Trend, seasonal and residual components per period
    fn decomposition(&self) -> &Series;
    /// Actual and forecast per period
    fn evaluation_series(&self) -> &Series;
    fn correlations(&self) -> &CorrelationMatrix;
    fn model_candidates(&self) -> &[ModelCandidate];
    fn stationarity(&self) -> &StationarityComparison;
    fn decomposition_analysis(&self) -> &[ComponentAnalysis];
    fn residual_histogram(&self) -> &[HistogramBucket];
}
