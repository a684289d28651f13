// Statistics engine: pure, stateless computations over series and score tables
pub mod accuracy;
pub mod comparison;
pub mod summary;

pub use accuracy::{difference, forecast_accuracy, residual_histogram, residuals};
pub use comparison::{accuracy_percent, aic_improvement, best_by, compare_candidates, BASELINE_FAMILY};
pub use summary::{build_correlation_color, compute_summary, correlation_cells, strongest_correlation, summarize};
