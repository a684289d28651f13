// Model comparison helpers over candidate scores

use crate::models::training::{CandidateComparison, ModelCandidate, ModelFamily, ModelMetric};

/// Baseline every candidate is compared against
pub const BASELINE_FAMILY: ModelFamily = ModelFamily::Arima;

/// Best candidate for a metric. Candidates missing the metric or carrying a
/// non-finite value are skipped. Ties keep the earlier candidate.
pub fn best_by(candidates: &[ModelCandidate], metric: ModelMetric) -> Option<&ModelCandidate> {
    let mut best: Option<(&ModelCandidate, f64)> = None;
    for candidate in candidates {
        let Some(value) = metric.value_of(candidate).filter(|v| v.is_finite()) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, current)) if metric.higher_is_better() => value > current,
            Some((_, current)) => value < current,
        };
        if better {
            best = Some((candidate, value));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Relative AIC reduction of `candidate` against `baseline`, in percent
pub fn aic_improvement(baseline: &ModelCandidate, candidate: &ModelCandidate) -> f64 {
    if baseline.aic == 0.0 {
        return 0.0;
    }
    (baseline.aic - candidate.aic) / baseline.aic * 100.0
}

/// Forecast accuracy as 100 minus WMAPE
pub fn accuracy_percent(candidate: &ModelCandidate) -> f64 {
    100.0 - candidate.wmape
}

/// Annotate every candidate against the baseline and the best model (lowest WMAPE).
/// With no baseline in the set, improvements are reported as zero.
pub fn compare_candidates(candidates: &[ModelCandidate]) -> Vec<CandidateComparison> {
    let baseline = candidates.iter().find(|c| c.name == BASELINE_FAMILY);
    let best = best_by(candidates, ModelMetric::Wmape).map(|c| c.name);

    candidates
        .iter()
        .map(|candidate| CandidateComparison {
            candidate: candidate.clone(),
            aic_improvement_percent: baseline
                .map(|b| aic_improvement(b, candidate))
                .unwrap_or(0.0),
            accuracy_percent: accuracy_percent(candidate),
            is_baseline: candidate.name == BASELINE_FAMILY,
            is_best: Some(candidate.name) == best,
        })
        .collect()
}
