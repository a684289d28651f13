// Workflow state data models
use serde::{Deserialize, Serialize};
use std::fmt;

use super::training::ModelFamily;
use crate::error::{LabError, LabResult};

pub const TOTAL_STEPS: u8 = 6;

/// The six ordered stages of the lab. Serialized as the 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum WorkflowStep {
    Ingest = 1,
    Correlations = 2,
    Stationarity = 3,
    Decomposition = 4,
    Training = 5,
    Evaluation = 6,
}

impl WorkflowStep {
    pub const ALL: [WorkflowStep; 6] = [
        WorkflowStep::Ingest,
        WorkflowStep::Correlations,
        WorkflowStep::Stationarity,
        WorkflowStep::Decomposition,
        WorkflowStep::Training,
        WorkflowStep::Evaluation,
    ];

    pub const FIRST: WorkflowStep = WorkflowStep::Ingest;
    pub const LAST: WorkflowStep = WorkflowStep::Evaluation;

    pub fn from_index(index: i64) -> LabResult<Self> {
        if (1..=TOTAL_STEPS as i64).contains(&index) {
            Ok(Self::ALL[(index - 1) as usize])
        } else {
            Err(LabError::InvalidStepIndex(index))
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStep::Ingest => "Ingest",
            WorkflowStep::Correlations => "Correlations",
            WorkflowStep::Stationarity => "Stationarity",
            WorkflowStep::Decomposition => "Decomposition",
            WorkflowStep::Training => "Training",
            WorkflowStep::Evaluation => "Evaluation",
        }
    }

    /// Following step, saturating at Evaluation
    pub fn next(&self) -> Self {
        let next = (self.index() + 1).min(TOTAL_STEPS);
        Self::ALL[(next - 1) as usize]
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index(), self.label())
    }
}

impl From<WorkflowStep> for u8 {
    fn from(step: WorkflowStep) -> Self {
        step.index()
    }
}

impl TryFrom<i64> for WorkflowStep {
    type Error = LabError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Primary action button meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryAction {
    Analyze,
    Redo,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Analyze => "Analyze",
            PrimaryAction::Redo => "Redo",
        }
    }
}

/// View state of one workflow instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub active_step: WorkflowStep,
    pub selected_model: ModelFamily,
    pub completed: bool, // Story complete; flips the primary action to Redo
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            active_step: WorkflowStep::FIRST,
            selected_model: ModelFamily::Sarimax,
            completed: false,
        }
    }
}

impl WorkflowState {
    pub fn primary_action(&self) -> PrimaryAction {
        if self.completed {
            PrimaryAction::Redo
        } else {
            PrimaryAction::Analyze
        }
    }

    pub fn primary_action_label(&self) -> &'static str {
        self.primary_action().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(WorkflowStep::from_index(1).unwrap(), WorkflowStep::Ingest);
        assert_eq!(WorkflowStep::from_index(6).unwrap(), WorkflowStep::Evaluation);
        assert!(matches!(
            WorkflowStep::from_index(0),
            Err(LabError::InvalidStepIndex(0))
        ));
        assert!(matches!(
            WorkflowStep::from_index(7),
            Err(LabError::InvalidStepIndex(7))
        ));
        assert!(WorkflowStep::from_index(-3).is_err());
    }

    #[test]
    fn test_next_saturates() {
        assert_eq!(WorkflowStep::Ingest.next(), WorkflowStep::Correlations);
        assert_eq!(WorkflowStep::Training.next(), WorkflowStep::Evaluation);
        assert_eq!(WorkflowStep::Evaluation.next(), WorkflowStep::Evaluation);
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<&str> = WorkflowStep::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Ingest", "Correlations", "Stationarity", "Decomposition", "Training", "Evaluation"]
        );
        for (i, step) in WorkflowStep::ALL.iter().enumerate() {
            assert_eq!(step.index() as usize, i + 1);
        }
    }

    #[test]
    fn test_state_serializes_step_as_integer() {
        let state = WorkflowState::default();
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "activeStep": 1, "selectedModel": "SARIMAX", "completed": false })
        );

        let bad = serde_json::json!({ "activeStep": 9, "selectedModel": "ARIMA", "completed": false });
        assert!(serde_json::from_value::<WorkflowState>(bad).is_err());
    }

    #[test]
    fn test_primary_action_label() {
        let mut state = WorkflowState::default();
        assert_eq!(state.primary_action_label(), "Analyze");
        state.completed = true;
        assert_eq!(state.primary_action_label(), "Redo");
    }
}
