// Error types shared by the workflow and statistics modules
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    /// Step index outside 1..=6. The workflow state is left untouched.
    #[error("Invalid step index {0}: expected a value between 1 and 6")]
    InvalidStepIndex(i64),

    #[error("Invalid correlation matrix: {0}")]
    InvalidCorrelationMatrix(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Workflow session not found: {0}")]
    SessionNotFound(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LabResult<T> = Result<T, LabError>;

impl From<LabError> for String {
    fn from(err: LabError) -> Self {
        err.to_string()
    }
}
