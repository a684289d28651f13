// Workflow session registry
// Keeps one controller per open workflow; every access goes through one lock

use log::{info, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::controller::WorkflowController;
use crate::datasets::{DatasetProvider, SyntheticDatasets};
use crate::error::{LabError, LabResult};
use crate::models::{LabSettings, WorkflowState};

/// Handle returned to the frontend when a workflow is opened
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSession {
    pub id: String,        // Session identifier (UUID)
    pub opened_at: String, // ISO 8601
    pub state: WorkflowState,
}

struct SessionEntry {
    opened_at: String,
    controller: WorkflowController,
}

pub struct WorkflowRegistry {
    datasets: Arc<dyn DatasetProvider>,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl WorkflowRegistry {
    pub fn new(datasets: Arc<dyn DatasetProvider>) -> Self {
        Self {
            datasets,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Registry backed by freshly generated synthetic datasets
    pub fn from_settings(settings: &LabSettings) -> LabResult<Self> {
        let datasets = SyntheticDatasets::generate(settings)?;
        Ok(Self::new(Arc::new(datasets)))
    }

    /// Open an isolated workflow instance
    pub fn open(&self) -> WorkflowSession {
        let id = uuid::Uuid::new_v4().to_string();
        let opened_at = chrono::Utc::now().to_rfc3339();
        let controller = WorkflowController::new(self.datasets.clone());
        let state = *controller.state();

        self.sessions.lock().insert(
            id.clone(),
            SessionEntry {
                opened_at: opened_at.clone(),
                controller,
            },
        );

        info!("Opened workflow session {}", id);
        WorkflowSession { id, opened_at, state }
    }

    /// Dismiss a workflow, dropping its state
    pub fn close(&self, id: &str) -> LabResult<()> {
        match self.sessions.lock().remove(id) {
            Some(_) => {
                info!("Closed workflow session {}", id);
                Ok(())
            }
            None => {
                warn!("Tried to close unknown workflow session {}", id);
                Err(LabError::SessionNotFound(id.to_string()))
            }
        }
    }

    pub fn session(&self, id: &str) -> LabResult<WorkflowSession> {
        let sessions = self.sessions.lock();
        let entry = sessions
            .get(id)
            .ok_or_else(|| LabError::SessionNotFound(id.to_string()))?;
        Ok(WorkflowSession {
            id: id.to_string(),
            opened_at: entry.opened_at.clone(),
            state: *entry.controller.state(),
        })
    }

    /// Run `f` against one session's controller while holding the lock
    pub fn with_controller<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut WorkflowController) -> LabResult<T>,
    ) -> LabResult<T> {
        let mut sessions = self.sessions.lock();
        let entry = sessions
            .get_mut(id)
            .ok_or_else(|| LabError::SessionNotFound(id.to_string()))?;
        f(&mut entry.controller)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelFamily, WorkflowStep};
    use std::thread;

    fn registry() -> WorkflowRegistry {
        WorkflowRegistry::from_settings(&LabSettings::seeded(21)).unwrap()
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = registry();
        let a = registry.open();
        let b = registry.open();
        assert_ne!(a.id, b.id);

        registry
            .with_controller(&a.id, |c| {
                c.select_step(6)?;
                c.select_model(ModelFamily::Arima);
                Ok(())
            })
            .unwrap();

        let a_state = registry.session(&a.id).unwrap().state;
        let b_state = registry.session(&b.id).unwrap().state;
        assert_eq!(a_state.active_step, WorkflowStep::Evaluation);
        assert!(a_state.completed);
        assert_eq!(b_state, WorkflowState::default());
    }

    #[test]
    fn test_unknown_session() {
        let registry = registry();
        assert!(matches!(
            registry.session("missing"),
            Err(LabError::SessionNotFound(_))
        ));
        assert!(registry.close("missing").is_err());
        assert!(registry.with_controller("missing", |c| Ok(*c.advance())).is_err());
    }

    #[test]
    fn test_close_drops_state() {
        let registry = registry();
        let session = registry.open();
        assert_eq!(registry.len(), 1);
        registry.close(&session.id).unwrap();
        assert!(registry.is_empty());
        assert!(registry.session(&session.id).is_err());
    }

    #[test]
    fn test_failed_transition_leaves_state() {
        let registry = registry();
        let session = registry.open();
        registry.with_controller(&session.id, |c| Ok(*c.advance())).unwrap();
        let result = registry.with_controller(&session.id, |c| c.select_step(0).map(|s| *s));
        assert!(result.is_err());
        assert_eq!(
            registry.session(&session.id).unwrap().state.active_step,
            WorkflowStep::Correlations
        );
    }

    #[test]
    fn test_concurrent_advances_are_serialized() {
        let registry = Arc::new(registry());
        let session = registry.open();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                let id = session.id.clone();
                thread::spawn(move || {
                    registry.with_controller(&id, |c| Ok(*c.advance())).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = registry.session(&session.id).unwrap().state;
        assert_eq!(state.active_step, WorkflowStep::Training);
        assert!(!state.completed);
    }
}
