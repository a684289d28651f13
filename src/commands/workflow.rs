// Workflow Tauri commands
// Every command returns the resulting state so the frontend can re-render

use std::sync::Arc;
use tauri::State;

use crate::models::{ActiveView, ModelFamily, WorkflowState};
use crate::workflow::{WorkflowRegistry, WorkflowSession};

// ============================================
// Session Commands
// ============================================

/// Open a new workflow at step 1
#[tauri::command]
pub fn open_workflow(registry: State<'_, Arc<WorkflowRegistry>>) -> WorkflowSession {
    registry.open()
}

/// Dismiss a workflow and drop its state
#[tauri::command]
pub fn close_workflow(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
) -> Result<(), String> {
    Ok(registry.close(&session_id)?)
}

#[tauri::command]
pub fn get_workflow_state(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
) -> Result<WorkflowState, String> {
    Ok(registry.session(&session_id)?.state)
}

// ============================================
// Transition Commands
// ============================================

/// Jump to a step from the tab strip
#[tauri::command]
pub fn select_step(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
    step: i64,
) -> Result<WorkflowState, String> {
    let state = registry.with_controller(&session_id, |c| c.select_step(step).map(|s| *s))?;
    Ok(state)
}

/// Primary action: Analyze or Redo
#[tauri::command]
pub fn advance_workflow(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
) -> Result<WorkflowState, String> {
    let state = registry.with_controller(&session_id, |c| Ok(*c.advance()))?;
    Ok(state)
}

#[tauri::command]
pub fn select_model(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
    model: ModelFamily,
) -> Result<WorkflowState, String> {
    let state = registry.with_controller(&session_id, |c| Ok(*c.select_model(model)))?;
    Ok(state)
}

/// Data for the active step's canvas
#[tauri::command]
pub fn get_active_view(
    registry: State<'_, Arc<WorkflowRegistry>>,
    session_id: String,
) -> Result<ActiveView, String> {
    let view = registry.with_controller(&session_id, |c| Ok(c.active_view()))?;
    Ok(view)
}
