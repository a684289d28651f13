pub mod datasets;
pub mod error;
pub mod models;
pub mod stats;
pub mod workflow;

#[cfg(feature = "desktop")]
mod commands;

pub use datasets::{DatasetProvider, SyntheticDatasets};
pub use error::{LabError, LabResult};
pub use models::{
    ActiveView, CorrelationBand, LabSettings, ModelCandidate, ModelFamily, Series, StepView,
    SummaryStatistics, WorkflowState, WorkflowStep,
};
pub use stats::{build_correlation_color, compute_summary};
pub use workflow::{WorkflowController, WorkflowRegistry, WorkflowSession};

#[cfg(feature = "desktop")]
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

/// Tauri plugin exposing the lab commands to the frontend.
/// Datasets are generated once here and shared by every workflow session.
#[cfg(feature = "desktop")]
pub fn init<R: Runtime>(settings: LabSettings) -> LabResult<TauriPlugin<R>> {
    use std::sync::Arc;

    let registry = Arc::new(WorkflowRegistry::from_settings(&settings)?);
    log::info!("Model lab initialized (seed: {:?})", settings.dataset_seed);

    Ok(Builder::new("model-lab")
        .invoke_handler(tauri::generate_handler![
            // Workflow commands
            commands::workflow::open_workflow,
            commands::workflow::close_workflow,
            commands::workflow::get_workflow_state,
            commands::workflow::select_step,
            commands::workflow::advance_workflow,
            commands::workflow::select_model,
            commands::workflow::get_active_view,
            // Statistics commands
            commands::statistics::compute_series_summary,
            commands::statistics::classify_correlation,
        ])
        .setup(move |app, _api| {
            app.manage(registry);
            Ok(())
        })
        .build())
}

/// Log plugin for the host app: stdout and the webview console
#[cfg(feature = "desktop")]
pub fn log_plugin<R: Runtime>() -> TauriPlugin<R> {
    use tauri_plugin_log::{Target, TargetKind};

    tauri_plugin_log::Builder::new()
        .level(log::LevelFilter::Info)
        .clear_targets()
        .target(Target::new(TargetKind::Stdout))
        .target(Target::new(TargetKind::Webview))
        .build()
}
