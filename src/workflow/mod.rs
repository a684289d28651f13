// Workflow module: step state machine, per-step views, session registry
pub mod controller;
pub mod registry;
pub mod views;

pub use controller::WorkflowController;
pub use registry::{WorkflowRegistry, WorkflowSession};
pub use views::build_step_view;
