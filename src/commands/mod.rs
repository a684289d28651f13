// Tauri command handlers - one file per domain
pub mod statistics;
pub mod workflow;
