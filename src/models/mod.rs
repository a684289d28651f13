// Data models (structs)
pub mod diagnostics;
pub mod series;
pub mod settings;
pub mod statistics;
pub mod training;
pub mod views;
pub mod workflow;

pub use diagnostics::*;
pub use series::*;
pub use settings::*;
pub use statistics::*;
pub use training::*;
pub use views::*;
pub use workflow::*;
