// Lab settings data model
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};

const MAX_POINTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSettings {
    /// Seed for the synthetic datasets. None draws fresh noise every time.
    pub dataset_seed: Option<u64>,
    pub ingest_points: usize,
    pub decomposition_points: usize,
    pub evaluation_points: usize,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            dataset_seed: None,
            ingest_points: 30,
            decomposition_points: 24,
            evaluation_points: 18,
        }
    }
}

impl LabSettings {
    /// Deterministic settings, mostly for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            dataset_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing keys fall back to defaults.
    pub fn from_json(json: &str) -> LabResult<Self> {
        let settings: LabSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> LabResult<()> {
        let counts = [
            ("ingest_points", self.ingest_points),
            ("decomposition_points", self.decomposition_points),
            ("evaluation_points", self.evaluation_points),
        ];
        for (name, value) in counts {
            if value == 0 || value > MAX_POINTS {
                warn!("Rejected settings: {} = {}", name, value);
                return Err(LabError::InvalidSettings(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_POINTS, value
                )));
            }
        }
        Ok(())
    }
}
