// Time series data models
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BOOKINGS: &str = "bookings";
pub const REVENUE: &str = "revenue";
pub const TREND: &str = "trend";
pub const SEASONAL: &str = "seasonal";
pub const RESIDUAL: &str = "residual";
pub const ACTUAL: &str = "actual";
pub const FORECAST: &str = "forecast";

/// One time-ordered observation with any number of named numeric fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Observation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>, // Day / period number (1-based)
    #[serde(flatten)]
    pub fields: BTreeMap<String, f64>,
}

impl Observation {
    pub fn new(index: u32) -> Self {
        Self {
            index: Some(index),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with(mut self, field: &str, value: f64) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }
}

/// Ordered sequence of observations. Order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Single-field series indexed 1..=n
    pub fn from_values(field: &str, values: &[f64]) -> Self {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, v)| Observation::new(i as u32 + 1).with(field, *v))
            .collect();
        Self { observations }
    }

    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Values of one field in series order. Observations missing the field are skipped.
    pub fn values(&self, field: &str) -> Vec<f64> {
        self.observations.iter().filter_map(|o| o.get(field)).collect()
    }

    /// Two fields taken from the same observations. Observations missing
    /// either field are dropped, so the pairs never shift.
    pub fn paired_values(&self, first: &str, second: &str) -> (Vec<f64>, Vec<f64>) {
        self.observations
            .iter()
            .filter_map(|o| Some((o.get(first)?, o.get(second)?)))
            .unzip()
    }
}
