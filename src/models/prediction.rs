//! Prediction result model

use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// Result returned by the IA service and relayed unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    /// Class label -> probability, in the order the IA service sent them
    pub probability: IndexMap<String, f64>,
    pub confidence: f64,
}
