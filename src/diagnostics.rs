//! Run statistics returned alongside the filled depth map.
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of a run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Counters collected while propagating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagationStats {
    /// Pixels known before the run (queued at priority 0).
    pub seeds: usize,
    /// Pixels filled by a prediction.
    pub filled: usize,
    /// Pixels still unknown at the end (not reachable from any seed).
    pub unreachable: usize,
    /// Frontier entries popped.
    pub pops: usize,
    /// Failed predictions.
    pub failed_predictions: usize,
    /// Frontier entries re-queued at lower priority.
    pub deferrals: usize,
    /// Largest number of deferrals accumulated by a single entry.
    pub deepest_deferral: u32,
}

/// Summary of a completed run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InpaintReport {
    pub width: usize,
    pub height: usize,
    pub predictor: String,
    pub stats: PropagationStats,
    pub timing: TimingBreakdown,
}
