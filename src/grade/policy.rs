#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

/// Constrains `score` into `[0, max_points]`.
pub fn clamp(score: f64, max_points: f64) -> f64 {
    score.min(max_points).max(0.0)
}

/// How a question turns test case outcomes into points.
///
/// Both variants run through the same signed-delta accumulation; they only
/// differ in the baseline and in which outcome carries the delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoringPolicy {
    /// Start at `max_points` and subtract `penalty` for every failed case.
    FullCreditThenDeduct {
        /// Points removed per failed case.
        penalty: f64,
    },
    /// Start at zero and add `credit` for every passed case.
    ZeroThenAccumulate {
        /// Points granted per passed case.
        credit: f64,
    },
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::FullCreditThenDeduct { penalty: 1.0 }
    }
}

impl ScoringPolicy {
    /// Full credit, minus `penalty` per failed case.
    pub fn deduct(penalty: f64) -> Self {
        Self::FullCreditThenDeduct { penalty }
    }

    /// No credit, plus `credit` per passed case.
    pub fn accumulate(credit: f64) -> Self {
        Self::ZeroThenAccumulate { credit }
    }

    /// Score granted before any check runs.
    pub fn baseline(&self, max_points: f64) -> f64 {
        match self {
            Self::FullCreditThenDeduct { .. } => max_points,
            Self::ZeroThenAccumulate { .. } => 0.0,
        }
    }

    /// Delta recorded alongside a failed case's feedback.
    pub fn fail_delta(&self) -> f64 {
        match self {
            Self::FullCreditThenDeduct { penalty } => -penalty,
            Self::ZeroThenAccumulate { .. } => 0.0,
        }
    }

    /// Delta silently applied for a passed case.
    pub fn pass_delta(&self) -> f64 {
        match self {
            Self::FullCreditThenDeduct { .. } => 0.0,
            Self::ZeroThenAccumulate { credit } => *credit,
        }
    }

    /// Unclamped score after `passed` passes and `failed` failures.
    pub fn raw_score(&self, max_points: f64, passed: usize, failed: usize) -> f64 {
        self.baseline(max_points)
            + passed as f64 * self.pass_delta()
            + failed as f64 * self.fail_delta()
    }
}
