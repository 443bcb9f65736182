//! 2-opt configuration.

use serde::{Deserialize, Serialize};

/// How candidate moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Evaluation {
    /// Constant-time cost change from the two removed and two added edges.
    #[default]
    Delta,

    /// Apply the reversal and recompute the whole tour cost. `O(n)` per
    /// candidate.
    FullRecompute,
}

/// Configuration for [`TwoOptRunner`](super::TwoOptRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::two_opt::{Evaluation, TwoOptConfig};
///
/// let config = TwoOptConfig::default()
///     .with_evaluation(Evaluation::FullRecompute)
///     .with_max_scans(1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptConfig {
    /// Candidate scoring strategy.
    pub evaluation: Evaluation,

    /// Minimum cost decrease for a move to count as improving.
    pub epsilon: f64,

    /// Maximum number of scans (0 = run to a local optimum).
    pub max_scans: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            evaluation: Evaluation::Delta,
            epsilon: 1e-10,
            max_scans: 0,
        }
    }
}

impl TwoOptConfig {
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_scans(mut self, n: usize) -> Self {
        self.max_scans = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}
