//! Benchmark configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::held_karp::{HeldKarpConfig, MAX_SUPPORTED_CITIES};
use crate::sa::SaConfig;
use crate::two_opt::{Evaluation, TwoOptConfig};

/// Parameters of a benchmark run.
///
/// Missing fields take their default when loaded from JSON.
///
/// # Examples
///
/// ```
/// use u_tsp::bench::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default()
///     .with_sizes(vec![8, 12])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let parsed: BenchmarkConfig = serde_json::from_str(r#"{ "sizes": [5] }"#).unwrap();
/// assert_eq!(parsed.sizes, vec![5]);
/// assert_eq!(parsed.held_karp_limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Instance sizes, one instance per size.
    pub sizes: Vec<usize>,

    /// Held-Karp only runs on instances with at most this many cities
    /// (0 disables it).
    pub held_karp_limit: usize,

    /// Starting temperature of simulated annealing.
    pub sa_initial_temperature: f64,

    /// Geometric cooling factor of simulated annealing.
    pub sa_alpha: f64,

    /// Seed for instance generation and annealing.
    pub seed: u64,

    /// Candidate scoring used by 2-opt.
    pub two_opt_evaluation: Evaluation,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 15, 20, 50, 100, 500],
            held_karp_limit: 20,
            sa_initial_temperature: 1000.0,
            sa_alpha: 0.99,
            seed: 42,
            two_opt_evaluation: Evaluation::Delta,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_held_karp_limit(mut self, n: usize) -> Self {
        self.held_karp_limit = n;
        self
    }

    pub fn with_sa_initial_temperature(mut self, t: f64) -> Self {
        self.sa_initial_temperature = t;
        self
    }

    pub fn with_sa_alpha(mut self, alpha: f64) -> Self {
        self.sa_alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_two_opt_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.two_opt_evaluation = evaluation;
        self
    }

    /// Loads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate().map_err(TspError::InvalidConfig)?;
        Ok(config)
    }

    /// Annealing schedule derived from this configuration.
    pub fn sa_config(&self) -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(self.sa_initial_temperature)
            .with_alpha(self.sa_alpha)
    }

    pub fn two_opt_config(&self) -> TwoOptConfig {
        TwoOptConfig::default().with_evaluation(self.two_opt_evaluation)
    }

    pub fn held_karp_config(&self) -> HeldKarpConfig {
        HeldKarpConfig::default().with_max_cities(self.held_karp_limit.max(1))
    }

    /// Whether Held-Karp runs on an instance of `n` cities.
    pub fn runs_held_karp(&self, n: usize) -> bool {
        n <= self.held_karp_limit
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.sizes.is_empty() {
            return Err("sizes must not be empty".into());
        }
        if self.sizes.contains(&0) {
            return Err("sizes must be positive".into());
        }
        if self.held_karp_limit > MAX_SUPPORTED_CITIES {
            return Err(format!(
                "held_karp_limit must be at most {MAX_SUPPORTED_CITIES}, got {}",
                self.held_karp_limit
            ));
        }
        self.sa_config().validate()
    }
}
