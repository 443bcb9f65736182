//! Held-Karp configuration.

/// Largest ceiling accepted by [`HeldKarpConfig::validate`]. At this size
/// the DP tables take about 1.7 GB.
pub const MAX_SUPPORTED_CITIES: usize = 24;

/// Configuration for the Held-Karp solver.
///
/// # Examples
///
/// ```
/// use u_tsp::held_karp::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default().with_max_cities(16);
/// assert_eq!(config.max_cities, 16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarpConfig {
    /// Instances with more cities are rejected before any allocation.
    pub max_cities: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self { max_cities: 20 }
    }
}

impl HeldKarpConfig {
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cities == 0 {
            return Err("max_cities must be at least 1".into());
        }
        if self.max_cities > MAX_SUPPORTED_CITIES {
            return Err(format!(
                "max_cities must be at most {MAX_SUPPORTED_CITIES}, got {}",
                self.max_cities
            ));
        }
        Ok(())
    }
}
