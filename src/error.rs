//! Error type shared by the solvers and the benchmark layer.

use thiserror::Error;

/// Errors produced by the solver suite.
///
/// Solver errors are precondition failures detected before any real work
/// starts. The I/O variants only come out of the [`bench`](crate::bench)
/// layer.
#[derive(Debug, Error)]
pub enum TspError {
    /// The instance has no cities.
    #[error("instance has no cities")]
    EmptyInstance,

    /// A coordinate is NaN or infinite.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// A tour is not a permutation of `0..n`.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// Held-Karp was asked to solve an instance above its size ceiling.
    #[error("instance with {cities} cities exceeds the exact solver limit of {max}")]
    InfeasibleScale { cities: usize, max: usize },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An instance file could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_scale_message() {
        let err = TspError::InfeasibleScale { cities: 25, max: 20 };
        assert_eq!(
            err.to_string(),
            "instance with 25 cities exceeds the exact solver limit of 20"
        );
    }

    #[test]
    fn test_io_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: TspError = io.into();
        assert_eq!(err.to_string(), "missing.txt");
    }
}
