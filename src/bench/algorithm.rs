//! Solver identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four benchmarked solvers.
///
/// The serialized names are used as join keys by result analysis and must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Nearest Neighbor")]
    NearestNeighbor,
    #[serde(rename = "2-Opt")]
    TwoOpt,
    #[serde(rename = "Simulated Annealing")]
    SimulatedAnnealing,
    #[serde(rename = "Held-Karp")]
    HeldKarp,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NearestNeighbor,
        Algorithm::TwoOpt,
        Algorithm::SimulatedAnnealing,
        Algorithm::HeldKarp,
    ];

    /// Canonical display and CSV name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "Nearest Neighbor",
            Algorithm::TwoOpt => "2-Opt",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::HeldKarp => "Held-Karp",
        }
    }

    /// Whether the algorithm returns a provably optimal cost.
    pub const fn is_exact(self) -> bool {
        matches!(self, Algorithm::HeldKarp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_exact() {
        let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            vec!["Nearest Neighbor", "2-Opt", "Simulated Annealing", "Held-Karp"]
        );
    }

    #[test]
    fn test_serde_uses_names() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algorithm);
        }
    }

    #[test]
    fn test_only_held_karp_is_exact() {
        assert!(Algorithm::HeldKarp.is_exact());
        assert!(!Algorithm::TwoOpt.is_exact());
    }
}
