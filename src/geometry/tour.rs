//! Tour cost and permutation checks.

use super::metric::Metric;
use crate::error::{Result, TspError};

/// A tour together with its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Visiting order, a permutation of `0..n` read as a cycle.
    pub tour: Vec<usize>,
    /// Total cycle length.
    pub cost: f64,
}

impl Solution {
    /// Scores `tour` under `metric`.
    pub fn evaluate<M: Metric + ?Sized>(tour: Vec<usize>, metric: &M) -> Self {
        let cost = total_cost(&tour, metric);
        Self { tour, cost }
    }
}

/// Length of the closed cycle through `tour`, including the edge from the
/// last city back to the first.
///
/// A single-city tour costs the self-loop distance, i.e. `0.0`.
pub fn total_cost<M: Metric + ?Sized>(tour: &[usize], metric: &M) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| metric.distance(tour[i], tour[(i + 1) % n]))
        .sum()
}

/// Checks that `tour` visits each of the `n` cities exactly once.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(TspError::invalid_tour(format!(
            "expected {n} cities, got {}",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n {
            return Err(TspError::invalid_tour(format!(
                "city {city} out of range for {n} cities"
            )));
        }
        if seen[city] {
            return Err(TspError::invalid_tour(format!("city {city} visited twice")));
        }
        seen[city] = true;
    }
    Ok(())
}
