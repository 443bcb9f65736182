//! 2-opt improvement loop.

use super::config::{Evaluation, TwoOptConfig};
use crate::error::{Result, TspError};
use crate::geometry::{total_cost, validate_tour, Metric, Solution};

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// The improved tour.
    pub tour: Vec<usize>,

    /// Cost of `tour`, recomputed from scratch.
    pub cost: f64,

    /// Cost of the input tour.
    pub initial_cost: f64,

    /// Number of scans performed, including the final one that found
    /// nothing.
    pub scans: usize,

    /// Number of accepted reversals.
    pub improvements: usize,

    /// Whether the search stopped because no improving move remained
    /// (as opposed to hitting `max_scans`).
    pub local_optimum: bool,
}

impl TwoOptResult {
    pub fn into_solution(self) -> Solution {
        Solution {
            tour: self.tour,
            cost: self.cost,
        }
    }
}

/// Executes first-improvement 2-opt.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Improves `tour` with the default configuration.
    pub fn improve<M: Metric + ?Sized>(metric: &M, tour: &[usize]) -> Result<Solution> {
        Self::run(metric, tour, &TwoOptConfig::default()).map(TwoOptResult::into_solution)
    }

    /// Runs 2-opt from `tour` until a local optimum (or the scan budget).
    ///
    /// Tours with fewer than four cities have no non-trivial move and are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInstance`] if `metric` has no cities.
    /// - [`TspError::InvalidTour`] if `tour` is not a permutation of the cities.
    /// - [`TspError::InvalidConfig`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::Point;
    /// use u_tsp::two_opt::{TwoOptConfig, TwoOptRunner};
    ///
    /// let square = vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// ];
    /// // Crossing tour 0-2-1-3 untangles into the perimeter.
    /// let result = TwoOptRunner::run(&square, &[0, 2, 1, 3], &TwoOptConfig::default()).unwrap();
    /// assert!((result.cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run<M: Metric + ?Sized>(
        metric: &M,
        tour: &[usize],
        config: &TwoOptConfig,
    ) -> Result<TwoOptResult> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let n = metric.len();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        validate_tour(tour, n)?;

        let mut current = tour.to_vec();
        let initial_cost = total_cost(&current, metric);

        if n < 4 {
            return Ok(TwoOptResult {
                tour: current,
                cost: initial_cost,
                initial_cost,
                scans: 0,
                improvements: 0,
                local_optimum: true,
            });
        }

        let mut cost = initial_cost;
        let mut scans = 0usize;
        let mut improvements = 0usize;
        let mut local_optimum = false;

        while config.max_scans == 0 || scans < config.max_scans {
            scans += 1;
            let found = match config.evaluation {
                Evaluation::Delta => scan_delta(metric, &current, cost, config.epsilon),
                Evaluation::FullRecompute => {
                    scan_full(metric, &mut current, cost, config.epsilon)
                }
            };

            match found {
                Some((i, j, new_cost)) => {
                    current[i..j].reverse();
                    cost = new_cost;
                    improvements += 1;
                }
                None => {
                    local_optimum = true;
                    break;
                }
            }
        }

        // Drop the drift accumulated from summing deltas.
        let cost = total_cost(&current, metric);
        log::debug!(
            "2-opt: n={n}, cost {initial_cost:.4} -> {cost:.4}, {improvements} moves in {scans} scans"
        );

        Ok(TwoOptResult {
            tour: current,
            cost,
            initial_cost,
            scans,
            improvements,
            local_optimum,
        })
    }
}

/// Cost change of reversing `tour[i..j]`.
#[inline]
fn reversal_delta<M: Metric + ?Sized>(metric: &M, tour: &[usize], i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i - 1];
    let b = tour[i];
    let c = tour[j - 1];
    let d = tour[j % n];
    metric.distance(a, c) + metric.distance(b, d) - metric.distance(a, b) - metric.distance(c, d)
}

/// Finds the first improving reversal using edge deltas. Returns the
/// segment bounds and the resulting tour cost.
fn scan_delta<M: Metric + ?Sized>(
    metric: &M,
    tour: &[usize],
    cost: f64,
    epsilon: f64,
) -> Option<(usize, usize, f64)> {
    let n = tour.len();
    for i in 1..n - 1 {
        for j in (i + 2)..=n {
            let delta = reversal_delta(metric, tour, i, j);
            if delta < -epsilon {
                return Some((i, j, cost + delta));
            }
        }
    }
    None
}

/// Finds the first improving reversal by recomputing the full cost of each
/// candidate. The buffer is restored before returning.
fn scan_full<M: Metric + ?Sized>(
    metric: &M,
    tour: &mut [usize],
    cost: f64,
    epsilon: f64,
) -> Option<(usize, usize, f64)> {
    let n = tour.len();
    for i in 1..n - 1 {
        for j in (i + 2)..=n {
            tour[i..j].reverse();
            let new_cost = total_cost(tour, metric);
            tour[i..j].reverse();
            if new_cost < cost - epsilon {
                return Some((i, j, new_cost));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{DistanceMatrix, Point};
    use crate::nn::NearestNeighbor;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    fn scattered(n: usize) -> Vec<Point> {
        // Deterministic pseudo-random layout.
        (0..n)
            .map(|i| {
                let a = (i as f64 * 12.9898).sin() * 43758.5453;
                let b = (i as f64 * 78.233).sin() * 12543.1234;
                Point::new((a - a.floor()) * 100.0, (b - b.floor()) * 100.0)
            })
            .collect()
    }

    fn no_improving_move(pts: &[Point], tour: &[usize]) -> bool {
        let n = tour.len();
        for i in 1..n - 1 {
            for j in (i + 2)..=n {
                if reversal_delta(pts, tour, i, j) < -1e-9 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_two_opt_untangles_square() {
        let pts = unit_square();
        let result = TwoOptRunner::run(&pts, &[0, 2, 1, 3], &TwoOptConfig::default()).unwrap();
        assert!((result.cost - 4.0).abs() < 1e-9);
        assert!(result.improvements >= 1);
        assert!(result.local_optimum);
        assert!(validate_tour(&result.tour, 4).is_ok());
    }

    #[test]
    fn test_two_opt_untangles_square_full_recompute() {
        let pts = unit_square();
        let config = TwoOptConfig::default().with_evaluation(Evaluation::FullRecompute);
        let result = TwoOptRunner::run(&pts, &[0, 2, 1, 3], &config).unwrap();
        assert!((result.cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_opt_small_tours_unchanged() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        let result = TwoOptRunner::run(&pts, &[0, 2, 1], &TwoOptConfig::default()).unwrap();
        assert_eq!(result.tour, vec![0, 2, 1]);
        assert!((result.cost - 12.0).abs() < 1e-12);
        assert_eq!(result.scans, 0);

        let pair = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let result = TwoOptRunner::run(&pair, &[1, 0], &TwoOptConfig::default()).unwrap();
        assert_eq!(result.tour, vec![1, 0]);
        assert!((result.cost - 10.0).abs() < 1e-12);

        let single = vec![Point::new(1.0, 1.0)];
        let result = TwoOptRunner::run(&single, &[0], &TwoOptConfig::default()).unwrap();
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_two_opt_rejects_invalid_tour() {
        let pts = unit_square();
        assert!(matches!(
            TwoOptRunner::run(&pts, &[0, 1, 1, 3], &TwoOptConfig::default()),
            Err(TspError::InvalidTour(_))
        ));
        assert!(matches!(
            TwoOptRunner::run(&pts, &[0, 1, 2], &TwoOptConfig::default()),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_two_opt_reaches_local_optimum() {
        let pts = scattered(40);
        let start: Vec<usize> = (0..40).collect();
        let result = TwoOptRunner::run(&pts, &start, &TwoOptConfig::default()).unwrap();
        assert!(result.local_optimum);
        assert!(result.cost <= result.initial_cost + 1e-9);
        assert!(no_improving_move(&pts, &result.tour));
    }

    #[test]
    fn test_two_opt_full_recompute_reaches_local_optimum() {
        let pts = scattered(20);
        let start: Vec<usize> = (0..20).collect();
        let config = TwoOptConfig::default().with_evaluation(Evaluation::FullRecompute);
        let result = TwoOptRunner::run(&pts, &start, &config).unwrap();
        assert!(result.cost <= result.initial_cost + 1e-9);
        assert!(no_improving_move(&pts, &result.tour));
    }

    #[test]
    fn test_two_opt_improves_nearest_neighbor() {
        let pts = scattered(60);
        let nn = NearestNeighbor::run(&pts).unwrap();
        let improved = TwoOptRunner::improve(&pts, &nn.tour).unwrap();
        assert!(improved.cost <= nn.cost + 1e-9);
        assert_eq!(improved.tour[0], 0);
    }

    #[test]
    fn test_two_opt_matrix_matches_points() {
        let pts = scattered(25);
        let start: Vec<usize> = (0..25).rev().collect();
        let dm = DistanceMatrix::from_points(&pts);
        let a = TwoOptRunner::run(&pts, &start, &TwoOptConfig::default()).unwrap();
        let b = TwoOptRunner::run(&dm, &start, &TwoOptConfig::default()).unwrap();
        assert_eq!(a.tour, b.tour);
    }

    #[test]
    fn test_two_opt_scan_budget() {
        let pts = scattered(50);
        let start: Vec<usize> = (0..50).collect();
        let config = TwoOptConfig::default().with_max_scans(1);
        let result = TwoOptRunner::run(&pts, &start, &config).unwrap();
        assert_eq!(result.scans, 1);
        assert!(result.improvements <= 1);
    }
}
