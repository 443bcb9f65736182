//! Simulated Annealing over TSP tours.

use super::config::SaConfig;
use super::runner::SaRunner;
use super::types::SaProblem;
use crate::error::{Result, TspError};
use crate::geometry::{total_cost, validate_tour, Metric, Solution};
use rand::Rng;

/// TSP as an [`SaProblem`]: tours are permutations, a move reverses a
/// random segment.
pub struct TourAnnealing<'a, M: Metric + ?Sized> {
    metric: &'a M,
}

impl<'a, M: Metric + ?Sized> TourAnnealing<'a, M> {
    pub fn new(metric: &'a M) -> Self {
        Self { metric }
    }
}

impl<M: Metric + ?Sized> SaProblem for TourAnnealing<'_, M> {
    type Solution = Vec<usize>;

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        total_cost(tour, self.metric)
    }

    /// Picks two distinct positions `i < j` uniformly and reverses
    /// `tour[i..j]`.
    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = tour.clone();
        let n = next.len();
        if n < 2 {
            return next;
        }
        let a = rng.random_range(0..n);
        let mut b = rng.random_range(0..n - 1);
        if b >= a {
            b += 1;
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        next[i..j].reverse();
        next
    }
}

/// Anneals `tour` and returns the best tour seen with its cost.
///
/// Tours with fewer than two cities are returned unchanged.
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
/// use u_tsp::geometry::{total_cost, Point};
/// use u_tsp::random::create_rng;
/// use u_tsp::sa::{simulated_annealing, SaConfig};
///
/// let points: Vec<Point> = (0..12)
///     .map(|i| {
///         let t = i as f64 * std::f64::consts::TAU / 12.0;
///         Point::new(t.cos(), t.sin())
///     })
///     .collect();
/// let start = vec![0, 6, 1, 7, 2, 8, 3, 9, 4, 10, 5, 11];
/// let mut rng = create_rng(42);
/// let best = simulated_annealing(&points, &start, &SaConfig::default(), &mut rng).unwrap();
/// assert!(best.cost <= total_cost(&start, &points));
/// ```
pub fn simulated_annealing<M: Metric + ?Sized, R: Rng>(
    metric: &M,
    tour: &[usize],
    config: &SaConfig,
    rng: &mut R,
) -> Result<Solution> {
    let n = metric.len();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }
    validate_tour(tour, n)?;
    config.validate().map_err(TspError::InvalidConfig)?;

    if n < 2 {
        return Ok(Solution::evaluate(tour.to_vec(), metric));
    }

    let problem = TourAnnealing::new(metric);
    let result = SaRunner::run(&problem, tour.to_vec(), config, rng)?;
    Ok(Solution {
        tour: result.best,
        cost: result.best_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{DistanceMatrix, Point};
    use crate::nn::NearestNeighbor;
    use crate::random::create_rng;

    fn circle(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64 * std::f64::consts::TAU / n as f64;
                Point::new(100.0 * t.cos(), 100.0 * t.sin())
            })
            .collect()
    }

    #[test]
    fn test_neighbor_is_segment_reversal() {
        let pts = circle(10);
        let problem = TourAnnealing::new(&pts);
        let tour: Vec<usize> = (0..10).collect();
        let mut rng = create_rng(3);
        for _ in 0..200 {
            let next = problem.neighbor(&tour, &mut rng);
            assert!(validate_tour(&next, 10).is_ok());
            let changed: Vec<usize> = (0..10).filter(|&k| next[k] != tour[k]).collect();
            if let (Some(&lo), Some(&hi)) = (changed.first(), changed.last()) {
                // Only a contiguous block moved, and it is reversed.
                let mut block = tour[lo..=hi].to_vec();
                block.reverse();
                assert_eq!(&next[lo..=hi], block.as_slice());
            }
        }
    }

    #[test]
    fn test_neighbor_two_cities_no_op() {
        let pts = circle(2);
        let problem = TourAnnealing::new(&pts);
        let mut rng = create_rng(5);
        // Reversing a one-element segment changes nothing.
        assert_eq!(problem.neighbor(&vec![1, 0], &mut rng), vec![1, 0]);
    }

    #[test]
    fn test_sa_never_worse_than_start() {
        let pts = circle(30);
        let start: Vec<usize> = (0..30).map(|i| (i * 7) % 30).collect();
        let start_cost = total_cost(&start, &pts);
        let best = simulated_annealing(&pts, &start, &SaConfig::default(), &mut create_rng(11))
            .unwrap();
        assert!(best.cost <= start_cost);
        assert!(validate_tour(&best.tour, 30).is_ok());
        assert!((total_cost(&best.tour, &pts) - best.cost).abs() < 1e-9);
    }

    #[test]
    fn test_sa_reproducible_with_seed() {
        let pts = circle(25);
        let start = NearestNeighbor::run(&pts).unwrap().tour;
        let config = SaConfig::default().with_alpha(0.99);
        let a = simulated_annealing(&pts, &start, &config, &mut create_rng(99)).unwrap();
        let b = simulated_annealing(&pts, &start, &config, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sa_matrix_matches_points() {
        let pts: Vec<Point> = (0..20)
            .map(|i| {
                let a = (i as f64 * 12.9898 + 1.0).sin() * 43758.5453;
                let b = (i as f64 * 78.233 + 2.0).sin() * 12543.1234;
                Point::new((a - a.floor()) * 1000.0, (b - b.floor()) * 1000.0)
            })
            .collect();
        let matrix = DistanceMatrix::from_points(&pts);
        let start = NearestNeighbor::run(&pts).unwrap().tour;
        let config = SaConfig::default().with_alpha(0.99);

        let on_demand = simulated_annealing(&pts, &start, &config, &mut create_rng(17)).unwrap();
        let cached = simulated_annealing(&matrix, &start, &config, &mut create_rng(17)).unwrap();
        assert_eq!(on_demand, cached);
    }

    #[test]
    fn test_sa_trivial_instances() {
        let single = vec![Point::new(1.0, 2.0)];
        let sol = simulated_annealing(&single, &[0], &SaConfig::default(), &mut create_rng(0))
            .unwrap();
        assert_eq!(sol.tour, vec![0]);
        assert_eq!(sol.cost, 0.0);

        let pair = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let sol = simulated_annealing(&pair, &[0, 1], &SaConfig::default(), &mut create_rng(0))
            .unwrap();
        assert!((sol.cost - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_rejects_bad_input() {
        let pts = circle(5);
        assert!(matches!(
            simulated_annealing(&pts, &[0, 1, 2], &SaConfig::default(), &mut create_rng(0)),
            Err(TspError::InvalidTour(_))
        ));
        let empty: Vec<Point> = Vec::new();
        assert!(matches!(
            simulated_annealing(&empty, &[], &SaConfig::default(), &mut create_rng(0)),
            Err(TspError::EmptyInstance)
        ));
    }
}
