//! Held-Karp dynamic program.

use super::config::HeldKarpConfig;
use crate::error::{Result, TspError};
use crate::geometry::Metric;

/// Optimal tour found by [`HeldKarp::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeldKarpResult {
    /// Optimal tour, starting at city 0.
    pub tour: Vec<usize>,
    /// Optimal tour length.
    pub cost: f64,
}

/// Exact solver for small instances.
pub struct HeldKarp;

impl HeldKarp {
    /// Minimum tour cost, without reconstructing the tour.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInstance`] if `metric` has no cities.
    /// - [`TspError::InfeasibleScale`] if it has more than `config.max_cities`.
    /// - [`TspError::InvalidConfig`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::Point;
    /// use u_tsp::held_karp::{HeldKarp, HeldKarpConfig};
    ///
    /// let square = vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// ];
    /// let cost = HeldKarp::cost(&square, &HeldKarpConfig::default()).unwrap();
    /// assert!((cost - 4.0).abs() < 1e-12);
    /// ```
    pub fn cost<M: Metric + ?Sized>(metric: &M, config: &HeldKarpConfig) -> Result<f64> {
        let n = check_scale(metric, config)?;
        if n == 1 {
            return Ok(0.0);
        }
        let table = DpTable::build(metric, false, config.max_cities)?;
        Ok(table.best_closing(metric).1)
    }

    /// Minimum tour cost together with an optimal tour.
    ///
    /// # Errors
    ///
    /// Same as [`HeldKarp::cost`].
    pub fn solve<M: Metric + ?Sized>(
        metric: &M,
        config: &HeldKarpConfig,
    ) -> Result<HeldKarpResult> {
        let n = check_scale(metric, config)?;
        if n == 1 {
            return Ok(HeldKarpResult {
                tour: vec![0],
                cost: 0.0,
            });
        }
        let table = DpTable::build(metric, true, config.max_cities)?;
        let (last, cost) = table.best_closing(metric);
        Ok(HeldKarpResult {
            tour: table.reconstruct(last),
            cost,
        })
    }
}

fn check_scale<M: Metric + ?Sized>(metric: &M, config: &HeldKarpConfig) -> Result<usize> {
    config.validate().map_err(TspError::InvalidConfig)?;
    let n = metric.len();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }
    if n > config.max_cities {
        return Err(TspError::InfeasibleScale {
            cities: n,
            max: config.max_cities,
        });
    }
    Ok(n)
}

/// Dense DP arrays for one solve. City `c` in `1..n` is bit `c - 1`; the
/// state `(mask, j)` lives at `mask * m + j` with `m = n - 1`.
struct DpTable {
    m: usize,
    cost: Vec<f64>,
    /// Predecessor bit of each state; empty when tours are not needed.
    parent: Vec<u8>,
}

const NO_PARENT: u8 = u8::MAX;

impl DpTable {
    /// Fails with [`TspError::InfeasibleScale`] when the tables cannot be
    /// sized or allocated.
    fn build<M: Metric + ?Sized>(metric: &M, track_parents: bool, max: usize) -> Result<Self> {
        let n = metric.len();
        let m = n - 1;
        let infeasible = || TspError::InfeasibleScale { cities: n, max };

        let subsets = 1usize.checked_shl(m as u32).ok_or_else(infeasible)?;
        let states = subsets.checked_mul(m).ok_or_else(infeasible)?;
        let mut cost = filled(states, f64::INFINITY).ok_or_else(infeasible)?;
        let mut parent = if track_parents {
            filled(states, NO_PARENT).ok_or_else(infeasible)?
        } else {
            Vec::new()
        };

        for k in 0..m {
            cost[(1 << k) * m + k] = metric.distance(0, k + 1);
        }

        for size in 2..=m {
            let mut mask = (1usize << size) - 1;
            while mask < subsets {
                let mut ends = mask;
                while ends != 0 {
                    let j = ends.trailing_zeros() as usize;
                    ends &= ends - 1;

                    let prev = mask & !(1 << j);
                    let mut best = f64::INFINITY;
                    let mut best_k = NO_PARENT;
                    let mut via = prev;
                    while via != 0 {
                        let k = via.trailing_zeros() as usize;
                        via &= via - 1;

                        let candidate = cost[prev * m + k] + metric.distance(k + 1, j + 1);
                        if candidate < best {
                            best = candidate;
                            best_k = k as u8;
                        }
                    }

                    cost[mask * m + j] = best;
                    if track_parents {
                        parent[mask * m + j] = best_k;
                    }
                }
                mask = next_same_popcount(mask);
            }
        }

        log::debug!("held-karp: n={n}, {states} states");
        Ok(Self { m, cost, parent })
    }

    /// Best last city (as a bit index) and the cost of closing the cycle.
    fn best_closing<M: Metric + ?Sized>(&self, metric: &M) -> (usize, f64) {
        let full = (1usize << self.m) - 1;
        let mut best = (0, f64::INFINITY);
        for j in 0..self.m {
            let total = self.cost[full * self.m + j] + metric.distance(j + 1, 0);
            if total < best.1 {
                best = (j, total);
            }
        }
        best
    }

    /// Walks parent links back from `(full, last)`.
    fn reconstruct(&self, last: usize) -> Vec<usize> {
        let mut mask = (1usize << self.m) - 1;
        let mut current = last;
        let mut reversed = Vec::with_capacity(self.m + 1);

        while mask != 0 {
            reversed.push(current + 1);
            let p = self.parent[mask * self.m + current];
            mask &= !(1 << current);
            if p == NO_PARENT {
                break;
            }
            current = p as usize;
        }

        reversed.push(0);
        reversed.reverse();
        reversed
    }
}

/// A vector of `len` copies of `value`, or `None` if the allocation fails.
fn filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).ok()?;
    v.resize(len, value);
    Some(v)
}

/// Next larger integer with the same number of set bits (Gosper's hack).
#[inline]
fn next_same_popcount(x: usize) -> usize {
    let lowest = x & x.wrapping_neg();
    let ripple = x + lowest;
    (((ripple ^ x) >> 2) / lowest) | ripple
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{total_cost, validate_tour, DistanceMatrix, Point};
    use crate::nn::NearestNeighbor;
    use crate::two_opt::TwoOptRunner;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    fn scattered(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let a = (i as f64 * 12.9898 + 1.0).sin() * 43758.5453;
                let b = (i as f64 * 78.233 + 2.0).sin() * 12543.1234;
                Point::new((a - a.floor()) * 1000.0, (b - b.floor()) * 1000.0)
            })
            .collect()
    }

    /// Exhaustive search over all tours starting at 0.
    fn brute_force(points: &[Point]) -> f64 {
        fn permute(rest: &mut Vec<usize>, k: usize, points: &[Point], best: &mut f64) {
            if k == rest.len() {
                let mut tour = vec![0];
                tour.extend_from_slice(rest);
                *best = best.min(total_cost(&tour, points));
                return;
            }
            for i in k..rest.len() {
                rest.swap(k, i);
                permute(rest, k + 1, points, best);
                rest.swap(k, i);
            }
        }
        let mut rest: Vec<usize> = (1..points.len()).collect();
        let mut best = f64::INFINITY;
        permute(&mut rest, 0, points, &mut best);
        best
    }

    #[test]
    fn test_gosper_enumerates_same_size() {
        let mut masks = Vec::new();
        let mut mask = 0b011usize;
        while mask < 16 {
            masks.push(mask);
            mask = next_same_popcount(mask);
        }
        assert_eq!(masks, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
    }

    #[test]
    fn test_unit_square_is_four() {
        let pts = unit_square();
        let config = HeldKarpConfig::default();
        assert!((HeldKarp::cost(&pts, &config).unwrap() - 4.0).abs() < 1e-12);
        let result = HeldKarp::solve(&pts, &config).unwrap();
        assert!((result.cost - 4.0).abs() < 1e-12);
        assert!(validate_tour(&result.tour, 4).is_ok());
        assert_eq!(result.tour[0], 0);
    }

    #[test]
    fn test_trivial_sizes() {
        let config = HeldKarpConfig::default();
        let single = vec![Point::new(5.0, 5.0)];
        assert_eq!(HeldKarp::cost(&single, &config).unwrap(), 0.0);
        assert_eq!(HeldKarp::solve(&single, &config).unwrap().tour, vec![0]);

        let pair = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert!((HeldKarp::cost(&pair, &config).unwrap() - 10.0).abs() < 1e-12);
        assert_eq!(HeldKarp::solve(&pair, &config).unwrap().tour, vec![0, 1]);

        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        ];
        assert!((HeldKarp::cost(&triangle, &config).unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_brute_force() {
        for n in 4..=8 {
            let pts = scattered(n);
            let exact = HeldKarp::cost(&pts, &HeldKarpConfig::default()).unwrap();
            let brute = brute_force(&pts);
            assert!(
                (exact - brute).abs() < 1e-6,
                "n={n}: held-karp {exact} vs brute force {brute}"
            );
        }
    }

    #[test]
    fn test_reconstructed_tour_has_reported_cost() {
        let pts = scattered(11);
        let result = HeldKarp::solve(&pts, &HeldKarpConfig::default()).unwrap();
        assert!(validate_tour(&result.tour, 11).is_ok());
        assert!((total_cost(&result.tour, &pts) - result.cost).abs() < 1e-6);
        assert_eq!(
            result.cost,
            HeldKarp::cost(&pts, &HeldKarpConfig::default()).unwrap()
        );
    }

    #[test]
    fn test_lower_bound_for_heuristics() {
        let pts = scattered(12);
        let exact = HeldKarp::cost(&pts, &HeldKarpConfig::default()).unwrap();
        let nn = NearestNeighbor::run(&pts).unwrap();
        let improved = TwoOptRunner::improve(&pts, &nn.tour).unwrap();
        assert!(exact <= nn.cost + 1e-9);
        assert!(exact <= improved.cost + 1e-9);
    }

    #[test]
    fn test_deterministic_and_metric_independent() {
        let pts = scattered(10);
        let config = HeldKarpConfig::default();
        let a = HeldKarp::solve(&pts, &config).unwrap();
        let b = HeldKarp::solve(&pts, &config).unwrap();
        let c = HeldKarp::solve(&DistanceMatrix::from_points(&pts), &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_rejects_oversized_and_empty() {
        let pts = scattered(8);
        let config = HeldKarpConfig::default().with_max_cities(7);
        assert!(matches!(
            HeldKarp::cost(&pts, &config),
            Err(TspError::InfeasibleScale { cities: 8, max: 7 })
        ));
        let empty: Vec<Point> = Vec::new();
        assert!(matches!(
            HeldKarp::cost(&empty, &HeldKarpConfig::default()),
            Err(TspError::EmptyInstance)
        ));
        assert!(matches!(
            HeldKarp::cost(&pts, &HeldKarpConfig::default().with_max_cities(0)),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_ceiling_above_supported_is_config_error() {
        // 26 cities would need gigabytes of tables; it must be refused up front.
        let pts = scattered(26);
        let config = HeldKarpConfig::default().with_max_cities(30);
        assert!(matches!(
            HeldKarp::cost(&pts, &config),
            Err(TspError::InvalidConfig(_))
        ));
        assert!(matches!(
            HeldKarp::solve(&pts, &HeldKarpConfig::default()),
            Err(TspError::InfeasibleScale { cities: 26, max: 20 })
        ));
    }

    #[test]
    fn test_filled_reports_impossible_allocation() {
        assert!(filled(usize::MAX / 2, 0.0f64).is_none());
        assert_eq!(filled(3, NO_PARENT), Some(vec![NO_PARENT; 3]));
    }
}
