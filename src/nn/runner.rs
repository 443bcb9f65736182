//! Nearest Neighbor construction loop.

use crate::error::{Result, TspError};
use crate::geometry::{Metric, Solution};

/// Builds a tour greedily from city 0.
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Constructs the nearest-neighbor tour starting at city 0.
    ///
    /// Ties are broken in favor of the lowest city index.
    ///
    /// # Errors
    ///
    /// [`TspError::EmptyInstance`] if `metric` has no cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::geometry::Point;
    /// use u_tsp::nn::NearestNeighbor;
    ///
    /// let points = vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(1.0, 0.0),
    /// ];
    /// let solution = NearestNeighbor::run(&points).unwrap();
    /// assert_eq!(solution.tour, vec![0, 1, 2, 3]);
    /// assert!((solution.cost - 4.0).abs() < 1e-12);
    /// ```
    pub fn run<M: Metric + ?Sized>(metric: &M) -> Result<Solution> {
        let n = metric.len();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }

        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        tour.push(0);
        visited[0] = true;

        for _ in 1..n {
            let last = tour[tour.len() - 1];
            let mut next = None;
            let mut next_dist = f64::INFINITY;

            for city in (0..n).filter(|&c| !visited[c]) {
                let d = metric.distance(last, city);
                // Strict comparison keeps the first city found on ties.
                if next.is_none() || d < next_dist {
                    next = Some(city);
                    next_dist = d;
                }
            }

            // An unvisited city always remains while the tour is short.
            let Some(city) = next else { break };
            tour.push(city);
            visited[city] = true;
        }

        let solution = Solution::evaluate(tour, metric);
        log::debug!("nearest neighbor: n={n}, cost={:.4}", solution.cost);
        Ok(solution)
    }
}
