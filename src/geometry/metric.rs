//! Distance lookups over city indices.

use super::point::Point;

/// A symmetric distance between the cities of an instance.
///
/// Cities are addressed by index in `0..len()`. Implementations must be
/// symmetric and return `0.0` for `distance(i, i)`.
pub trait Metric: Sync {
    /// Number of cities.
    fn len(&self) -> usize;

    /// Distance between cities `i` and `j`.
    fn distance(&self, i: usize, j: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Metric for [Point] {
    #[inline]
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self[i].distance(&self[j])
    }
}

impl Metric for Vec<Point> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self[i].distance(&self[j])
    }
}

/// Dense, precomputed `n × n` distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::{DistanceMatrix, Metric, Point};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.len(), 2);
/// assert!((dm.distance(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from Euclidean point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        Self::from_metric(points)
    }

    /// Caches every pairwise distance of another metric.
    pub fn from_metric<M: Metric + ?Sized>(metric: &M) -> Self {
        let n = metric.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(i, j);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }
}

impl Metric for DistanceMatrix {
    #[inline]
    fn len(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}
