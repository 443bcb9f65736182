//! Geometry and cost model.
//!
//! Every solver in this crate sees the instance through the [`Metric`]
//! trait: a number of cities and a symmetric distance between any two of
//! them. Two implementations are provided:
//!
//! - `[Point]` / `Vec<Point>`: Euclidean distance computed on demand.
//! - [`DistanceMatrix`]: all pairwise distances computed once and cached.
//!
//! Both produce identical solver output; the matrix trades `O(n²)` memory
//! for cheaper lookups.

mod metric;
mod point;
mod tour;

pub use metric::{DistanceMatrix, Metric};
pub use point::{distance, validate_points, Point};
pub use tour::{total_cost, validate_tour, Solution};
