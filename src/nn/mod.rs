//! Nearest Neighbor tour construction.
//!
//! Greedy constructive heuristic: start at city 0 and repeatedly travel to
//! the closest city not yet visited. `O(n²)`, deterministic, no optimality
//! guarantee. Its tour is the usual starting point for [`two_opt`] and
//! [`sa`].
//!
//! [`two_opt`]: crate::two_opt
//! [`sa`]: crate::sa
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod runner;

pub use runner::NearestNeighbor;
