//! Euclidean Traveling Salesman Problem solver suite.
//!
//! Four classical algorithms sharing one cost model:
//!
//! - **Nearest Neighbor** ([`nn`]): greedy `O(n²)` construction from city 0.
//! - **2-opt** ([`two_opt`]): first-improvement segment reversal down to a
//!   local optimum.
//! - **Simulated Annealing** ([`sa`]): Metropolis acceptance of random
//!   segment reversals under geometric cooling, with an injected random
//!   source.
//! - **Held-Karp** ([`held_karp`]): exact bitmask dynamic programming,
//!   `O(n² · 2ⁿ)`, guarded by a city ceiling.
//!
//! All solvers read the instance through [`geometry::Metric`], implemented
//! both by plain point slices (distances on demand) and by a cached
//! [`geometry::DistanceMatrix`]. The [`bench`] module runs the suite over
//! instances of growing size and records `(N, algorithm, cost, time)`.
//!
//! # Example
//!
//! ```
//! use u_tsp::geometry::Point;
//! use u_tsp::held_karp::{HeldKarp, HeldKarpConfig};
//! use u_tsp::nn::NearestNeighbor;
//! use u_tsp::random::create_rng;
//! use u_tsp::sa::{simulated_annealing, SaConfig};
//! use u_tsp::two_opt::TwoOptRunner;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(1.0, 3.0),
//! ];
//!
//! let start = NearestNeighbor::run(&points)?;
//! let local = TwoOptRunner::improve(&points, &start.tour)?;
//! let annealed = simulated_annealing(&points, &start.tour, &SaConfig::default(), &mut create_rng(1))?;
//! let optimum = HeldKarp::cost(&points, &HeldKarpConfig::default())?;
//!
//! assert!(optimum <= local.cost + 1e-9);
//! assert!(optimum <= annealed.cost + 1e-9);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod bench;
pub mod error;
pub mod geometry;
pub mod held_karp;
pub mod nn;
pub mod random;
pub mod sa;
pub mod two_opt;

pub use error::{Result, TspError};
