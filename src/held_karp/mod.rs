//! Held-Karp exact solver.
//!
//! Bitmask dynamic programming over subsets of the cities `{1..n-1}`, with
//! city 0 fixed as start and end. `dp[S, j]` is the length of the shortest
//! path that leaves city 0, visits exactly the cities in `S` and ends at
//! `j ∈ S`:
//!
//! ```text
//! dp[{k}, k] = d(0, k)
//! dp[S, j]   = min over k ∈ S \ {j} of dp[S \ {j}, k] + d(k, j)
//! optimum    = min over j of dp[{1..n-1}, j] + d(j, 0)
//! ```
//!
//! Subsets are processed by increasing size, so every state only reads
//! strictly smaller subsets. `O(n² · 2ⁿ)` time and `O(n · 2ⁿ)` memory; the
//! configured city ceiling turns oversized calls into an error instead of
//! an allocation failure.
//!
//! # References
//!
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing Problems"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{HeldKarpConfig, MAX_SUPPORTED_CITIES};
pub use runner::{HeldKarp, HeldKarpResult};
