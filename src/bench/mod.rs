//! Benchmark harness.
//!
//! Runs the four solvers over instances of increasing size and records one
//! [`SolutionRecord`] per (size, algorithm): cost and wall-clock time.
//!
//! - [`Algorithm`]: solver identifiers and their canonical names
//! - [`Instance`]: random generation and the `N` / `x y` text format
//! - [`BenchmarkConfig`]: sizes, Held-Karp limit, SA schedule, seed
//! - [`BenchmarkRunner`]: executes the solver pipeline per instance
//! - [`record`]: CSV persistence (`N,Algorithm,Cost,Time`)
//! - [`analysis`]: best-known costs, optimality gaps, summaries

mod algorithm;
pub mod analysis;
mod config;
mod instance;
pub mod record;
mod runner;

pub use algorithm::Algorithm;
pub use config::BenchmarkConfig;
pub use instance::Instance;
pub use record::SolutionRecord;
pub use runner::BenchmarkRunner;
