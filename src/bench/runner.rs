//! Benchmark execution.

use std::time::Instant;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::algorithm::Algorithm;
use super::config::BenchmarkConfig;
use super::instance::Instance;
use super::record::SolutionRecord;
use crate::error::{Result, TspError};
use crate::geometry::{validate_points, Point};
use crate::held_karp::HeldKarp;
use crate::nn::NearestNeighbor;
use crate::random::create_rng;
use crate::sa::simulated_annealing;
use crate::two_opt::TwoOptRunner;

/// Runs the solver pipeline and records cost and time per algorithm.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Generates one instance per configured size from `config.seed` and
    /// benchmarks them.
    pub fn run(config: &BenchmarkConfig) -> Result<Vec<SolutionRecord>> {
        config.validate().map_err(TspError::InvalidConfig)?;
        let mut rng = create_rng(config.seed);
        let instances: Vec<Instance> = config
            .sizes
            .iter()
            .map(|&n| Instance::generate(n, &mut rng))
            .collect();
        Self::run_instances(&instances, config)
    }

    /// Benchmarks the given instances. Instance `i` anneals with a
    /// generator seeded by `config.seed + i`.
    ///
    /// With the `parallel` feature instances run concurrently; records are
    /// returned in instance order either way.
    pub fn run_instances(
        instances: &[Instance],
        config: &BenchmarkConfig,
    ) -> Result<Vec<SolutionRecord>> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let run_one = |(i, instance): (usize, &Instance)| {
            let mut rng = create_rng(config.seed.wrapping_add(i as u64));
            Self::run_instance(&instance.points, config, &mut rng)
        };

        #[cfg(feature = "parallel")]
        let batches: Vec<Result<Vec<SolutionRecord>>> =
            instances.par_iter().enumerate().map(run_one).collect();
        #[cfg(not(feature = "parallel"))]
        let batches: Vec<Result<Vec<SolutionRecord>>> =
            instances.iter().enumerate().map(run_one).collect();

        let mut records = Vec::with_capacity(instances.len() * Algorithm::ALL.len());
        for batch in batches {
            records.extend(batch?);
        }
        Ok(records)
    }

    /// Benchmarks a single instance.
    ///
    /// Records come in the order Nearest Neighbor, Held-Karp (only when the
    /// instance is within `held_karp_limit`), 2-Opt, Simulated Annealing.
    /// 2-Opt and Simulated Annealing start from the nearest-neighbor tour
    /// and their times include its construction.
    pub fn run_instance<R: Rng>(
        points: &[Point],
        config: &BenchmarkConfig,
        rng: &mut R,
    ) -> Result<Vec<SolutionRecord>> {
        validate_points(points)?;
        let n = points.len();
        log::info!("running benchmark for N={n}");

        let mut records = Vec::with_capacity(Algorithm::ALL.len());

        let start = Instant::now();
        let nn = NearestNeighbor::run(points)?;
        let nn_time = start.elapsed().as_secs_f64();
        records.push(SolutionRecord::new(
            n,
            Algorithm::NearestNeighbor,
            nn.cost,
            nn_time,
        ));

        if config.runs_held_karp(n) {
            let start = Instant::now();
            let cost = HeldKarp::cost(points, &config.held_karp_config())?;
            let time = start.elapsed().as_secs_f64();
            records.push(SolutionRecord::new(n, Algorithm::HeldKarp, cost, time));
        } else {
            log::debug!(
                "skipping Held-Karp for N={n} (limit {})",
                config.held_karp_limit
            );
        }

        let start = Instant::now();
        let improved = TwoOptRunner::run(points, &nn.tour, &config.two_opt_config())?;
        let time = start.elapsed().as_secs_f64();
        records.push(SolutionRecord::new(
            n,
            Algorithm::TwoOpt,
            improved.cost,
            nn_time + time,
        ));

        let start = Instant::now();
        let annealed = simulated_annealing(points, &nn.tour, &config.sa_config(), rng)?;
        let time = start.elapsed().as_secs_f64();
        records.push(SolutionRecord::new(
            n,
            Algorithm::SimulatedAnnealing,
            annealed.cost,
            nn_time + time,
        ));

        for r in &records {
            log::info!("N={} {:<20} cost={:.4} time={:.6}s", r.n, r.algorithm.name(), r.cost, r.time);
        }
        Ok(records)
    }
}
