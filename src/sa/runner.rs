//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::{Result, TspError};
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, drawing all randomness from `rng`.
    ///
    /// The best solution seen is tracked separately from the current
    /// (possibly worse) accepted one, so `best_cost <= initial_cost`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfig`] if `config` fails validation.
    pub fn run<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let mut current_cost = problem.cost(&initial);
        let initial_cost = current_cost;
        let mut best = initial.clone();
        let mut best_cost = current_cost;
        let mut current = initial;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        // Cost history: sample every N iterations
        let history_interval = 100.max(config.iterations_per_temperature);
        let mut cost_history = vec![best_cost];

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break;
                }

                let neighbor = problem.neighbor(&current, &mut *rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion. Equal-cost moves take the
                // probabilistic branch, where exp(0) = 1 always accepts.
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;

                if total_iterations.is_multiple_of(history_interval) {
                    cost_history.push(best_cost);
                }
            }

            // Check hard iteration limit
            if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                break;
            }

            temperature = config.cooling.cool(temperature);
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        log::debug!(
            "simulated annealing: {total_iterations} iterations, {accepted_moves} accepted, cost {initial_cost:.4} -> {best_cost:.4}"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
