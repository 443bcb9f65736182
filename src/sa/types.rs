//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, acceptance
/// criterion, and cooling. The starting solution is passed to
/// [`SaRunner::run`](super::SaRunner::run).
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tsp::sa::SaProblem;
///
/// struct Parabola;
///
/// impl SaProblem for Parabola {
///     type Solution = f64;
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
///         x + rng.random_range(-1.0..1.0)
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor should be "close" to the current solution
    /// (small perturbation) but the neighborhood must be connected
    /// (any solution reachable from any other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
