//! 2-opt local search.
//!
//! Repeatedly reverses a tour segment whenever doing so shortens the cycle,
//! until no single reversal helps. Each reversal removes two edges and adds
//! two new ones.
//!
//! # Algorithm
//!
//! For positions `1 <= i` and `i + 2 <= j <= n`, reversing `tour[i..j]`
//! replaces edges `(t[i-1], t[i])` and `(t[j-1], t[j mod n])` with
//! `(t[i-1], t[j-1])` and `(t[i], t[j mod n])`:
//!
//! ```text
//! delta = d(t[i-1], t[j-1]) + d(t[i], t[j mod n]) - d(t[i-1], t[i]) - d(t[j-1], t[j mod n])
//! ```
//!
//! The first candidate with `delta < -epsilon` is applied and the scan
//! restarts (first improvement). The search stops after a scan with no
//! improving candidate.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

mod config;
mod runner;

pub use config::{Evaluation, TwoOptConfig};
pub use runner::{TwoOptResult, TwoOptRunner};
