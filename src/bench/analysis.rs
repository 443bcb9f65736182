//! Result analysis: best-known costs and optimality gaps.
//!
//! The reference cost for a size is the Held-Karp optimum when one was
//! recorded, otherwise the best cost any algorithm reached.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::algorithm::Algorithm;
use super::record::SolutionRecord;

/// Reference cost per instance size.
pub fn best_known(records: &[SolutionRecord]) -> BTreeMap<usize, f64> {
    let mut best: BTreeMap<usize, (bool, f64)> = BTreeMap::new();
    for r in records {
        let exact = r.algorithm.is_exact();
        best.entry(r.n)
            .and_modify(|(have_exact, cost)| {
                if exact && !*have_exact {
                    *have_exact = true;
                    *cost = r.cost;
                } else if exact == *have_exact && r.cost < *cost {
                    *cost = r.cost;
                }
            })
            .or_insert((exact, r.cost));
    }
    best.into_iter().map(|(n, (_, cost))| (n, cost)).collect()
}

/// Percent deviation of `cost` above `reference`.
///
/// A non-positive reference (single-city instances) yields `0.0`.
pub fn gap_percent(cost: f64, reference: f64) -> f64 {
    if reference > 0.0 {
        100.0 * (cost - reference) / reference
    } else {
        0.0
    }
}

/// A record with its gap to the best-known cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Gap {
    pub n: usize,
    pub algorithm: Algorithm,
    pub cost: f64,
    pub time: f64,
    pub gap_percent: f64,
}

/// Gap of every record, ordered by size then algorithm.
pub fn gaps(records: &[SolutionRecord]) -> Vec<Gap> {
    let best = best_known(records);
    let mut out: Vec<Gap> = records
        .iter()
        .map(|r| Gap {
            n: r.n,
            algorithm: r.algorithm,
            cost: r.cost,
            time: r.time,
            gap_percent: gap_percent(r.cost, best[&r.n]),
        })
        .collect();
    out.sort_by_key(|g| (g.n, g.algorithm));
    out
}

/// Aggregate over all sizes for one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub runs: usize,
    pub mean_gap_percent: f64,
    pub max_gap_percent: f64,
    pub mean_time: f64,
}

/// Per-algorithm summary, in [`Algorithm::ALL`] order. Algorithms without
/// records are omitted.
pub fn summarize(records: &[SolutionRecord]) -> Vec<AlgorithmSummary> {
    let all = gaps(records);
    Algorithm::ALL
        .iter()
        .filter_map(|&algorithm| {
            let rows: Vec<&Gap> = all.iter().filter(|g| g.algorithm == algorithm).collect();
            if rows.is_empty() {
                return None;
            }
            let runs = rows.len();
            Some(AlgorithmSummary {
                algorithm,
                runs,
                mean_gap_percent: rows.iter().map(|g| g.gap_percent).sum::<f64>() / runs as f64,
                max_gap_percent: rows
                    .iter()
                    .map(|g| g.gap_percent)
                    .fold(f64::NEG_INFINITY, f64::max),
                mean_time: rows.iter().map(|g| g.time).sum::<f64>() / runs as f64,
            })
        })
        .collect()
}

/// Plain-text report: one block per size, then the per-algorithm summary.
pub fn render_report(records: &[SolutionRecord]) -> String {
    let mut out = String::new();
    let best = best_known(records);
    let all = gaps(records);

    for (&n, &reference) in &best {
        let _ = writeln!(out, "N = {n} (best known {reference:.4})");
        let _ = writeln!(
            out,
            "  {:<20} {:>14} {:>9} {:>12}",
            "Algorithm", "Cost", "Gap %", "Time (s)"
        );
        for g in all.iter().filter(|g| g.n == n) {
            let _ = writeln!(
                out,
                "  {:<20} {:>14.4} {:>9.3} {:>12.6}",
                g.algorithm.name(),
                g.cost,
                g.gap_percent,
                g.time
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Summary");
    let _ = writeln!(out, "{:-<64}", "");
    for s in summarize(records) {
        let _ = writeln!(
            out,
            "  {:<20} runs={:<3} mean_gap={:.3}% max_gap={:.3}% mean_time={:.6}s",
            s.algorithm.name(),
            s.runs,
            s.mean_gap_percent,
            s.max_gap_percent,
            s.mean_time
        );
    }
    out
}
