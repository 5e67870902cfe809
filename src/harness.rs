//! Multi-seed batch runner.
//!
//! Runs the same configuration across consecutive seeds and aggregates the
//! per-run summaries, for parameter comparison across stochastic runs.

use tracing::debug;

use crate::config::{ConfigError, SimulationConfig};
use crate::engine::EvolutionEngine;
use crate::metrics::RunSummary;

/// Configuration for a batch of simulation runs.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub name: String,
    pub config: SimulationConfig,
    pub num_runs: u32,
    pub base_seed: u64,
}

/// Results collected from a batch of runs.
#[derive(Clone, Debug)]
pub struct BatchResults {
    pub name: String,
    pub summaries: Vec<RunSummary>,
    pub mean_final_hawk: f64,
    pub stddev_final_hawk: f64,
    pub min_final_hawk: f64,
    pub max_final_hawk: f64,
}

impl BatchResults {
    /// Human-readable aggregate report.
    pub fn report(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("=== Batch: {} ({} runs) ===\n", self.name, self.summaries.len()));
        s.push_str(&format!(
            "Final hawk fraction: {:.3} +/- {:.3} (min {:.3}, max {:.3})\n",
            self.mean_final_hawk, self.stddev_final_hawk, self.min_final_hawk, self.max_final_hawk
        ));
        let depleted = self.summaries.iter().filter(|m| m.depleted_at.is_some()).count();
        s.push_str(&format!("Runs hitting resource depletion: {depleted}\n"));
        s
    }
}

/// Run `num_runs` simulations seeded `base_seed`, `base_seed + 1`, ... and
/// collect per-run summaries.
pub fn run_batch(batch: &BatchConfig) -> Result<BatchResults, ConfigError> {
    if batch.num_runs == 0 {
        return Err(ConfigError::NonPositive { name: "num_runs", value: 0 });
    }

    let mut summaries = Vec::with_capacity(batch.num_runs as usize);

    for run in 0..batch.num_runs {
        let seed = batch.base_seed.wrapping_add(run as u64);
        let mut engine = EvolutionEngine::new(batch.config.clone(), seed)?;
        let records = engine.run();
        let summary = RunSummary::compute(&records);
        debug!(
            batch = %batch.name,
            run,
            seed,
            final_hawk = summary.final_hawk_fraction,
            "batch run complete"
        );
        summaries.push(summary);
    }

    let finals: Vec<f64> = summaries.iter().map(|m| m.final_hawk_fraction).collect();
    let n = finals.len() as f64;
    let mean = finals.iter().sum::<f64>() / n.max(1.0);
    let variance = finals.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / (n - 1.0).max(1.0);

    Ok(BatchResults {
        name: batch.name.clone(),
        summaries,
        mean_final_hawk: mean,
        stddev_final_hawk: variance.sqrt(),
        min_final_hawk: finals.iter().copied().fold(f64::INFINITY, f64::min),
        max_final_hawk: finals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}
