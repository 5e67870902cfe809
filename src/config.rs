//! Configuration for the evolutionary simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the payoff resource gate reads a per-generation snapshot or the
/// live, continuously-debited pool. The two differ materially once the pool
/// runs low mid-generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceSnapshotMode {
    /// Gate every interaction of a generation on the availability observed
    /// at the start of that generation.
    Snapshot,
    /// Gate each interaction on the pool as already debited by earlier
    /// interactions in the same generation.
    Live,
}

/// How a `Mixed` agent is resolved into a concrete action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedResolution {
    /// 50/50 uniform draw over Hawk/Dove.
    Uniform,
    /// Draw weighted by the agent's own non-negative learned values.
    ValueWeighted,
}

/// What happens when a debit exceeds both pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverdraftPolicy {
    /// Clamp the renewable pool at zero (default).
    FloorAtZero,
    /// Let the renewable pool go negative; availability still reads as zero.
    AllowNegative,
}

/// Parameters for one simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Value of the contested resource in one interaction.
    pub v: f64,

    /// Cost of a Hawk-Hawk fight, shared by both fighters.
    pub c: f64,

    /// Requested population size; floor-based initial assignment may
    /// realize fewer agents when the initial fractions sum below 1.
    pub population_size: usize,

    /// Initial fraction of Hawk agents.
    pub initial_hawk_fraction: f64,

    /// Initial fraction of Dove agents.
    pub initial_dove_fraction: f64,

    /// Initial fraction of Mixed agents.
    pub initial_mixed_fraction: f64,

    /// Per-agent, per-generation probability of redrawing the strategy kind.
    pub mutation_rate: f64,

    /// Number of generations to simulate.
    pub generations: usize,

    /// Q-learning step size (alpha).
    pub learning_rate: f64,

    /// Q-learning discount factor (gamma).
    pub discount: f64,

    /// Epsilon-greedy exploration probability.
    pub exploration_rate: f64,

    /// Total resource at the start of the run, split across the two pools.
    pub initial_resource: f64,

    /// Share of the initial resource placed in the renewable pool; also
    /// fixes that pool's capacity. The rest is non-renewable.
    pub renewable_percent: f64,

    /// Amount added to the renewable pool once per generation.
    pub renewal_amount: f64,

    /// Also apply the learning update to the sampled opponent.
    pub update_opponent_also: bool,

    /// Resource gate timing (see [`ResourceSnapshotMode`]).
    pub resource_snapshot_mode: ResourceSnapshotMode,

    /// Mixed-agent resolution policy (see [`MixedResolution`]).
    pub mixed_resolution: MixedResolution,

    /// Relabel the population to floor-exact kind counts after every
    /// generation. A normalization artifact of one historical variant;
    /// off unless explicitly requested.
    pub resample_each_generation: bool,

    /// Renewable-pool overdraft handling (see [`OverdraftPolicy`]).
    pub overdraft: OverdraftPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            v: 50.0,
            c: 100.0,
            population_size: 100,
            initial_hawk_fraction: 0.5,
            initial_dove_fraction: 0.5,
            initial_mixed_fraction: 0.0,
            mutation_rate: 0.01,
            generations: 1000,
            learning_rate: 0.1,
            discount: 0.95,
            exploration_rate: 0.1,
            // Large enough that the gate never closes unless a scenario
            // deliberately tightens it.
            initial_resource: 1e9,
            renewable_percent: 0.5,
            renewal_amount: 1e8,
            update_opponent_also: false,
            resource_snapshot_mode: ResourceSnapshotMode::Live,
            mixed_resolution: MixedResolution::Uniform,
            resample_each_generation: false,
            overdraft: OverdraftPolicy::FloorAtZero,
        }
    }
}

/// Construction-time validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("initial fractions sum to {sum}, which exceeds 1")]
    FractionSumExceedsOne { sum: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f64 },

    #[error("initial fractions floor to zero agents for population size {size}")]
    EmptyRealizedPopulation { size: usize },
}

const FRACTION_SUM_TOLERANCE: f64 = 1e-9;

impl SimulationConfig {
    /// Check every parameter range; nothing is silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::NonPositive { name: "population_size", value: 0 });
        }
        if self.generations == 0 {
            return Err(ConfigError::NonPositive { name: "generations", value: 0 });
        }

        let fractions = [
            ("initial_hawk_fraction", self.initial_hawk_fraction),
            ("initial_dove_fraction", self.initial_dove_fraction),
            ("initial_mixed_fraction", self.initial_mixed_fraction),
            ("mutation_rate", self.mutation_rate),
            ("exploration_rate", self.exploration_rate),
            ("renewable_percent", self.renewable_percent),
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }

        let sum = self.initial_hawk_fraction + self.initial_dove_fraction + self.initial_mixed_fraction;
        if sum > 1.0 + FRACTION_SUM_TOLERANCE {
            return Err(ConfigError::FractionSumExceedsOne { sum });
        }

        let amounts = [
            ("v", self.v),
            ("c", self.c),
            ("initial_resource", self.initial_resource),
            ("renewal_amount", self.renewal_amount),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }

        Ok(())
    }
}
