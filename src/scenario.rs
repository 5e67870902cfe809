//! Named scenario configurations.
//!
//! Each historical flavor of the simulation is one configuration of the
//! single engine rather than a forked copy: abundant-resource population
//! play, single-pool depletion, two-pool accounting, and the two
//! reinforcement-learning setups.

use crate::config::{MixedResolution, OverdraftPolicy, ResourceSnapshotMode, SimulationConfig};

/// Three-strategy population play with resources abundant enough that the
/// gate never closes. Mixed agents resolve by a fair coin.
pub fn multi_strategy() -> SimulationConfig {
    SimulationConfig {
        v: 50.0,
        c: 100.0,
        population_size: 100,
        initial_hawk_fraction: 0.25,
        initial_dove_fraction: 0.25,
        initial_mixed_fraction: 0.5,
        mutation_rate: 0.01,
        generations: 1000,
        mixed_resolution: MixedResolution::Uniform,
        ..SimulationConfig::default()
    }
}

/// Single depleting pool: everything is non-renewable, nothing renews, and
/// each interaction is gated on the live pool as earlier interactions in
/// the same generation drain it. A pool once exhausted clamps at empty.
pub fn resource_constrained() -> SimulationConfig {
    SimulationConfig {
        initial_hawk_fraction: 0.25,
        initial_dove_fraction: 0.25,
        initial_mixed_fraction: 0.5,
        initial_resource: 10_000.0,
        renewable_percent: 0.0,
        renewal_amount: 0.0,
        resource_snapshot_mode: ResourceSnapshotMode::Live,
        overdraft: OverdraftPolicy::FloorAtZero,
        ..SimulationConfig::default()
    }
}

/// Two-pool accounting: half the stock renews 10% of its capacity per
/// generation, and the gate reads one availability snapshot per
/// generation. The renewable pool may be overdrawn into debt that renewal
/// has to pay back before availability recovers.
pub fn combined_pools() -> SimulationConfig {
    let initial_resource = 10_000.0;
    let renewable_percent = 0.5;
    SimulationConfig {
        initial_hawk_fraction: 0.25,
        initial_dove_fraction: 0.25,
        initial_mixed_fraction: 0.5,
        initial_resource,
        renewable_percent,
        renewal_amount: initial_resource * renewable_percent * 0.1,
        resource_snapshot_mode: ResourceSnapshotMode::Snapshot,
        overdraft: OverdraftPolicy::AllowNegative,
        ..SimulationConfig::default()
    }
}

/// Two-strategy Q-learning: hawks and doves only, epsilon-greedy play over
/// the learned values, abundant resources.
pub fn q_learning() -> SimulationConfig {
    SimulationConfig {
        v: 50.0,
        c: 100.0,
        initial_hawk_fraction: 0.5,
        initial_dove_fraction: 0.5,
        initial_mixed_fraction: 0.0,
        ..SimulationConfig::default()
    }
}

/// Q-learning with a Mixed contingent: Mixed agents resolve in proportion
/// to their own learned values, and the population is relabeled to
/// floor-exact counts after every generation.
pub fn q_learning_mixed() -> SimulationConfig {
    SimulationConfig {
        v: 50.0,
        c: 100.0,
        initial_hawk_fraction: 0.3,
        initial_dove_fraction: 0.3,
        initial_mixed_fraction: 0.4,
        mixed_resolution: MixedResolution::ValueWeighted,
        resample_each_generation: true,
        ..SimulationConfig::default()
    }
}
