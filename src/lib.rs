//! Resource-constrained Hawk/Dove evolutionary simulation.
//!
//! Re-exports the engine and its building blocks for use by external
//! reporting and plotting tools.

pub mod agent;
pub mod config;
pub mod engine;
pub mod harness;
pub mod metrics;
pub mod payoff;
pub mod replicator;
pub mod resource;
pub mod scenario;
pub mod strategy;

pub use agent::{Population, StrategyAgent};
pub use config::{ConfigError, MixedResolution, OverdraftPolicy, ResourceSnapshotMode, SimulationConfig};
pub use engine::{EvolutionEngine, GenerationRecord};
pub use resource::ResourceLedger;
pub use strategy::{Action, StrategyKind};
