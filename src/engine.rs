//! Evolution engine.
//!
//! Orchestrates the generation loop: matchmaking, payoff resolution,
//! learning updates, mutation, and resource renewal, emitting one record
//! per generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::agent::Population;
use crate::config::{ConfigError, ResourceSnapshotMode, SimulationConfig};
use crate::payoff::payoff;
use crate::resource::ResourceLedger;

/// Per-generation observation, recorded before the generation's
/// interactions run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub hawk_fraction: f64,
    pub dove_fraction: f64,
    pub mixed_fraction: f64,
    pub resource_level: f64,
}

/// The simulation engine.
///
/// All randomness (opponent sampling, exploration, Mixed resolution,
/// mutation, resample padding) draws from one seeded generator, so an
/// identical seed and configuration reproduce an identical time series.
pub struct EvolutionEngine {
    config: SimulationConfig,
    population: Population,
    ledger: ResourceLedger,
    rng: ChaCha8Rng,
}

impl EvolutionEngine {
    /// Validate the configuration and build the initial population and
    /// resource ledger.
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::new(
            config.population_size,
            config.initial_hawk_fraction,
            config.initial_dove_fraction,
            config.initial_mixed_fraction,
            config.exploration_rate,
        );
        // Floor-based assignment can realize zero agents from a small size
        // and fractions (e.g. size 1 at 0.5/0.5/0.0); a run over nobody
        // could never report fractions summing to 1.
        if population.is_empty() {
            return Err(ConfigError::EmptyRealizedPopulation { size: config.population_size });
        }
        let ledger = ResourceLedger::new(config.initial_resource, config.renewable_percent, config.overdraft);
        Ok(EvolutionEngine {
            config,
            population,
            ledger,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Run the configured number of generations and return the full time
    /// series. No early termination.
    pub fn run(&mut self) -> Vec<GenerationRecord> {
        let mut records = Vec::with_capacity(self.config.generations);
        for generation in 0..self.config.generations {
            let record = self.run_generation();
            trace!(
                generation,
                hawk_fraction = record.hawk_fraction,
                resource_level = record.resource_level,
                "generation complete"
            );
            records.push(record);
        }
        debug!(
            generations = records.len(),
            final_resource = self.ledger.available(),
            "simulation complete"
        );
        records
    }

    /// Run a single generation and return its record.
    pub fn run_generation(&mut self) -> GenerationRecord {
        // 1. Observe fractions and resource level before any interaction.
        let (hawk_fraction, dove_fraction, mixed_fraction) = self.population.fractions();
        let record = GenerationRecord {
            hawk_fraction,
            dove_fraction,
            mixed_fraction,
            resource_level: self.ledger.available(),
        };

        // 2. Snapshot the pool once if the gate is snapshot-timed.
        let snapshot = match self.config.resource_snapshot_mode {
            ResourceSnapshotMode::Snapshot => Some(self.ledger.available()),
            ResourceSnapshotMode::Live => None,
        };

        // 3. Every agent, in population order, interacts once with a
        // uniformly drawn opponent. Self-pairing and duplicate pairing are
        // allowed: this is sampling, not a round-robin tournament.
        let size = self.population.len();
        for i in 0..size {
            let opponent = self.rng.gen_range(0..size);

            let action_self = self.population.agents[i]
                .choose_action(self.config.mixed_resolution, &mut self.rng);
            let action_opponent = self.population.agents[opponent]
                .choose_action(self.config.mixed_resolution, &mut self.rng);

            let available = snapshot.unwrap_or_else(|| self.ledger.available());
            let (reward_self, reward_opponent) =
                payoff(action_self, action_opponent, self.config.v, self.config.c, available);

            // 4. Debit the pools with the interaction's total.
            self.ledger.apply(reward_self + reward_opponent);

            // 5. Learning updates.
            let next_max = self.population.agents[i].max_value();
            self.population.agents[i].update_value(
                action_self,
                reward_self,
                next_max,
                self.config.learning_rate,
                self.config.discount,
            );
            if self.config.update_opponent_also {
                let next_max_opponent = self.population.agents[opponent].max_value();
                self.population.agents[opponent].update_value(
                    action_opponent,
                    reward_opponent,
                    next_max_opponent,
                    self.config.learning_rate,
                    self.config.discount,
                );
            }

            // 6. Mutation roll for the acting agent.
            self.population.agents[i].mutate(self.config.mutation_rate, &mut self.rng);
        }

        // 7. Renew the renewable pool, once per generation.
        self.ledger.renew(self.config.renewal_amount);

        // 8. Optional corrective relabeling to floor-exact counts.
        if self.config.resample_each_generation {
            let (hawks, doves, mixed) = self.population.fractions();
            self.population.resample(hawks, doves, mixed, &mut self.rng);
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MixedResolution, OverdraftPolicy};
    use crate::strategy::Action;

    fn pressured_config() -> SimulationConfig {
        SimulationConfig {
            v: 50.0,
            c: 70.0,
            population_size: 40,
            initial_hawk_fraction: 0.25,
            initial_dove_fraction: 0.25,
            initial_mixed_fraction: 0.5,
            mutation_rate: 0.05,
            generations: 200,
            initial_resource: 2000.0,
            renewable_percent: 0.5,
            renewal_amount: 100.0,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_same_seed_reproduces_time_series() {
        let config = pressured_config();
        let first = EvolutionEngine::new(config.clone(), 42).unwrap().run();
        let second = EvolutionEngine::new(config, 42).unwrap().run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let config = pressured_config();
        let first = EvolutionEngine::new(config.clone(), 1).unwrap().run();
        let second = EvolutionEngine::new(config, 2).unwrap().run();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fractions_sum_to_one_every_generation() {
        let mut engine = EvolutionEngine::new(pressured_config(), 9).unwrap();
        for record in engine.run() {
            let sum = record.hawk_fraction + record.dove_fraction + record.mixed_fraction;
            assert!((sum - 1.0).abs() < 1e-9, "fractions sum to {sum}");
        }
    }

    #[test]
    fn test_resource_never_negative_and_capacity_respected() {
        let mut engine = EvolutionEngine::new(pressured_config(), 17).unwrap();
        for _ in 0..engine.config().generations {
            let record = engine.run_generation();
            assert!(record.resource_level >= 0.0);
            assert!(engine.ledger().available() >= 0.0);
            assert!(engine.ledger().renewable() <= engine.ledger().capacity() + 1e-9);
        }
    }

    #[test]
    fn test_population_size_invariant_across_run() {
        let mut engine = EvolutionEngine::new(pressured_config(), 23).unwrap();
        let size = engine.population().len();
        engine.run();
        assert_eq!(engine.population().len(), size);
    }

    #[test]
    fn test_empty_realized_population_is_rejected() {
        // Size 1 with 0.5/0.5 fractions floors every kind to zero agents;
        // such a run could only emit all-zero fraction records.
        let config = SimulationConfig {
            population_size: 1,
            initial_hawk_fraction: 0.5,
            initial_dove_fraction: 0.5,
            initial_mixed_fraction: 0.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            EvolutionEngine::new(config, 0),
            Err(ConfigError::EmptyRealizedPopulation { size: 1 })
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = pressured_config();
        config.mutation_rate = -0.5;
        assert!(EvolutionEngine::new(config, 0).is_err());
    }

    #[test]
    fn test_learned_value_converges_to_fixed_reward() {
        // Single hawk agent always self-pairs: every interaction plays
        // Hawk-Hawk for a constant (v - c) / 2 = 25 reward. With zero
        // discount the value estimate must converge to that reward.
        let config = SimulationConfig {
            v: 50.0,
            c: 0.0,
            population_size: 1,
            initial_hawk_fraction: 1.0,
            initial_dove_fraction: 0.0,
            initial_mixed_fraction: 0.0,
            mutation_rate: 0.0,
            exploration_rate: 0.0,
            discount: 0.0,
            generations: 500,
            ..SimulationConfig::default()
        };
        let mut engine = EvolutionEngine::new(config, 3).unwrap();
        engine.run();
        let value = engine.population().agents[0].value(Action::Hawk);
        assert!((value - 25.0).abs() < 1e-6, "value was {value}");
    }

    #[test]
    fn test_snapshot_gate_outpays_live_gate_under_depletion() {
        // Two hawks, one pool debit exhausts the resource. Under the live
        // gate the second interaction of the generation pays nothing; under
        // the snapshot gate it still pays, so more value is learned.
        let base = SimulationConfig {
            v: 50.0,
            c: 0.0,
            population_size: 2,
            initial_hawk_fraction: 1.0,
            initial_dove_fraction: 0.0,
            initial_mixed_fraction: 0.0,
            mutation_rate: 0.0,
            exploration_rate: 0.0,
            discount: 0.0,
            generations: 1,
            initial_resource: 25.0,
            renewable_percent: 0.0,
            renewal_amount: 0.0,
            update_opponent_also: true,
            overdraft: OverdraftPolicy::FloorAtZero,
            ..SimulationConfig::default()
        };

        let total_learned = |mode: ResourceSnapshotMode| {
            let config = SimulationConfig { resource_snapshot_mode: mode, ..base.clone() };
            let mut engine = EvolutionEngine::new(config, 7).unwrap();
            engine.run_generation();
            engine
                .population()
                .agents
                .iter()
                .map(|a| a.value(Action::Hawk) + a.value(Action::Dove))
                .sum::<f64>()
        };

        let snapshot = total_learned(ResourceSnapshotMode::Snapshot);
        let live = total_learned(ResourceSnapshotMode::Live);
        assert!(snapshot > live, "snapshot {snapshot} vs live {live}");
    }

    #[test]
    fn test_resample_keeps_counts_exact() {
        let config = SimulationConfig {
            resample_each_generation: true,
            mixed_resolution: MixedResolution::ValueWeighted,
            generations: 50,
            ..pressured_config()
        };
        let mut engine = EvolutionEngine::new(config, 31).unwrap();
        let size = engine.population().len();
        for _ in 0..50 {
            engine.run_generation();
            assert_eq!(engine.population().counts().total(), size);
        }
    }
}
