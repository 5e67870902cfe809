//! Agents and the population they form.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MixedResolution;
use crate::strategy::{Action, KindCounts, StrategyKind};

/// Guard against division by zero in value-weighted resolution.
const VALUE_WEIGHT_EPSILON: f64 = 1e-6;

/// One population member: a strategy label plus a learned value table over
/// the two concrete actions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrategyAgent {
    pub kind: StrategyKind,
    values: [f64; 2],
    exploration_rate: f64,
}

impl StrategyAgent {
    pub fn new(kind: StrategyKind, exploration_rate: f64) -> Self {
        StrategyAgent {
            kind,
            values: [0.0; 2],
            exploration_rate,
        }
    }

    /// Learned estimate for one action.
    pub fn value(&self, action: Action) -> f64 {
        self.values[action.index()]
    }

    /// Best learned estimate across both actions.
    pub fn max_value(&self) -> f64 {
        self.values[0].max(self.values[1])
    }

    /// Resolve this agent to a concrete action.
    ///
    /// Mixed agents draw per the configured resolution policy; everyone
    /// else plays epsilon-greedy over the value table, ties going to Hawk
    /// (enumeration order).
    pub fn choose_action(&self, resolution: MixedResolution, rng: &mut impl Rng) -> Action {
        if self.kind == StrategyKind::Mixed {
            return self.resolve_mixed(resolution, rng);
        }

        if rng.gen::<f64>() < self.exploration_rate {
            Action::ALL[rng.gen_range(0..Action::ALL.len())]
        } else if self.values[Action::Dove.index()] > self.values[Action::Hawk.index()] {
            Action::Dove
        } else {
            Action::Hawk
        }
    }

    fn resolve_mixed(&self, resolution: MixedResolution, rng: &mut impl Rng) -> Action {
        let hawk_prob = match resolution {
            MixedResolution::Uniform => 0.5,
            MixedResolution::ValueWeighted => {
                let hawk_weight = self.value(Action::Hawk).max(0.0);
                let dove_weight = self.value(Action::Dove).max(0.0);
                hawk_weight / (hawk_weight + dove_weight + VALUE_WEIGHT_EPSILON)
            }
        };
        if rng.gen::<f64>() < hawk_prob {
            Action::Hawk
        } else {
            Action::Dove
        }
    }

    /// Temporal-difference update:
    /// `q[a] += alpha * (reward + gamma * next_max - q[a])`.
    pub fn update_value(&mut self, action: Action, reward: f64, next_max: f64, learning_rate: f64, discount: f64) {
        let entry = &mut self.values[action.index()];
        *entry += learning_rate * (reward + discount * next_max - *entry);
        debug_assert!(entry.is_finite());
    }

    /// With probability `rate`, redraw the strategy kind uniformly over all
    /// three kinds (the current kind included). The value table survives
    /// mutation untouched.
    pub fn mutate(&mut self, rate: f64, rng: &mut impl Rng) {
        if rng.gen::<f64>() < rate {
            self.kind = StrategyKind::ALL[rng.gen_range(0..StrategyKind::ALL.len())];
        }
    }
}

/// Ordered collection of agents. The realized size is fixed at
/// construction and never changes: mutation relabels agents, it never adds
/// or removes them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Population {
    pub agents: Vec<StrategyAgent>,
}

impl Population {
    /// Assign `floor(fraction * size)` agents per kind, in declaration
    /// order Hawk, Dove, Mixed. Fractions summing below 1 leave the
    /// remainder unfilled, so the realized size may be smaller than
    /// requested.
    pub fn new(
        size: usize,
        hawk_fraction: f64,
        dove_fraction: f64,
        mixed_fraction: f64,
        exploration_rate: f64,
    ) -> Self {
        let mut agents = Vec::with_capacity(size);
        let per_kind = [
            (StrategyKind::Hawk, hawk_fraction),
            (StrategyKind::Dove, dove_fraction),
            (StrategyKind::Mixed, mixed_fraction),
        ];
        for (kind, fraction) in per_kind {
            let count = (size as f64 * fraction) as usize;
            for _ in 0..count {
                agents.push(StrategyAgent::new(kind, exploration_rate));
            }
        }
        Population { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for agent in &self.agents {
            counts.count(agent.kind);
        }
        counts
    }

    /// Per-kind fractions over the realized size.
    pub fn fractions(&self) -> (f64, f64, f64) {
        let counts = self.counts();
        let total = self.agents.len().max(1) as f64;
        (
            counts.hawks as f64 / total,
            counts.doves as f64 / total,
            counts.mixed as f64 / total,
        )
    }

    /// Relabel the population to `floor(size * fraction)` agents per kind,
    /// padding any rounding shortfall with uniform random kinds and
    /// truncating any excess. Value tables stay with their agents; only
    /// labels move.
    pub fn resample(
        &mut self,
        hawk_fraction: f64,
        dove_fraction: f64,
        mixed_fraction: f64,
        rng: &mut impl Rng,
    ) {
        let size = self.agents.len();
        let mut kinds = Vec::with_capacity(size);
        let per_kind = [
            (StrategyKind::Hawk, hawk_fraction),
            (StrategyKind::Dove, dove_fraction),
            (StrategyKind::Mixed, mixed_fraction),
        ];
        for (kind, fraction) in per_kind {
            let count = (size as f64 * fraction) as usize;
            kinds.extend(std::iter::repeat(kind).take(count));
        }
        while kinds.len() < size {
            kinds.push(StrategyKind::ALL[rng.gen_range(0..StrategyKind::ALL.len())]);
        }
        kinds.truncate(size);

        for (agent, kind) in self.agents.iter_mut().zip(kinds) {
            agent.kind = kind;
        }
    }
}
