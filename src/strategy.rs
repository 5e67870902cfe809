//! Strategy labels and resolved actions.

use serde::{Deserialize, Serialize};

/// Heritable strategy label carried by an agent.
///
/// `Mixed` is a meta-label: it is resolved into a concrete [`Action`]
/// immediately before payoff evaluation and is never played directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Hawk,
    Dove,
    Mixed,
}

impl StrategyKind {
    /// All kinds in declaration order (Hawk, Dove, Mixed).
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Hawk, StrategyKind::Dove, StrategyKind::Mixed];
}

/// A concrete move in one pairwise interaction.
///
/// Only these two actions ever reach the payoff matrix or the learning
/// update; an unresolved `Mixed` cannot be represented here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hawk,
    Dove,
}

impl Action {
    /// Both actions in enumeration order (Hawk before Dove).
    pub const ALL: [Action; 2] = [Action::Hawk, Action::Dove];

    /// Index into a two-entry value table.
    pub fn index(self) -> usize {
        match self {
            Action::Hawk => 0,
            Action::Dove => 1,
        }
    }
}

/// Per-kind counts over a population.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub hawks: usize,
    pub doves: usize,
    pub mixed: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.hawks + self.doves + self.mixed
    }

    pub fn count(&mut self, kind: StrategyKind) {
        match kind {
            StrategyKind::Hawk => self.hawks += 1,
            StrategyKind::Dove => self.doves += 1,
            StrategyKind::Mixed => self.mixed += 1,
        }
    }
}
