//! Two-pool resource accounting.

use serde::{Deserialize, Serialize};

use crate::config::OverdraftPolicy;

/// Tracks the renewable and non-renewable resource pools.
///
/// Payoffs debit the non-renewable pool first, then the renewable pool.
/// The renewable pool regenerates once per generation up to a fixed
/// capacity; the non-renewable pool only ever depletes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceLedger {
    renewable: f64,
    non_renewable: f64,
    capacity: f64,
    overdraft: OverdraftPolicy,
}

impl ResourceLedger {
    /// Split an initial stock into the two pools. The renewable share also
    /// sets that pool's capacity.
    pub fn new(initial_resource: f64, renewable_percent: f64, overdraft: OverdraftPolicy) -> Self {
        let renewable = initial_resource * renewable_percent;
        ResourceLedger {
            renewable,
            non_renewable: initial_resource * (1.0 - renewable_percent),
            capacity: renewable,
            overdraft,
        }
    }

    /// Total resource currently drawable, never negative.
    pub fn available(&self) -> f64 {
        (self.renewable + self.non_renewable).max(0.0)
    }

    pub fn renewable(&self) -> f64 {
        self.renewable
    }

    pub fn non_renewable(&self) -> f64 {
        self.non_renewable
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Debit one interaction's total payoff. Non-positive totals are
    /// ignored: losses from Hawk fights never credit the pools.
    pub fn apply(&mut self, total_payoff: f64) {
        if total_payoff <= 0.0 {
            return;
        }

        if self.non_renewable >= total_payoff {
            self.non_renewable -= total_payoff;
        } else {
            let shortfall = total_payoff - self.non_renewable;
            self.non_renewable = 0.0;
            self.renewable -= shortfall;
            if self.overdraft == OverdraftPolicy::FloorAtZero {
                self.renewable = self.renewable.max(0.0);
            }
        }
    }

    /// Regenerate the renewable pool, capped at capacity. Called exactly
    /// once per generation, after all interactions.
    pub fn renew(&mut self, amount: f64) {
        self.renewable = (self.renewable + amount).min(self.capacity);
    }
}
