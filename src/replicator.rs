//! Mean-field replicator dynamics.
//!
//! Deterministic two-strategy trajectories over strategy fractions rather
//! than individual agents: the population is summarized by the hawk
//! fraction alone, updated by relative fitness each generation.

use rand::Rng;

/// Expected payoff to a hawk and to a dove at the given hawk fraction.
pub fn expected_payoffs(hawk_fraction: f64, v: f64, c: f64) -> (f64, f64) {
    let dove_fraction = 1.0 - hawk_fraction;
    let hawk_payoff = hawk_fraction * (v - c) / 2.0 + dove_fraction * v;
    let dove_payoff = dove_fraction * v / 2.0;
    (hawk_payoff, dove_payoff)
}

fn step(hawk_fraction: f64, v: f64, c: f64) -> f64 {
    let (hawk_payoff, dove_payoff) = expected_payoffs(hawk_fraction, v, c);
    let total = hawk_fraction * hawk_payoff + (1.0 - hawk_fraction) * dove_payoff;
    if total == 0.0 {
        return hawk_fraction;
    }
    hawk_fraction * hawk_payoff / total
}

/// Deterministic trajectory of the hawk fraction, starting from the
/// initial value: `generations + 1` samples, initial fraction first.
pub fn trajectory(v: f64, c: f64, initial_hawk_fraction: f64, generations: usize) -> Vec<f64> {
    let mut fractions = Vec::with_capacity(generations + 1);
    fractions.push(initial_hawk_fraction);
    let mut current = initial_hawk_fraction;
    for _ in 0..generations {
        current = step(current, v, c);
        fractions.push(current);
    }
    fractions
}

/// Trajectory with per-generation mutation noise: after each fitness
/// update the fraction is jittered by `mutation_rate * U(-0.5, 0.5)` and
/// clipped back into [0, 1].
pub fn trajectory_with_mutation(
    v: f64,
    c: f64,
    initial_hawk_fraction: f64,
    generations: usize,
    mutation_rate: f64,
    rng: &mut impl Rng,
) -> Vec<f64> {
    let mut fractions = Vec::with_capacity(generations + 1);
    fractions.push(initial_hawk_fraction);
    let mut current = initial_hawk_fraction;
    for _ in 0..generations {
        current = step(current, v, c);
        current += mutation_rate * (rng.gen::<f64>() - 0.5);
        current = current.clamp(0.0, 1.0);
        fractions.push(current);
    }
    fractions
}
