//! Pairwise payoff matrix, gated by resource availability.

use crate::strategy::Action;

/// Payoff to each party of one interaction between resolved actions.
///
/// When no resource is available the interaction yields nothing to either
/// side, regardless of the pairing. Otherwise the classic Hawk/Dove matrix
/// applies: Hawks split value minus fight cost against each other, take the
/// whole value from Doves, and Doves share peacefully.
pub fn payoff(a: Action, b: Action, v: f64, c: f64, available_resource: f64) -> (f64, f64) {
    if available_resource <= 0.0 {
        return (0.0, 0.0);
    }

    match (a, b) {
        (Action::Hawk, Action::Hawk) => ((v - c) / 2.0, (v - c) / 2.0),
        (Action::Hawk, Action::Dove) => (v, 0.0),
        (Action::Dove, Action::Hawk) => (0.0, v),
        (Action::Dove, Action::Dove) => (v / 2.0, v / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_payoffs() {
        let (v, c) = (50.0, 70.0);
        assert_eq!(payoff(Action::Hawk, Action::Hawk, v, c, 1.0), (-10.0, -10.0));
        assert_eq!(payoff(Action::Hawk, Action::Dove, v, c, 1.0), (50.0, 0.0));
        assert_eq!(payoff(Action::Dove, Action::Hawk, v, c, 1.0), (0.0, 50.0));
        assert_eq!(payoff(Action::Dove, Action::Dove, v, c, 1.0), (25.0, 25.0));
    }

    #[test]
    fn test_resource_gate_overrides_pairing() {
        for a in Action::ALL {
            for b in Action::ALL {
                assert_eq!(payoff(a, b, 50.0, 70.0, 0.0), (0.0, 0.0));
                assert_eq!(payoff(a, b, 50.0, 70.0, -5.0), (0.0, 0.0));
            }
        }
    }
}
