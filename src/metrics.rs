//! Descriptive statistics over a finished time series.

use serde::{Deserialize, Serialize};

use crate::engine::GenerationRecord;

/// Summary of one simulation run, computed from its emitted records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations: usize,
    pub final_hawk_fraction: f64,
    pub final_dove_fraction: f64,
    pub final_mixed_fraction: f64,
    pub mean_hawk_fraction: f64,
    pub final_resource: f64,
    pub min_resource: f64,
    /// First generation whose recorded resource level was zero, if any.
    pub depleted_at: Option<usize>,
}

impl RunSummary {
    pub fn compute(records: &[GenerationRecord]) -> Self {
        let Some(last) = records.last() else {
            return RunSummary::default();
        };

        let n = records.len() as f64;
        let mean_hawk_fraction = records.iter().map(|r| r.hawk_fraction).sum::<f64>() / n;
        let min_resource = records
            .iter()
            .map(|r| r.resource_level)
            .fold(f64::INFINITY, f64::min);
        let depleted_at = records.iter().position(|r| r.resource_level <= 0.0);

        RunSummary {
            generations: records.len(),
            final_hawk_fraction: last.hawk_fraction,
            final_dove_fraction: last.dove_fraction,
            final_mixed_fraction: last.mixed_fraction,
            mean_hawk_fraction,
            final_resource: last.resource_level,
            min_resource,
            depleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hawk: f64, resource: f64) -> GenerationRecord {
        GenerationRecord {
            hawk_fraction: hawk,
            dove_fraction: 1.0 - hawk,
            mixed_fraction: 0.0,
            resource_level: resource,
        }
    }

    #[test]
    fn test_summary_of_empty_series() {
        let summary = RunSummary::compute(&[]);
        assert_eq!(summary.generations, 0);
        assert_eq!(summary.depleted_at, None);
    }

    #[test]
    fn test_summary_statistics() {
        let records = [record(0.2, 100.0), record(0.4, 50.0), record(0.6, 0.0)];
        let summary = RunSummary::compute(&records);
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.final_hawk_fraction, 0.6);
        assert_eq!(summary.final_dove_fraction, 0.4);
        assert!((summary.mean_hawk_fraction - 0.4).abs() < 1e-12);
        assert_eq!(summary.min_resource, 0.0);
        assert_eq!(summary.final_resource, 0.0);
        assert_eq!(summary.depleted_at, Some(2));
    }

    #[test]
    fn test_depletion_not_reported_when_resource_stays_positive() {
        let records = [record(0.5, 10.0), record(0.5, 5.0)];
        assert_eq!(RunSummary::compute(&records).depleted_at, None);
    }
}
