//! @ai:module:intent Statistical helpers for response-time samples
//! @ai:module:layer domain
//! @ai:module:public_api mean, percentile, split_by_duration
//! @ai:module:stateless true

use crate::metrics::types::TaskRecord;

/// @ai:intent Arithmetic mean of a non-empty sample
/// @ai:effects pure
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.iter().sum::<f64>() / samples.len() as f64
}

/// @ai:intent Quantile with linear interpolation between sorted ranks
/// @ai:pre samples is sorted ascending and non-empty
/// @ai:effects pure
///
/// The interpolation method is part of the contract: numeric libraries default
/// to different quantile schemes, and nearest-rank would silently shift p90/p99.
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let rank = (p / 100.0) * (samples.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        return samples[lo];
    }

    let frac = rank - lo as f64;
    samples[lo] + (samples[hi] - samples[lo]) * frac
}

/// @ai:intent Response times partitioned by task-size class
#[derive(Debug, Clone, Default)]
pub struct DurationClasses {
    /// Rows at the minimum distinct `duration_ms`
    pub short: Vec<f64>,
    /// Rows at the maximum distinct `duration_ms`; None with fewer than two
    /// distinct duration values
    pub long: Option<Vec<f64>>,
}

/// @ai:intent Split rows into short/long classes by extreme duration values
/// @ai:effects pure
///
/// The simulator draws each task duration from two fixed values, so the
/// minimum and maximum observed `duration_ms` identify the task-size classes.
/// Rows with intermediate durations belong to neither class; rows without a
/// duration are unclassified.
pub fn split_by_duration(records: &[TaskRecord]) -> DurationClasses {
    let timed: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|r| r.duration_ms.map(|d| (d, r.response_time_ms)))
        .collect();

    let Some(&(first, _)) = timed.first() else {
        return DurationClasses::default();
    };

    let (min_d, max_d) = timed.iter().fold((first, first), |(lo, hi), &(d, _)| {
        (lo.min(d), hi.max(d))
    });

    let short = timed
        .iter()
        .filter(|(d, _)| *d == min_d)
        .map(|&(_, rt)| rt)
        .collect();

    let long = if max_d > min_d {
        Some(
            timed
                .iter()
                .filter(|(d, _)| *d == max_d)
                .map(|&(_, rt)| rt)
                .collect(),
        )
    } else {
        None
    };

    DurationClasses { short, long }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(duration_ms: Option<f64>, response_time_ms: f64) -> TaskRecord {
        TaskRecord {
            response_time_ms,
            duration_ms,
        }
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[10.0, 20.0, 30.0]) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_median_even_count() {
        let samples = [10.0, 20.0, 30.0, 40.0];
        assert!((percentile(&samples, 50.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_interpolates_between_ranks() {
        let samples = [10.0, 20.0, 30.0, 40.0];
        // rank = 0.9 * 3 = 2.7 -> 30 + 0.7 * 10
        assert!((percentile(&samples, 90.0) - 37.0).abs() < 1e-9);
        // rank = 0.99 * 3 = 2.97 -> 30 + 0.97 * 10
        assert!((percentile(&samples, 99.0) - 39.7).abs() < 1e-9);
    }

    #[test]
    fn test_percentile_exact_rank() {
        let samples = [10.0, 20.0, 30.0];
        assert!((percentile(&samples, 50.0) - 20.0).abs() < 1e-9);
        assert!((percentile(&samples, 100.0) - 30.0).abs() < 1e-9);
        assert!((percentile(&samples, 0.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_single_distinct_duration_has_no_long_class() {
        let records = vec![record(Some(300.0), 10.0), record(Some(300.0), 20.0)];
        let classes = split_by_duration(&records);
        assert_eq!(classes.short, vec![10.0, 20.0]);
        assert_eq!(classes.long, None);
    }

    #[test]
    fn test_split_two_distinct_durations() {
        let records = vec![
            record(Some(300.0), 10.0),
            record(Some(2000.0), 50.0),
            record(Some(300.0), 12.0),
        ];
        let classes = split_by_duration(&records);
        assert_eq!(classes.short, vec![10.0, 12.0]);
        assert_eq!(classes.long, Some(vec![50.0]));
    }

    #[test]
    fn test_split_intermediate_durations_belong_to_neither() {
        let records = vec![
            record(Some(300.0), 10.0),
            record(Some(800.0), 33.0),
            record(Some(2000.0), 50.0),
        ];
        let classes = split_by_duration(&records);
        assert_eq!(classes.short, vec![10.0]);
        assert_eq!(classes.long, Some(vec![50.0]));
    }

    #[test]
    fn test_split_without_durations() {
        let records = vec![record(None, 10.0), record(None, 20.0)];
        let classes = split_by_duration(&records);
        assert!(classes.short.is_empty());
        assert_eq!(classes.long, None);
    }
}
