//! Progress and acceleration-cost arithmetic.
//!
//! Progress is a fraction in [0, 1] of a whole batch. Completion is computed
//! lazily from elapsed time, so the only clock interaction here is deriving
//! an end time from a design's build rate; no timers are scheduled.

use chrono::{Duration, NaiveDateTime};

/// The largest batch a single build request may carry. Larger counts are
/// clamped silently rather than rejected.
pub const MAX_BUILD_COUNT: i32 = 5000;

pub fn clamp_count(count: i32) -> i32 {
    count.clamp(1, MAX_BUILD_COUNT)
}

/// Fraction of the batch still to be built.
pub fn remaining(progress: f64) -> f64 {
    (1.0 - progress).clamp(0.0, 1.0)
}

/// Progress gained by accelerating `amount` of the remaining work.
///
/// `amount` is a fraction of the *remaining* progress, so the result never
/// pushes total progress past 1.0.
pub fn acceleration_delta(progress: f64, amount: f64) -> f64 {
    remaining(progress) * amount.clamp(0.0, 1.0)
}

/// Cash cost of accelerating `amount` of the remaining work.
///
/// Only the mineral component of the build cost is charged; see DESIGN.md.
pub fn acceleration_cost(minerals_per_unit: f64, count: i32, progress: f64, amount: f64) -> f64 {
    minerals_per_unit * acceleration_delta(progress, amount) * count as f64
}

/// When the batch will complete, given the per-unit build rate and the work
/// still outstanding.
pub fn completion_time(
    now: NaiveDateTime,
    build_seconds_per_unit: f64,
    count: i32,
    progress: f64,
) -> NaiveDateTime {
    let seconds = build_seconds_per_unit * count as f64 * remaining(progress);

    now + Duration::milliseconds((seconds * 1000.0) as i64)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn clamps_count_to_batch_limits() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(-3), 1);
        assert_eq!(clamp_count(1), 1);
        assert_eq!(clamp_count(5000), 5000);
        assert_eq!(clamp_count(9999), 5000);
    }

    /// The worked example from the game rules: progress 0.5, count 10,
    /// 20 minerals per unit, accelerate 0.4 of the remainder.
    #[test]
    fn computes_cost_from_remaining_progress() {
        let cost = acceleration_cost(20.0, 10, 0.5, 0.4);

        assert_eq!(acceleration_delta(0.5, 0.4), 0.2);
        assert_eq!(cost, 40.0);
    }

    #[test]
    fn full_acceleration_completes_the_batch() {
        let delta = acceleration_delta(0.25, 1.0);

        assert_eq!(0.25 + delta, 1.0);
    }

    #[test]
    fn cost_is_monotonic_in_amount() {
        let amounts = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

        for pair in amounts.windows(2) {
            let lower = acceleration_cost(20.0, 10, 0.5, pair[0]);
            let higher = acceleration_cost(20.0, 10, 0.5, pair[1]);
            assert!(lower <= higher);
        }
    }

    #[test]
    fn delta_never_exceeds_remaining() {
        for progress in [0.0, 0.3, 0.99, 1.0] {
            for amount in [0.0, 0.5, 1.0, 2.5] {
                let delta = acceleration_delta(progress, amount);
                assert!(delta <= remaining(progress) + f64::EPSILON);
                assert!(progress + delta <= 1.0 + f64::EPSILON);
            }
        }
    }

    #[test]
    fn completion_time_scales_with_count_and_progress() {
        let start = noon();

        // 60s per unit, 10 units, nothing built yet: 10 minutes out
        let full = completion_time(start, 60.0, 10, 0.0);
        assert_eq!(full, start + chrono::Duration::minutes(10));

        // Half built: 5 minutes out
        let half = completion_time(start, 60.0, 10, 0.5);
        assert_eq!(half, start + chrono::Duration::minutes(5));

        // Complete: no time remaining
        let done = completion_time(start, 60.0, 10, 1.0);
        assert_eq!(done, start);
    }
}
