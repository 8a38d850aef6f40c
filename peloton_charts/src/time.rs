// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time tick generation and formatting helpers.
//!
//! Time is a numeric value in **seconds** (for race times: seconds since midnight), with:
//! - "nice" tick steps for seconds/minutes/hours
//! - `MM:SS` labels for minute-scale axes

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale::ticks_between;

/// Returns tick values on whole time units inside `[min, max]` (seconds).
pub fn nice_time_ticks_seconds(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }

    let step = nice_time_step_seconds((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }
    ticks_between(min, max, step)
}

fn nice_time_step_seconds(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    // Candidate steps in seconds, spanning seconds/minutes/hours.
    const STEPS: &[f64] = &[
        1.0,
        2.0,
        5.0,
        10.0,
        15.0,
        30.0,
        60.0,
        2.0 * 60.0,
        5.0 * 60.0,
        10.0 * 60.0,
        15.0 * 60.0,
        30.0 * 60.0,
        60.0 * 60.0,
        2.0 * 60.0 * 60.0,
        3.0 * 60.0 * 60.0,
        6.0 * 60.0 * 60.0,
        12.0 * 60.0 * 60.0,
    ];

    for &s in STEPS {
        if s >= step {
            return s;
        }
    }
    let hours = (step / 3600.0).ceil();
    (hours.max(1.0)) * 3600.0
}

/// Formats seconds as `MM:SS`, both fields zero-padded.
///
/// Hours are dropped (the minute field wraps at 60), matching `%M:%S` clock formatting.
pub fn format_minutes_seconds(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let secs = {
        let secs_f = v.abs().round().clamp(0.0, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            secs_f as i64
        }
    };
    let m = (secs / 60) % 60;
    let s = secs % 60;
    alloc::format!("{m:02}:{s:02}")
}
