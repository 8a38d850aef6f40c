// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a value as a plain integer: rounded, no grouping separators (`1994`, not `1,994`).
pub fn format_integer(v: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let r = v.round().clamp(i64::MIN as f64, i64::MAX as f64);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
    let i = r as i64;
    alloc::format!("{i}")
}

/// Formats a tick value with just enough decimals to distinguish ticks `step` apart.
pub(crate) fn format_tick_with_step(v: f64, step: f64) -> String {
    let step = step.abs();
    if !v.is_finite() || !step.is_finite() || step == 0.0 || step >= 1.0 {
        return format_integer(v);
    }
    let decimals = (-step.log10().floor()).clamp(0.0, 12.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=12")]
    let decimals = decimals as usize;
    alloc::format!("{v:.decimals$}")
}
