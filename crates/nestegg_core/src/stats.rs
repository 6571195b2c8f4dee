//! Order statistics over ensemble outcomes
//!
//! All reductions here are order-independent: they see the outcome set as a
//! multiset, so parallel and serial ensemble runs aggregate identically.

use crate::model::SimulationOutcome;

/// Interpolated percentile of `values`, with `pct` in [0, 100]
///
/// Sorts in place, then interpolates linearly between the bracketing order
/// statistics; `percentile(v, 50.0)` is the conventional median (mean of the
/// two middle values for even counts). Returns NaN for an empty slice.
#[must_use]
pub fn percentile(values: &mut [f64], pct: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        values[low]
    } else {
        let fraction = rank - low as f64;
        values[low] * (1.0 - fraction) + values[high] * fraction
    }
}

/// Median of `values`; sorts in place
#[must_use]
pub fn median(values: &mut [f64]) -> f64 {
    percentile(values, 50.0)
}

/// Percentage of outcomes that end with a strictly positive balance,
/// in [0, 100]. An empty outcome set counts as 0.
#[must_use]
pub fn success_rate(outcomes: &[SimulationOutcome]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let survived = outcomes.iter().filter(|o| o.final_assets > 0.0).count();
    100.0 * survived as f64 / outcomes.len() as f64
}
