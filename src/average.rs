// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::models::Observation;

/// Arithmetic mean of the observation values, `None` for an empty series.
pub fn average(series: &[Observation]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }

    let sum: f64 = series.iter().map(|observation| observation.value).sum();
    Some(sum / series.len() as f64)
}

/// Renders an average the way the "average for the period" block shows it:
/// one decimal place followed by the rouble sign. No value renders as a bare sign.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.1} ₽", round_tenths(value)),
        None => "₽".to_string(),
    }
}

/// Rounds exact halfway cases away from zero; `{:.1}` alone would round them to even.
///
/// A value sits exactly between two tenths only when it is an odd number of
/// quarters (`x.25`, `x.75`), and then `value * 10.0` is exact. Every other
/// value is left to the formatter, which rounds its exact binary value.
fn round_tenths(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}
