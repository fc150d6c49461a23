// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};

/// A single exchange-rate reading as delivered by the data source.
///
/// `month` is an opaque x-axis label. The order of observations in the
/// payload is taken as chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub indicator: String,
    pub month: String,
    pub value: f64,
}

impl Observation {
    pub fn new(indicator: impl Into<String>, month: impl Into<String>, value: f64) -> Self {
        Self {
            indicator: indicator.into(),
            month: month.into(),
            value,
        }
    }
}
