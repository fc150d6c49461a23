// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::average::format_average;
use crate::controller::View;
use crate::models::Currency;

/// Plain-text rendering of a view: title, one row per month and the average.
pub fn format_view(view: &View) -> String {
    let mut out = String::new();
    out.push_str(view.chart.title());
    out.push('\n');
    for (month, value) in view.chart.categories().iter().zip(view.chart.values()) {
        out.push_str(&format!("{:<12}{:>10.2}\n", month, value));
    }
    out.push_str(&format!(
        "Среднее за период: {}\n",
        format_average(view.average)
    ));
    out
}

/// Writes the chart options of `view` as pretty JSON into `output_dir`.
pub fn save_chart(view: &View, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let code = Currency::from_symbol(&view.symbol)
        .map(Currency::code)
        .unwrap_or("UNKNOWN");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("chart_{}_{}.json", code, timestamp));

    let json = serde_json::to_string_pretty(&view.chart)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
