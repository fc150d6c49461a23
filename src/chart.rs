// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Serialize;

use crate::models::Observation;

const PALETTE: &str = "#c23531";
const LINE_COLOR: &str = "#F38B00";
/// [`LINE_COLOR`] as RGB components, for terminal output.
pub const LINE_RGB: (u8, u8, u8) = (0xF3, 0x8B, 0x00);
const TEXT_COLOR: &str = "#002033";

/// Declarative line-chart options handed to the renderer.
///
/// Field names serialise to the camelCase keys the chart widget expects.
/// Everything except the title, the x-axis categories and the series data
/// is fixed styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub color: Vec<String>,
    pub title: Title,
    pub grid: Grid,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub tooltip: Tooltip,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    pub font_weight: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub contain_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<String>,
    pub axis_line: Show,
    pub axis_tick: Show,
    pub boundary_gap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub scale: bool,
    pub split_number: u32,
    pub split_line: SplitLine,
    pub axis_label: AxisLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show_min_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: String,
    pub text_style: TextStyle,
    pub class_name: String,
    pub extra_css_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub item_style: ItemStyle,
    pub line_style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub opacity: String,
}

impl ChartOptions {
    pub fn title(&self) -> &str {
        &self.title.text
    }

    pub fn categories(&self) -> &[String] {
        &self.x_axis.data
    }

    pub fn values(&self) -> &[f64] {
        self.series
            .first()
            .map(|series| series.data.as_slice())
            .unwrap_or(&[])
    }
}

/// Chart title such as `КУРС ДОЛЛАРА, $/₽`, or an empty string for an empty series.
pub fn line_title(series: &[Observation], symbol: &str) -> String {
    match series.first() {
        Some(first) => format!("{}, {}/₽", first.indicator.to_uppercase(), symbol),
        None => String::new(),
    }
}

/// Builds the line-chart options for an already filtered series.
pub fn shape(series: &[Observation], symbol: &str) -> ChartOptions {
    let categories = series.iter().map(|o| o.month.clone()).collect();
    let values = series.iter().map(|o| o.value).collect();

    ChartOptions {
        color: vec![PALETTE.to_string()],
        title: Title {
            text: line_title(series, symbol),
            text_style: TextStyle {
                font_size: Some(20),
                line_height: Some(30),
                font_family: Some("Inter".to_string()),
                font_weight: "700".to_string(),
                color: TEXT_COLOR.to_string(),
            },
        },
        grid: Grid {
            left: "30px".to_string(),
            right: "30px".to_string(),
            bottom: "20px".to_string(),
            contain_label: true,
        },
        x_axis: XAxis {
            kind: "category".to_string(),
            data: categories,
            axis_line: Show { show: false },
            axis_tick: Show { show: false },
            boundary_gap: false,
        },
        y_axis: YAxis {
            kind: "value".to_string(),
            scale: true,
            split_number: 3,
            split_line: SplitLine {
                line_style: LineStyle {
                    kind: Some("dashed".to_string()),
                    width: None,
                },
            },
            axis_label: AxisLabel {
                show_min_label: false,
            },
        },
        tooltip: Tooltip {
            trigger: "axis".to_string(),
            text_style: TextStyle {
                font_size: None,
                line_height: None,
                font_family: None,
                font_weight: "700".to_string(),
                color: TEXT_COLOR.to_string(),
            },
            class_name: "tooltip".to_string(),
            extra_css_text: "border: none; width: 10vw;".to_string(),
        },
        series: vec![Series {
            name: series.first().map(|o| o.indicator.clone()),
            data: values,
            kind: "line".to_string(),
            item_style: ItemStyle {
                color: LINE_COLOR.to_string(),
                kind: "none".to_string(),
                opacity: "0".to_string(),
            },
            line_style: LineStyle {
                kind: None,
                width: Some("2".to_string()),
            },
        }],
    }
}
