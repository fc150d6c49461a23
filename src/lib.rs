// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

pub mod api;
pub mod average;
pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod log;
pub mod models;
pub mod tui;

pub use api::{RatesClient, RatesSource};
pub use chart::ChartOptions;
pub use controller::{derive_view, ControllerState, SelectionController, View};
pub use error::FetchError;
pub use models::{Currency, Observation};
