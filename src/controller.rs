// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use tracing::{debug, error, info, warn};

use crate::api::RatesSource;
use crate::average::average;
use crate::chart::{shape, ChartOptions};
use crate::error::FetchError;
use crate::filter::filter_by_currency;
use crate::models::{Currency, Observation};

/// Everything the presentation layer needs for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub symbol: String,
    pub chart: ChartOptions,
    pub average: Option<f64>,
}

/// Filters `observations` for `symbol` and derives the chart and the average from the result.
pub fn derive_view(observations: &[Observation], symbol: &str) -> View {
    let filtered = filter_by_currency(observations, symbol);
    View {
        symbol: symbol.to_string(),
        chart: shape(&filtered, symbol),
        average: average(&filtered),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    observations: Vec<Observation>,
    view: View,
}

impl Loaded {
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerState {
    Uninitialized,
    Loading,
    Ready(Loaded),
}

/// Owns the fetched observations and the current selection.
///
/// Data is fetched at most once. Every selection change or data refresh
/// rebuilds the [`View`] from scratch.
pub struct SelectionController<S> {
    source: S,
    state: ControllerState,
}

impl<S: RatesSource> SelectionController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ControllerState::Uninitialized,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ControllerState::Ready(_))
    }

    pub fn view(&self) -> Option<&View> {
        match &self.state {
            ControllerState::Ready(loaded) => Some(&loaded.view),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&str> {
        self.view().map(|view| view.symbol.as_str())
    }

    /// Fetches the observations and applies the initial selection.
    ///
    /// Only the first call reaches the data source. On failure the
    /// controller stays in `Loading`.
    pub async fn start(&mut self) -> Option<&View> {
        if !self.begin_loading() {
            warn!("observations were already requested, not fetching again");
            return self.view();
        }

        let result = self.source.fetch_observations().await;
        self.complete_loading(result)
    }

    /// Moves `Uninitialized` to `Loading`. Returns `false` if loading had already begun,
    /// in which case the caller must not fetch.
    pub fn begin_loading(&mut self) -> bool {
        if self.state != ControllerState::Uninitialized {
            return false;
        }
        info!("loading observations");
        self.state = ControllerState::Loading;
        true
    }

    /// Applies the outcome of the fetch started by [`begin_loading`](Self::begin_loading).
    pub fn complete_loading(
        &mut self,
        result: Result<Vec<Observation>, FetchError>,
    ) -> Option<&View> {
        match result {
            Ok(observations) => {
                info!(count = observations.len(), "observations loaded");
                self.refresh(observations)
            }
            Err(err) => {
                error!(error = %err, "Error fetching data");
                None
            }
        }
    }

    /// Switches the selection. Ignored until data has been loaded.
    pub fn select_currency(&mut self, symbol: &str) -> Option<&View> {
        match &mut self.state {
            ControllerState::Ready(loaded) => {
                debug!(symbol, "currency selected");
                loaded.view = derive_view(&loaded.observations, symbol);
                Some(&loaded.view)
            }
            _ => {
                debug!(symbol, "selection ignored, no data yet");
                None
            }
        }
    }

    /// Replaces the observations and re-derives the view for the current
    /// selection, or for the first currency if nothing was selected yet.
    pub fn refresh(&mut self, observations: Vec<Observation>) -> Option<&View> {
        let symbol = self
            .selection()
            .map(str::to_string)
            .unwrap_or_else(|| Currency::ALL[0].symbol().to_string());

        let view = derive_view(&observations, &symbol);
        self.state = ControllerState::Ready(Loaded { observations, view });
        self.view()
    }
}
