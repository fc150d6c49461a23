// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::models::{Currency, Observation};

/// Observations belonging to `currency`, in source order.
pub fn filter_by(observations: &[Observation], currency: Currency) -> Vec<Observation> {
    let indicator = currency.indicator();
    observations
        .iter()
        .filter(|observation| observation.indicator == indicator)
        .cloned()
        .collect()
}

/// Observations matching the indicator mapped from `symbol`.
///
/// An unrecognised symbol is not an error and simply yields an empty series.
pub fn filter_by_currency(observations: &[Observation], symbol: &str) -> Vec<Observation> {
    match Currency::from_symbol(symbol) {
        Some(currency) => filter_by(observations, currency),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Observation> {
        vec![
            Observation::new("Курс доллара", "Jan", 90.0),
            Observation::new("Курс евро", "Jan", 100.0),
            Observation::new("Курс доллара", "Feb", 92.0),
            Observation::new("Курс юаня", "Jan", 12.5),
            Observation::new("Курс доллара", "Mar", 88.0),
        ]
    }

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let filtered = filter_by_currency(&sample(), "$");
        let months: Vec<_> = filtered.iter().map(|o| o.month.as_str()).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar"]);
        assert!(filtered.iter().all(|o| o.indicator == "Курс доллара"));
    }

    #[test]
    fn test_filter_every_currency() {
        let data = sample();
        for currency in Currency::ALL {
            let filtered = filter_by_currency(&data, currency.symbol());
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|o| o.indicator == currency.indicator()));
            assert_eq!(filtered, filter_by(&data, currency));
        }
    }

    #[test]
    fn test_unknown_symbol_yields_empty() {
        assert!(filter_by_currency(&sample(), "£").is_empty());
        assert!(filter_by_currency(&sample(), "USD").is_empty());
        assert!(filter_by_currency(&sample(), "").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_currency(&[], "€").is_empty());
    }

    #[test]
    fn test_no_matches_for_known_symbol() {
        let data = vec![Observation::new("Курс евро", "Jan", 100.0)];
        assert!(filter_by(&data, Currency::Yuan).is_empty());
    }

    fn observation() -> impl Strategy<Value = Observation> {
        (
            prop::sample::select(vec!["Курс доллара", "Курс евро", "Курс юаня", "Курс фунта"]),
            "[a-z]{3}",
            -1.0e6..1.0e6f64,
        )
            .prop_map(|(indicator, month, value)| Observation::new(indicator, month, value))
    }

    proptest! {
        #[test]
        fn test_filter_is_ordered_subsequence(
            observations in prop::collection::vec(observation(), 0..40),
            symbol in prop::sample::select(vec!["$", "€", "¥"]),
        ) {
            let filtered = filter_by_currency(&observations, symbol);
            let indicator = Currency::from_symbol(symbol).unwrap().indicator();

            prop_assert!(filtered.iter().all(|o| o.indicator == indicator));
            prop_assert_eq!(
                filtered.len(),
                observations.iter().filter(|o| o.indicator == indicator).count()
            );

            // each filtered element appears in the source after the previous one
            let mut rest = observations.iter();
            for wanted in &filtered {
                prop_assert!(rest.any(|o| o == wanted));
            }
        }

        #[test]
        fn test_unrecognised_symbol_is_always_empty(
            observations in prop::collection::vec(observation(), 0..40),
            symbol in "[A-Za-z£]{0,3}",
        ) {
            prop_assert!(filter_by_currency(&observations, &symbol).is_empty());
        }
    }
}
