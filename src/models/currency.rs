// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::fmt;

/// Currencies that can be selected for display. Rates are always quoted in roubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Dollar,
    Euro,
    Yuan,
}

/// Symbol, ISO code and source indicator label for every selectable currency.
const CURRENCY_TABLE: [(Currency, &str, &str, &str); 3] = [
    (Currency::Dollar, "$", "USD", "Курс доллара"),
    (Currency::Euro, "€", "EUR", "Курс евро"),
    (Currency::Yuan, "¥", "CNY", "Курс юаня"),
];

impl Currency {
    /// Selection order; the first entry is the initial selection.
    pub const ALL: [Currency; 3] = [Currency::Dollar, Currency::Euro, Currency::Yuan];

    fn entry(self) -> &'static (Currency, &'static str, &'static str, &'static str) {
        &CURRENCY_TABLE[self.index()]
    }

    pub fn symbol(self) -> &'static str {
        self.entry().1
    }

    pub fn code(self) -> &'static str {
        self.entry().2
    }

    /// The `indicator` label used by the data source for this currency.
    pub fn indicator(self) -> &'static str {
        self.entry().3
    }

    /// Looks up a currency by its display symbol. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Currency> {
        CURRENCY_TABLE
            .iter()
            .find(|(_, s, _, _)| *s == symbol)
            .map(|(currency, _, _, _)| *currency)
    }

    /// Looks up a currency by ISO code, ignoring case.
    pub fn from_code(code: &str) -> Option<Currency> {
        CURRENCY_TABLE
            .iter()
            .find(|(_, _, c, _)| c.eq_ignore_ascii_case(code))
            .map(|(currency, _, _, _)| *currency)
    }

    /// Turns user input into a selection symbol: ISO codes are translated to
    /// their symbol, anything else is passed through untouched.
    pub fn normalize_symbol(input: &str) -> String {
        match Currency::from_code(input) {
            Some(currency) => currency.symbol().to_string(),
            None => input.to_string(),
        }
    }

    /// Position in [`Currency::ALL`].
    pub fn index(self) -> usize {
        match self {
            Currency::Dollar => 0,
            Currency::Euro => 1,
            Currency::Yuan => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
