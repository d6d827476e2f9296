//! Prices as integer minor units plus a currency.
//!
//! Decimal amounts only appear at the edges: when reading stored carts and
//! CLI input, and when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a cart can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

/// Code, symbol and minor-unit digits per currency.
static CURRENCY_TABLE: [(Currency, &str, &str, u32); 6] = [
    (Currency::USD, "USD", "$", 2),
    (Currency::EUR, "EUR", "\u{20ac}", 2),
    (Currency::GBP, "GBP", "\u{00a3}", 2),
    (Currency::JPY, "JPY", "\u{00a5}", 0),
    (Currency::CAD, "CAD", "CA$", 2),
    (Currency::AUD, "AUD", "A$", 2),
];

impl Currency {
    fn entry(&self) -> &'static (Currency, &'static str, &'static str, u32) {
        // The table lists every variant in declaration order.
        &CURRENCY_TABLE[*self as usize]
    }

    /// ISO 4217 code, as written in stored carts and config files.
    pub fn code(&self) -> &'static str {
        self.entry().1
    }

    /// Symbol used when displaying prices.
    pub fn symbol(&self) -> &'static str {
        self.entry().2
    }

    /// Digits after the decimal point; the stored integer counts units of
    /// `10^-decimal_places`.
    pub fn decimal_places(&self) -> u32 {
        self.entry().3
    }

    /// Look up a currency by code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        CURRENCY_TABLE
            .iter()
            .find(|(_, c, _, _)| c.eq_ignore_ascii_case(code))
            .map(|(currency, _, _, _)| *currency)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add another amount of the same currency, clamping at the `i64` bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        debug_assert_eq!(self.currency, other.currency);
        Money::new(self.amount_cents.saturating_add(other.amount_cents), self.currency)
    }

    /// Multiply by a quantity, clamping at the `i64` bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
