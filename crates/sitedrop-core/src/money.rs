//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + explicit currency                  │
//! │    10000 USD-cents + 629 USD-cents = 10629 USD-cents                   │
//! │    Floats only appear in distance math, and are rounded ONCE           │
//! │    when turned into a delivery cost.                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sitedrop_core::money::{CurrencyCode, Money};
//!
//! let price = Money::new(10000, CurrencyCode::USD); // $100.00
//! let delivery = Money::new(629, CurrencyCode::USD);
//!
//! let total = price.checked_add(delivery).unwrap();
//! assert_eq!(total.amount(), 10629);
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, PricingError, ValidationError};
use crate::validation::validate_currency_code;

// =============================================================================
// Currency Code
// =============================================================================

/// An ISO 4217 currency code such as `USD` or `EUR`.
///
/// Stored inline as three ASCII uppercase bytes, so it is `Copy` and
/// `Money` stays a plain value type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub const USD: CurrencyCode = CurrencyCode(*b"USD");
    pub const EUR: CurrencyCode = CurrencyCode(*b"EUR");
    pub const GBP: CurrencyCode = CurrencyCode(*b"GBP");
    pub const JPY: CurrencyCode = CurrencyCode(*b"JPY");

    /// Parses a currency code. Input is trimmed and uppercased.
    ///
    /// ## Example
    /// ```rust
    /// use sitedrop_core::money::CurrencyCode;
    ///
    /// assert_eq!(CurrencyCode::parse("eur").unwrap(), CurrencyCode::EUR);
    /// assert!(CurrencyCode::parse("EURO").is_err());
    /// ```
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim().to_ascii_uppercase();
        validate_currency_code(&code)?;

        let bytes = code.as_bytes();
        Ok(CurrencyCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Constructed only from validated ASCII
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Number of decimal digits in the currency's minor unit (ISO 4217).
    ///
    /// ## Examples
    /// - `USD`, `EUR`: 2 (cents)
    /// - `JPY`, `KRW`: 0 (no minor unit)
    /// - `BHD`, `KWD`: 3 (fils)
    pub fn minor_unit_exponent(&self) -> u32 {
        match &self.0 {
            b"BIF" | b"CLP" | b"DJF" | b"GNF" | b"ISK" | b"JPY" | b"KMF" | b"KRW" | b"PYG"
            | b"RWF" | b"UGX" | b"UYI" | b"VND" | b"VUV" | b"XAF" | b"XOF" | b"XPF" => 0,
            b"BHD" | b"IQD" | b"JOD" | b"KWD" | b"LYD" | b"OMR" | b"TND" => 3,
            _ => 2,
        }
    }

    /// Minor units per major unit: `10^minor_unit_exponent()`.
    pub fn minor_unit_scale(&self) -> i64 {
        10_i64.pow(self.minor_unit_exponent())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::parse(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CurrencyCode::parse(&raw).map_err(de::Error::custom)
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit, tagged with its currency.
///
/// Mirrors the marketplace API's price object: `{ "amount": 10000,
/// "currency": "USD" }`.
///
/// ## Where Money Is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  listing.price ──┬──► PricingResult.total_cost ──► "Total Cost: $106.29"│
/// │                  │                                                      │
/// │  rate × km × 2 ──┴──► PricingResult.delivery_cost ──► "$6.29 (6.29 km)" │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money {
    /// Amount in minor units (cents for USD).
    amount: i64,

    /// ISO 4217 currency code.
    #[ts(as = "String")]
    currency: CurrencyCode,
}

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use sitedrop_core::money::{CurrencyCode, Money};
    ///
    /// let price = Money::new(1099, CurrencyCode::USD); // $10.99
    /// assert_eq!(price.amount(), 1099);
    /// ```
    #[inline]
    pub const fn new(amount: i64, currency: CurrencyCode) -> Self {
        Money { amount, currency }
    }

    /// Zero in the given currency.
    #[inline]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Money::new(0, currency)
    }

    /// Converts a fractional minor-unit amount, rounding half away from zero.
    ///
    /// Fails with `AmountOverflow` when the value is not finite or does not
    /// fit in an `i64`.
    pub fn from_minor_units_f64(minor: f64, currency: CurrencyCode) -> CoreResult<Self> {
        let rounded = minor.round();
        if !rounded.is_finite() || rounded >= i64::MAX as f64 || rounded <= i64::MIN as f64 {
            return Err(PricingError::AmountOverflow);
        }
        Ok(Money::new(rounded as i64, currency))
    }

    /// Returns the amount in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds two amounts of the same currency.
    ///
    /// Returns `None` if the currencies differ or the sum overflows.
    ///
    /// ## Example
    /// ```rust
    /// use sitedrop_core::money::{CurrencyCode, Money};
    ///
    /// let usd = Money::new(100, CurrencyCode::USD);
    /// let eur = Money::new(100, CurrencyCode::EUR);
    /// assert!(usd.checked_add(eur).is_none());
    /// ```
    pub fn checked_add(self, other: Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Splits the absolute amount into major and minor parts.
    ///
    /// ```rust
    /// use sitedrop_core::money::{CurrencyCode, Money};
    ///
    /// let price = Money::new(-1099, CurrencyCode::USD);
    /// assert_eq!(price.major_minor(), (10, 99));
    /// ```
    pub fn major_minor(&self) -> (u64, u64) {
        let scale = self.currency.minor_unit_scale().unsigned_abs();
        let abs = self.amount.unsigned_abs();
        (abs / scale, abs % scale)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `10.99 USD`.
///
/// ## Note
/// This is for logs and debugging. Use [`crate::format::format_money`] for
/// anything a shopper sees.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let (major, minor) = self.major_minor();
        let exponent = self.currency.minor_unit_exponent() as usize;
        if exponent == 0 {
            write!(f, "{}{} {}", sign, major, self.currency)
        } else {
            write!(
                f,
                "{}{}.{:0width$} {}",
                sign,
                major,
                minor,
                self.currency,
                width = exponent
            )
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
