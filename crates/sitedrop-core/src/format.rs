//! # Format Module
//!
//! Locale-aware display strings for money and distances.
//!
//! ## Display Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Locale   Grouping   Decimal   Symbol          10629 USD / 123456 EUR   │
//! │  ──────   ────────   ───────   ─────────────   ──────────────────────   │
//! │  en-US    ,          .         prefix          $106.29 / €1,234.56     │
//! │  en-GB    ,          .         prefix          US$106.29 / €1,234.56   │
//! │  de-DE    .          ,         suffix + NBSP   106,29 $ / 1.234,56 €   │
//! │  fr-FR    NNBSP      ,         suffix + NBSP   106,29 $ / 1 234,56 €   │
//! │  fi-FI    NBSP       ,         suffix + NBSP   106,29 $ / 1 234,56 €   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currencies without a known symbol are shown by code (`CHF 12.00`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreResult, PricingError, ValidationError};
use crate::money::{CurrencyCode, Money};

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

// =============================================================================
// Locale
// =============================================================================

/// Display locales the storefront ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "fi-FI")]
    FiFi,
}

impl Locale {
    /// BCP 47 tag, e.g. `en-US`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::FiFi => "fi-FI",
        }
    }

    const fn group_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => ',',
            Locale::DeDe => '.',
            Locale::FrFr => NARROW_NBSP,
            Locale::FiFi => NBSP,
        }
    }

    const fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => '.',
            Locale::DeDe | Locale::FrFr | Locale::FiFi => ',',
        }
    }

    const fn symbol_first(&self) -> bool {
        matches!(self, Locale::EnUs | Locale::EnGb)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses `en-US`, `en_us`, `de` and friends. A bare language picks its
/// main region.
impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::DeDe),
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "fi" | "fi-fi" => Ok(Locale::FiFi),
            _ => Err(ValidationError::InvalidFormat {
                field: "locale".to_string(),
                reason: format!("unsupported locale '{}'", s.trim()),
            }),
        }
    }
}

// =============================================================================
// Money Formatting
// =============================================================================

fn currency_symbol(currency: CurrencyCode, locale: Locale) -> Option<&'static str> {
    match (currency.as_str(), locale) {
        ("USD", Locale::EnGb) => Some("US$"),
        ("USD", _) => Some("$"),
        ("EUR", _) => Some("€"),
        ("GBP", _) => Some("£"),
        ("JPY", _) => Some("¥"),
        _ => None,
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Places the currency symbol, or the code when there is none, around an
/// already grouped number.
fn with_currency(number: String, negative: bool, currency: CurrencyCode, locale: Locale) -> String {
    let sign = if negative { "-" } else { "" };
    match (currency_symbol(currency, locale), locale.symbol_first()) {
        (Some(symbol), true) => format!("{sign}{symbol}{number}"),
        (None, true) => format!("{sign}{currency}{NBSP}{number}"),
        (Some(symbol), false) => format!("{sign}{number}{NBSP}{symbol}"),
        (None, false) => format!("{sign}{number}{NBSP}{currency}"),
    }
}

/// Formats money for display.
///
/// The rules are a fixed table for the [`Locale`]s the storefront ships with.
/// A currency without a known symbol is shown by its ISO code instead
/// (`CHF 12.00`, `12,00 CHF`), so no currency is ever unprintable.
///
/// ## Example
/// ```rust
/// use sitedrop_core::format::{format_money, Locale};
/// use sitedrop_core::money::{CurrencyCode, Money};
///
/// let total = Money::new(123456, CurrencyCode::USD);
/// assert_eq!(format_money(&total, Locale::EnUs), "$1,234.56");
/// ```
pub fn format_money(money: &Money, locale: Locale) -> String {
    let currency = money.currency();
    let (major, minor) = money.major_minor();
    let exponent = currency.minor_unit_exponent() as usize;

    let mut number = group_digits(major, locale.group_separator());
    if exponent > 0 {
        number.push(locale.decimal_separator());
        number.push_str(&format!("{:0width$}", minor, width = exponent));
    }

    with_currency(number, money.is_negative(), currency, locale)
}

/// Digits a per-km rate may show beyond the currency's minor unit.
const RATE_EXTRA_DECIMALS: u32 = 4;

/// Formats a delivery rate given in minor units per km, e.g. `$0.50/km`.
///
/// Rates are not whole minor units, so a rate of 0.4 cents/km shows as
/// `$0.004/km` (up to [`RATE_EXTRA_DECIMALS`] extra digits). Returns `None`
/// for a negative or non-finite rate, or one too large to print.
///
/// ```rust
/// use sitedrop_core::format::{format_rate_per_km, Locale};
/// use sitedrop_core::money::CurrencyCode;
///
/// let rate = format_rate_per_km(50.0, CurrencyCode::USD, Locale::EnUs);
/// assert_eq!(rate.as_deref(), Some("$0.50/km"));
/// ```
pub fn format_rate_per_km(
    minor_per_km: f64,
    currency: CurrencyCode,
    locale: Locale,
) -> Option<String> {
    if !minor_per_km.is_finite() || minor_per_km < 0.0 {
        return None;
    }

    let mut extra = 0;
    let mut scaled = minor_per_km;
    while extra < RATE_EXTRA_DECIMALS && (scaled - scaled.round()).abs() > 1e-9 * scaled.max(1.0) {
        extra += 1;
        scaled *= 10.0;
    }

    let units = scaled.round();
    if units > i64::MAX as f64 {
        return None;
    }
    let units = units as u64;

    let decimals = currency.minor_unit_exponent() as u32 + extra;
    let divisor = 10u64.pow(decimals);

    let mut number = group_digits(units / divisor, locale.group_separator());
    if decimals > 0 {
        number.push(locale.decimal_separator());
        number.push_str(&format!(
            "{:0width$}",
            units % divisor,
            width = decimals as usize
        ));
    }

    Some(format!("{}/km", with_currency(number, false, currency, locale)))
}

/// Formats money that must be in the marketplace's display currency.
///
/// Fails with `UnsupportedCurrency` otherwise; callers that want a label
/// either way use [`price_data`].
pub fn format_in_display_currency(
    money: &Money,
    display_currency: CurrencyCode,
    locale: Locale,
) -> CoreResult<String> {
    if money.currency() != display_currency {
        return Err(PricingError::UnsupportedCurrency {
            found: money.currency(),
            expected: display_currency,
        });
    }
    Ok(format_money(money, locale))
}

/// Distance label with two decimals, e.g. `6.29 km`.
pub fn format_distance(km: f64) -> String {
    format!("{km:.2} km")
}

// =============================================================================
// Price Data
// =============================================================================

/// The price label of a listing card and its hover title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceDisplay {
    pub formatted_price: String,
    pub price_title: String,
    /// Set when the price is not in the display currency.
    #[ts(as = "Option<String>")]
    pub unsupported_currency: Option<CurrencyCode>,
}

/// Builds the price label, recovering from `UnsupportedCurrency`.
///
/// ## Flow
/// ```text
/// price.currency == display currency?
///      ├── yes → "$100.00"  (title: "$100.00")
///      └── no  → "(EUR)"    (title: "Unsupported currency (EUR)")
/// ```
pub fn price_display(
    price: &Money,
    display_currency: CurrencyCode,
    locale: Locale,
) -> PriceDisplay {
    match format_in_display_currency(price, display_currency, locale) {
        Ok(formatted) => PriceDisplay {
            formatted_price: formatted.clone(),
            price_title: formatted,
            unsupported_currency: None,
        },
        Err(_) => {
            let currency = price.currency();
            PriceDisplay {
                formatted_price: format!("({currency})"),
                price_title: format!("Unsupported currency ({currency})"),
                unsupported_currency: Some(currency),
            }
        }
    }
}

/// [`price_display`] for a listing whose price may be missing.
pub fn price_data(
    price: Option<&Money>,
    display_currency: CurrencyCode,
    locale: Locale,
) -> Option<PriceDisplay> {
    price.map(|p| price_display(p, display_currency, locale))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: i64) -> Money {
        Money::new(amount, CurrencyCode::USD)
    }

    #[test]
    fn test_format_usd_en_us() {
        assert_eq!(format_money(&usd(10629), Locale::EnUs), "$106.29");
        assert_eq!(format_money(&usd(123456789), Locale::EnUs), "$1,234,567.89");
        assert_eq!(format_money(&usd(5), Locale::EnUs), "$0.05");
        assert_eq!(format_money(&usd(0), Locale::EnUs), "$0.00");
        assert_eq!(format_money(&usd(-550), Locale::EnUs), "-$5.50");
    }

    #[test]
    fn test_format_eur_european_locales() {
        let eur = Money::new(123456, CurrencyCode::EUR);
        assert_eq!(format_money(&eur, Locale::DeDe), "1.234,56\u{a0}€");
        assert_eq!(format_money(&eur, Locale::FrFr), "1\u{202f}234,56\u{a0}€");
        assert_eq!(format_money(&eur, Locale::FiFi), "1\u{a0}234,56\u{a0}€");
        assert_eq!(format_money(&eur, Locale::EnUs), "€1,234.56");
    }

    #[test]
    fn test_format_minor_unit_exponents() {
        let yen = Money::new(5000, CurrencyCode::JPY);
        assert_eq!(format_money(&yen, Locale::EnUs), "¥5,000");

        let dinar = Money::new(1234, CurrencyCode::parse("BHD").unwrap());
        assert_eq!(format_money(&dinar, Locale::EnUs), "BHD\u{a0}1.234");
        assert_eq!(format_money(&dinar, Locale::DeDe), "1,234\u{a0}BHD");

        let franc = Money::new(1200, CurrencyCode::parse("CHF").unwrap());
        assert_eq!(format_money(&franc, Locale::EnUs), "CHF\u{a0}12.00");
        assert_eq!(format_money(&franc, Locale::FrFr), "12,00\u{a0}CHF");
    }

    #[test]
    fn test_format_usd_en_gb() {
        assert_eq!(format_money(&usd(10000), Locale::EnGb), "US$100.00");
    }

    #[test]
    fn test_format_rate_per_km() {
        let usd = CurrencyCode::USD;
        assert_eq!(format_rate_per_km(50.0, usd, Locale::EnUs).as_deref(), Some("$0.50/km"));
        assert_eq!(format_rate_per_km(0.4, usd, Locale::EnUs).as_deref(), Some("$0.004/km"));
        assert_eq!(format_rate_per_km(12.5, usd, Locale::EnUs).as_deref(), Some("$0.125/km"));
        assert_eq!(
            format_rate_per_km(150000.0, CurrencyCode::EUR, Locale::DeDe).as_deref(),
            Some("1.500,00\u{a0}€/km")
        );
        assert_eq!(
            format_rate_per_km(2.5, CurrencyCode::JPY, Locale::EnUs).as_deref(),
            Some("¥2.5/km")
        );
    }

    #[test]
    fn test_format_rate_per_km_unprintable() {
        let usd = CurrencyCode::USD;
        assert_eq!(format_rate_per_km(1e300, usd, Locale::EnUs), None);
        assert_eq!(format_rate_per_km(f64::INFINITY, usd, Locale::EnUs), None);
        assert_eq!(format_rate_per_km(f64::NAN, usd, Locale::EnUs), None);
        assert_eq!(format_rate_per_km(-1.0, usd, Locale::EnUs), None);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(6.286267), "6.29 km");
        assert_eq!(format_distance(0.0), "0.00 km");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("fi".parse::<Locale>().unwrap(), Locale::FiFi);
        assert!("xx-YY".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_currency_mismatch() {
        let eur = Money::new(10000, CurrencyCode::EUR);
        let err = format_in_display_currency(&eur, CurrencyCode::USD, Locale::EnUs).unwrap_err();
        assert_eq!(
            err,
            PricingError::UnsupportedCurrency {
                found: CurrencyCode::EUR,
                expected: CurrencyCode::USD,
            }
        );
    }

    #[test]
    fn test_price_data_supported() {
        let data = price_data(Some(&usd(10000)), CurrencyCode::USD, Locale::EnUs).unwrap();
        assert_eq!(data.formatted_price, "$100.00");
        assert_eq!(data.price_title, "$100.00");
        assert_eq!(data.unsupported_currency, None);
    }

    #[test]
    fn test_price_data_unsupported_falls_back() {
        let eur = Money::new(10000, CurrencyCode::EUR);
        let data = price_data(Some(&eur), CurrencyCode::USD, Locale::EnUs).unwrap();
        assert_eq!(data.formatted_price, "(EUR)");
        assert_eq!(data.price_title, "Unsupported currency (EUR)");
        assert_eq!(data.unsupported_currency, Some(CurrencyCode::EUR));
    }

    #[test]
    fn test_price_data_without_price() {
        assert!(price_data(None, CurrencyCode::USD, Locale::EnUs).is_none());
    }
}
