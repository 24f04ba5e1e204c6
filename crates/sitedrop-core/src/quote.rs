//! # Listing Quote
//!
//! Everything a listing card shows about money, ready to render.
//!
//! ## User Workflow
//! ```text
//! Shopper picks construction site (40.7306, -73.9352)
//!      │
//!      ▼
//! ListingQuote::build(listing, Some(site), settings) ← THIS MODULE
//!      │
//!      ▼
//! ┌──────────────────────────────────────┐
//! │  $100.00                             │  price
//! │  Delivery Cost: $6.29 (6.29 km)      │  delivery_cost + distance
//! │  Total Cost: $106.29                 │  total_cost
//! │  Delivery: $0.50/km                  │  rate_per_km (only if rate > 0)
//! └──────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::format::{
    format_distance, format_money, format_rate_per_km, price_display, Locale, PriceDisplay,
};
use crate::geo::GeoPoint;
use crate::money::CurrencyCode;
use crate::pricing::{compute_pricing_with, DeliveryPolicy, PricingResult};
use crate::types::Listing;

/// Marketplace-wide display settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Currency the marketplace sells in.
    #[ts(as = "String")]
    pub display_currency: CurrencyCode,
    pub locale: Locale,
    pub policy: DeliveryPolicy,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            display_currency: CurrencyCode::USD,
            locale: Locale::EnUs,
            policy: DeliveryPolicy::default(),
        }
    }
}

/// Pricing plus its display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuote {
    pub pricing: PricingResult,
    pub price: PriceDisplay,
    pub delivery_cost: String,
    pub distance: String,
    pub total_cost: String,
    /// `"$0.50/km"`; absent when delivery is free.
    pub rate_per_km: Option<String>,
}

impl ListingQuote {
    /// Prices `listing` for delivery to `destination` and formats the result.
    ///
    /// Delivery and total are formatted in the listing's own currency; only
    /// the headline price goes through the display-currency check.
    pub fn build(
        listing: &Listing,
        destination: Option<GeoPoint>,
        settings: &DisplaySettings,
    ) -> CoreResult<Self> {
        let input = listing.pricing_input(destination)?;
        let pricing = compute_pricing_with(&input, &settings.policy)?;
        let locale = settings.locale;

        // Display only: a rate too large to print drops the line
        let rate_per_km = if input.delivery_rate_per_km > 0.0 {
            let currency = input.base_price.currency();
            let per_km = settings
                .policy
                .minor_units_per_km(input.delivery_rate_per_km, currency);
            format_rate_per_km(per_km, currency, locale)
        } else {
            None
        };

        Ok(ListingQuote {
            price: price_display(&input.base_price, settings.display_currency, locale),
            delivery_cost: format_money(&pricing.delivery_cost, locale),
            distance: format_distance(pricing.distance_km),
            total_cost: format_money(&pricing.total_cost, locale),
            rate_per_km,
            pricing,
        })
    }
}
