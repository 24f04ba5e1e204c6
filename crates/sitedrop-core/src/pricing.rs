//! # Pricing Module
//!
//! Turns a listing's base price, delivery rate and location into a delivery
//! cost and a total cost.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ListingPricingInput                                                    │
//! │    base_price ─────────────────────────────────────────┐                │
//! │    delivery_rate_per_km ──┐                            │                │
//! │    origin_location ───┐   │                            │                │
//! │    destination ───────┤   │                            │                │
//! │                       ▼   │                            │                │
//! │               distance_km │                            │                │
//! │                       │   ▼                            ▼                │
//! │                       └─► rate × km × 2 (round trip) ─► + ─► total_cost │
//! │                                   │                                     │
//! │                                   └──────────────────────► delivery_cost│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use sitedrop_core::geo::GeoPoint;
//! use sitedrop_core::money::{CurrencyCode, Money};
//! use sitedrop_core::pricing::{compute_pricing, ListingPricingInput};
//!
//! let input = ListingPricingInput {
//!     base_price: Money::new(10000, CurrencyCode::USD),
//!     delivery_rate_per_km: 50.0,
//!     origin_location: GeoPoint::new(40.7128, -74.0060),
//!     destination: Some(GeoPoint::new(40.7306, -73.9352)),
//! };
//!
//! let result = compute_pricing(&input).unwrap();
//! assert_eq!(result.delivery_cost.amount(), 629); // 50 × 6.29 km × 2
//! assert_eq!(result.total_cost.amount(), 10629);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, PricingError};
use crate::geo::{distance_km, GeoPoint};
use crate::money::{CurrencyCode, Money};
use crate::validation::{validate_price_amount, validate_rate, validate_round_trip_factor};

/// Delivery is charged for the trip out and the trip back.
pub const ROUND_TRIP_FACTOR: f64 = 2.0;

// =============================================================================
// Delivery Policy
// =============================================================================

/// Unit in which a listing's `deliveryPricePerKm` is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// Minor units per km (cents/km). The marketplace stores rates this way.
    #[default]
    MinorPerKm,
    /// Major units per km (dollars/km), scaled by the currency's minor unit.
    MajorPerKm,
}

/// Tunable delivery pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    /// Multiplier applied to the one-way distance.
    pub round_trip_factor: f64,
    /// Unit of the per-km rate.
    pub rate_unit: RateUnit,
}

impl DeliveryPolicy {
    /// Creates a validated policy.
    pub fn new(round_trip_factor: f64, rate_unit: RateUnit) -> CoreResult<Self> {
        validate_round_trip_factor(round_trip_factor)?;
        Ok(DeliveryPolicy {
            round_trip_factor,
            rate_unit,
        })
    }

    /// Converts a per-km rate to minor units of `currency` per km.
    ///
    /// ```rust
    /// use sitedrop_core::money::CurrencyCode;
    /// use sitedrop_core::pricing::{DeliveryPolicy, RateUnit};
    ///
    /// let policy = DeliveryPolicy::new(2.0, RateUnit::MajorPerKm).unwrap();
    /// assert_eq!(policy.minor_units_per_km(0.5, CurrencyCode::USD), 50.0);
    /// ```
    pub fn minor_units_per_km(&self, rate: f64, currency: CurrencyCode) -> f64 {
        match self.rate_unit {
            RateUnit::MinorPerKm => rate,
            RateUnit::MajorPerKm => rate * currency.minor_unit_scale() as f64,
        }
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        DeliveryPolicy {
            round_trip_factor: ROUND_TRIP_FACTOR,
            rate_unit: RateUnit::MinorPerKm,
        }
    }
}

// =============================================================================
// Input / Result
// =============================================================================

/// Everything the engine needs to price one listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingPricingInput {
    pub base_price: Money,
    /// Delivery rate per km, in the unit given by the [`DeliveryPolicy`].
    pub delivery_rate_per_km: f64,
    /// Where the listing is.
    pub origin_location: GeoPoint,
    /// Construction site, if the shopper picked one.
    pub destination: Option<GeoPoint>,
}

/// Outcome of [`compute_pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// One-way distance; 0 without a destination.
    pub distance_km: f64,
    pub delivery_cost: Money,
    pub total_cost: Money,
    pub has_destination: bool,
}

// =============================================================================
// Engine
// =============================================================================

/// Prices a listing with the default [`DeliveryPolicy`].
pub fn compute_pricing(input: &ListingPricingInput) -> CoreResult<PricingResult> {
    compute_pricing_with(input, &DeliveryPolicy::default())
}

/// Prices a listing.
///
/// ## Rules
/// - `delivery = round(rate × distance × round_trip_factor)` in minor units
/// - `total = base_price + delivery`, both in the base price's currency
/// - Rate 0 or no destination → delivery 0, total == base price
/// - Negative rate → `InvalidRate`; non-finite coordinate → `InvalidCoordinate`
/// - The policy is re-checked: it may have been deserialized, not built by
///   [`DeliveryPolicy::new`]
/// - Currency is never checked against any display currency here
pub fn compute_pricing_with(
    input: &ListingPricingInput,
    policy: &DeliveryPolicy,
) -> CoreResult<PricingResult> {
    validate_rate(input.delivery_rate_per_km)?;
    validate_round_trip_factor(policy.round_trip_factor)?;
    validate_price_amount(input.base_price.amount())?;

    let distance_km = distance_km(input.origin_location, input.destination)?;
    let currency = input.base_price.currency();

    let delivery_minor = policy.minor_units_per_km(input.delivery_rate_per_km, currency)
        * distance_km
        * policy.round_trip_factor;
    let delivery_cost = Money::from_minor_units_f64(delivery_minor, currency)?;

    let total_cost = input
        .base_price
        .checked_add(delivery_cost)
        .ok_or(PricingError::AmountOverflow)?;

    Ok(PricingResult {
        distance_km,
        delivery_cost,
        total_cost,
        has_destination: input.destination.is_some(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
