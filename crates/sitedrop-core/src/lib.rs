//! # sitedrop-core: Pure Pricing Logic for Sitedrop
//!
//! This crate prices marketplace listings for delivery to a construction
//! site. Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sitedrop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Storefront (listing cards, site picker)              │   │
//! │  │            or sitedrop-quote (command line)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Listing JSON + optional site           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sitedrop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    geo    │  │  pricing  │  │   money   │  │  format   │  │   │
//! │  │   │ haversine │  │ delivery  │  │  Money    │  │  locale   │  │   │
//! │  │   │ distance  │  │  + total  │  │ Currency  │  │  labels   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`geo`] - `GeoPoint` and haversine distance
//! - [`pricing`] - Delivery and total cost
//! - [`money`] - `Money` and `CurrencyCode` with integer minor units
//! - [`format`] - Locale-aware money labels, unsupported-currency fallback
//! - [`quote`] - Pricing plus display strings for a listing card
//! - [`types`] - Listing wire types
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, safe to call from any thread
//! 2. **Integer Money**: amounts are minor units (i64); floats are rounded once
//! 3. **Explicit Errors**: bad coordinates and rates are typed errors, never a
//!    silent zero
//!
//! ## Example Usage
//!
//! ```rust
//! use sitedrop_core::{compute_pricing, CurrencyCode, GeoPoint, ListingPricingInput, Money};
//!
//! let input = ListingPricingInput {
//!     base_price: Money::new(10000, CurrencyCode::USD),
//!     delivery_rate_per_km: 50.0,
//!     origin_location: GeoPoint::new(40.7128, -74.0060),
//!     destination: None,
//! };
//!
//! let result = compute_pricing(&input).unwrap();
//! assert_eq!(result.total_cost, input.base_price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod geo;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreResult, PricingError, ValidationError};
pub use format::{format_money, format_rate_per_km, price_data, Locale, PriceDisplay};
pub use geo::{distance_km, GeoPoint};
pub use money::{CurrencyCode, Money};
pub use pricing::{
    compute_pricing, compute_pricing_with, DeliveryPolicy, ListingPricingInput, PricingResult,
    RateUnit, ROUND_TRIP_FACTOR,
};
pub use quote::{DisplaySettings, ListingQuote};
pub use types::Listing;
