//! # Error Types
//!
//! Domain-specific error types for sitedrop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sitedrop-core errors (this file)                                      │
//! │  ├── PricingError     - Distance / pricing failures and signals        │
//! │  └── ValidationError  - Malformed input values                         │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  └── ConfigError      - Bad configuration                              │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → anyhow (CLI) → stderr          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! `InvalidCoordinate` and `InvalidRate` go straight back to the caller and
//! never degrade into a zero price. `UnsupportedCurrency` is a signal: the
//! formatting layer turns it into a fallback label (see
//! [`crate::format::price_data`]).

use thiserror::Error;

use crate::money::CurrencyCode;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised while computing or presenting a listing's pricing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A latitude or longitude is NaN or infinite.
    ///
    /// `field` names the offending coordinate, e.g. `origin.lat`.
    #[error("Invalid coordinate {field}: {value} is not a finite number")]
    InvalidCoordinate { field: String, value: f64 },

    /// Delivery rate is negative (or not a finite number).
    #[error("Invalid delivery rate: {rate} per km")]
    InvalidRate { rate: f64 },

    /// Price currency differs from the marketplace display currency.
    ///
    /// ## When This Occurs
    /// ```text
    /// Listing price: 120.00 EUR
    /// Display currency: USD
    ///      │
    ///      ▼
    /// UnsupportedCurrency { found: EUR, expected: USD }
    ///      │
    ///      ▼
    /// Card shows: "(EUR)"  title: "Unsupported currency (EUR)"
    /// ```
    #[error("Unsupported currency {found} (display currency is {expected})")]
    UnsupportedCurrency {
        found: CurrencyCode,
        expected: CurrencyCode,
    },

    /// The listing carries no price at all.
    #[error("Listing {listing_id} has no price")]
    MissingPrice { listing_id: String },

    /// A computed amount does not fit in minor units.
    #[error("Amount overflow while computing pricing")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet format or range requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., currency code, locale tag).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type CoreResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
