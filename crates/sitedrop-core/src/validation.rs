//! # Validation Module
//!
//! Input validation for pricing inputs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (storefront / CLI)                                    │
//! │  ├── Coordinate RANGE checks (validate_geo_range)                      │
//! │  └── Config values (currency, locale, round-trip factor)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine (always on)                                   │
//! │  ├── Coordinates must be finite      → InvalidCoordinate               │
//! │  ├── Rate must be >= 0 and finite    → InvalidRate                     │
//! │  └── Base price must be >= 0         → Validation                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine deliberately does not reject out-of-range latitudes or
//! longitudes; the haversine result for them is defined, just meaningless.
//!
//! ## Usage
//! ```rust
//! use sitedrop_core::geo::GeoPoint;
//! use sitedrop_core::validation::{validate_point, validate_rate};
//!
//! assert!(validate_point("origin", GeoPoint::new(40.7, -74.0)).is_ok());
//! assert!(validate_rate(-1.0).is_err());
//! ```

use crate::error::{CoreResult, PricingError, ValidationError};
use crate::geo::GeoPoint;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Engine Validators
// =============================================================================

/// Checks that both coordinates of `point` are finite numbers.
///
/// `label` prefixes the field in the error (`origin` → `origin.lat`).
pub fn validate_point(label: &str, point: GeoPoint) -> CoreResult<()> {
    for (axis, value) in [("lat", point.lat), ("lng", point.lng)] {
        if !value.is_finite() {
            return Err(PricingError::InvalidCoordinate {
                field: format!("{label}.{axis}"),
                value,
            });
        }
    }
    Ok(())
}

/// Validates a per-kilometer delivery rate.
///
/// ## Rules
/// - Zero is allowed (free delivery)
/// - Negative, NaN and infinite rates are rejected
///
/// ## Example
/// ```rust
/// use sitedrop_core::validation::validate_rate;
///
/// assert!(validate_rate(0.0).is_ok());
/// assert!(validate_rate(50.0).is_ok());
/// assert!(validate_rate(-0.01).is_err());
/// assert!(validate_rate(f64::NAN).is_err());
/// ```
pub fn validate_rate(rate: f64) -> CoreResult<()> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(PricingError::InvalidRate { rate });
    }
    Ok(())
}

/// Validates a listing price in minor units. Zero is allowed.
pub fn validate_price_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Caller-Side Validators
// =============================================================================

/// Validates that a point lies within latitude [-90, 90] and
/// longitude [-180, 180].
///
/// The engine never calls this; it is offered to callers that accept
/// coordinates from users.
pub fn validate_geo_range(point: GeoPoint) -> ValidationResult<()> {
    if !(-90.0..=90.0).contains(&point.lat) {
        return Err(ValidationError::OutOfRange {
            field: "lat".to_string(),
            min: -90.0,
            max: 90.0,
        });
    }
    if !(-180.0..=180.0).contains(&point.lng) {
        return Err(ValidationError::OutOfRange {
            field: "lng".to_string(),
            min: -180.0,
            max: 180.0,
        });
    }
    Ok(())
}

/// Validates an ISO 4217 code: exactly three ASCII uppercase letters.
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter ISO 4217 code".to_string(),
        });
    }

    Ok(())
}

/// Validates the round-trip multiplier of a delivery policy.
pub fn validate_round_trip_factor(factor: f64) -> ValidationResult<()> {
    if !factor.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "round_trip_factor".to_string(),
        });
    }
    if factor < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "round_trip_factor".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
