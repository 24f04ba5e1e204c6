//! # Listing Types
//!
//! The slice of a marketplace listing that pricing reads, in the JSON shape
//! the marketplace API returns it.
//!
//! ```text
//! {
//!   "id": { "uuid": "…" },
//!   "attributes": {
//!     "title": "Excavator bucket",
//!     "price": { "amount": 10000, "currency": "USD" },
//!     "geolocation": { "lat": 40.7128, "lng": -74.006 },
//!     "publicData": { "deliveryPricePerKm": 50 }
//!   }
//! }
//! ```
//!
//! Unknown fields (images, author, description, …) are ignored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, PricingError};
use crate::geo::GeoPoint;
use crate::money::Money;
use crate::pricing::ListingPricingInput;

/// Listing identifier wrapper, `{ "uuid": "…" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListingId {
    #[ts(as = "String")]
    pub uuid: Uuid,
}

/// Seller-editable extended data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PublicData {
    /// Delivery rate in minor units per km. Missing means free delivery.
    #[serde(default)]
    pub delivery_price_per_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingAttributes {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub geolocation: Option<GeoPoint>,
    #[serde(default)]
    pub public_data: PublicData,
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Listing {
    pub id: ListingId,
    pub attributes: ListingAttributes,
}

impl Listing {
    /// Delivery rate, 0 when the seller set none.
    pub fn delivery_rate_per_km(&self) -> f64 {
        self.attributes
            .public_data
            .delivery_price_per_km
            .unwrap_or(0.0)
    }

    /// Listing location, `(0, 0)` when the listing has none.
    pub fn origin(&self) -> GeoPoint {
        self.attributes.geolocation.unwrap_or_default()
    }

    /// Assembles the engine input for this listing.
    ///
    /// Fails with `MissingPrice` when the listing has no price.
    pub fn pricing_input(&self, destination: Option<GeoPoint>) -> CoreResult<ListingPricingInput> {
        let base_price = self
            .attributes
            .price
            .ok_or_else(|| PricingError::MissingPrice {
                listing_id: self.id.uuid.to_string(),
            })?;

        Ok(ListingPricingInput {
            base_price,
            delivery_rate_per_km: self.delivery_rate_per_km(),
            origin_location: self.origin(),
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::CurrencyCode;

    const LISTING_JSON: &str = r#"{
        "id": { "uuid": "5f3c1b2a-9d4e-4c7a-8b1f-2e6d9a0c4b71" },
        "type": "listing",
        "attributes": {
            "title": "Excavator bucket",
            "description": "Lightly used",
            "price": { "amount": 10000, "currency": "USD" },
            "geolocation": { "lat": 40.7128, "lng": -74.006 },
            "publicData": { "deliveryPricePerKm": 50, "listingType": "sell" }
        },
        "images": []
    }"#;

    #[test]
    fn test_parse_marketplace_listing() {
        let listing: Listing = serde_json::from_str(LISTING_JSON).unwrap();

        assert_eq!(listing.attributes.title, "Excavator bucket");
        assert_eq!(
            listing.attributes.price,
            Some(Money::new(10000, CurrencyCode::USD))
        );
        assert_eq!(listing.delivery_rate_per_km(), 50.0);
        assert_eq!(listing.origin(), GeoPoint::new(40.7128, -74.006));
    }

    #[test]
    fn test_pricing_input_defaults() {
        let json = r#"{
            "id": { "uuid": "5f3c1b2a-9d4e-4c7a-8b1f-2e6d9a0c4b71" },
            "attributes": { "price": { "amount": 2500, "currency": "EUR" } }
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        let input = listing.pricing_input(None).unwrap();
        assert_eq!(input.delivery_rate_per_km, 0.0);
        assert_eq!(input.origin_location, GeoPoint::new(0.0, 0.0));
        assert_eq!(input.base_price.currency(), CurrencyCode::EUR);
    }

    #[test]
    fn test_pricing_input_requires_price() {
        let json = r#"{
            "id": { "uuid": "5f3c1b2a-9d4e-4c7a-8b1f-2e6d9a0c4b71" },
            "attributes": { "title": "Free pallet" }
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        let err = listing.pricing_input(None).unwrap_err();
        assert_eq!(
            err,
            PricingError::MissingPrice {
                listing_id: "5f3c1b2a-9d4e-4c7a-8b1f-2e6d9a0c4b71".to_string()
            }
        );
    }
}
