//! Output rendering.

use sitedrop_core::ListingQuote;

/// Text lines as a listing card shows them.
///
/// ```text
/// Excavator bucket 60cm
/// Price: $100.00
/// Delivery Cost: $6.29 (6.29 km)
/// Total Cost: $106.29
/// Delivery: $0.50/km
/// ```
pub fn render_text(title: &str, quote: &ListingQuote) -> String {
    let mut lines = Vec::with_capacity(5);

    if !title.trim().is_empty() {
        lines.push(title.trim().to_string());
    }
    lines.push(format!("Price: {}", quote.price.formatted_price));
    lines.push(format!(
        "Delivery Cost: {} ({})",
        quote.delivery_cost, quote.distance
    ));
    lines.push(format!("Total Cost: {}", quote.total_cost));
    if let Some(rate) = &quote.rate_per_km {
        lines.push(format!("Delivery: {rate}"));
    }

    lines.join("\n")
}

pub fn render_json(quote: &ListingQuote) -> serde_json::Result<String> {
    serde_json::to_string_pretty(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedrop_core::{DisplaySettings, GeoPoint, Listing};

    const FIXTURE: &str = include_str!("../fixtures/listing.json");

    fn quote(site: Option<GeoPoint>) -> (Listing, ListingQuote) {
        let listing: Listing = serde_json::from_str(FIXTURE).unwrap();
        let quote = ListingQuote::build(&listing, site, &DisplaySettings::default()).unwrap();
        (listing, quote)
    }

    #[test]
    fn test_render_text_with_site() {
        let (listing, quote) = quote(Some(GeoPoint::new(40.7306, -73.9352)));

        assert_eq!(
            render_text(&listing.attributes.title, &quote),
            "Excavator bucket 60cm\n\
             Price: $100.00\n\
             Delivery Cost: $6.29 (6.29 km)\n\
             Total Cost: $106.29\n\
             Delivery: $0.50/km"
        );
    }

    #[test]
    fn test_render_text_without_title() {
        let (_, quote) = quote(None);
        let text = render_text("  ", &quote);

        assert!(text.starts_with("Price: $100.00"));
        assert!(text.contains("Delivery Cost: $0.00 (0.00 km)"));
    }

    #[test]
    fn test_render_json() {
        let (_, quote) = quote(None);
        let json = render_json(&quote).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["price"]["formattedPrice"], "$100.00");
        assert_eq!(value["ratePerKm"], "$0.50/km");
    }
}
