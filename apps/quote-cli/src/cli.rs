//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use sitedrop_core::validation::{validate_geo_range, validate_point};
use sitedrop_core::{CoreResult, GeoPoint};

#[derive(Debug, Clone, Parser)]
#[command(name = "sitedrop-quote")]
#[command(about = "Price a marketplace listing for delivery to a construction site")]
pub struct Args {
    /// Listing JSON file, or `-` for stdin
    #[arg(long, short = 'l')]
    pub listing: PathBuf,

    /// Construction site latitude
    #[arg(long, requires = "site_lng", allow_negative_numbers = true)]
    pub site_lat: Option<f64>,

    /// Construction site longitude
    #[arg(long, requires = "site_lat", allow_negative_numbers = true)]
    pub site_lng: Option<f64>,

    /// Display locale, e.g. en-US or de-DE
    #[arg(long)]
    pub locale: Option<String>,

    /// Marketplace display currency, e.g. USD
    #[arg(long)]
    pub display_currency: Option<String>,

    /// Config file (default: ./sitedrop.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,

    /// Log at debug level
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// The construction site, when both coordinates were given.
    pub fn site(&self) -> Option<GeoPoint> {
        match (self.site_lat, self.site_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// [`Args::site`], rejected when a coordinate is not a number or lies
    /// outside the globe. Non-numbers are reported as invalid coordinates.
    pub fn checked_site(&self) -> CoreResult<Option<GeoPoint>> {
        let Some(site) = self.site() else {
            return Ok(None);
        };
        validate_point("destination", site)?;
        validate_geo_range(site)?;
        Ok(Some(site))
    }

    /// `true` when the listing comes from stdin.
    pub fn listing_from_stdin(&self) -> bool {
        self.listing.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use sitedrop_core::{PricingError, ValidationError};

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_site_with_negative_longitude() {
        let args = Args::try_parse_from([
            "sitedrop-quote",
            "--listing",
            "listing.json",
            "--site-lat",
            "40.7306",
            "--site-lng",
            "-73.9352",
        ])
        .unwrap();

        assert_eq!(args.site(), Some(GeoPoint::new(40.7306, -73.9352)));
        assert!(!args.listing_from_stdin());
        assert!(!args.json);
    }

    #[test]
    fn test_site_needs_both_coordinates() {
        let result = Args::try_parse_from([
            "sitedrop-quote",
            "--listing",
            "listing.json",
            "--site-lat",
            "40.7306",
        ]);
        assert!(result.is_err());
    }

    fn args_with_site(lat: &str, lng: &str) -> Args {
        Args::try_parse_from([
            "sitedrop-quote",
            "--listing",
            "listing.json",
            "--site-lat",
            lat,
            "--site-lng",
            lng,
        ])
        .unwrap()
    }

    #[test]
    fn test_checked_site() {
        let site = args_with_site("40.7306", "-73.9352").checked_site().unwrap();
        assert_eq!(site, Some(GeoPoint::new(40.7306, -73.9352)));

        let err = args_with_site("NaN", "-73.9352").checked_site().unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidCoordinate { ref field, .. } if field == "destination.lat"
        ));

        let err = args_with_site("91", "-73.9352").checked_site().unwrap_err();
        assert!(matches!(
            err,
            PricingError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_stdin_listing() {
        let args = Args::try_parse_from(["sitedrop-quote", "-l", "-", "--json"]).unwrap();
        assert!(args.listing_from_stdin());
        assert!(args.json);
        assert_eq!(args.site(), None);
    }
}
