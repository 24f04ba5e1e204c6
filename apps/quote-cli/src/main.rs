//! # sitedrop-quote
//!
//! Prices a marketplace listing for delivery to a construction site.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args ──► QuoteConfig::load ──► tracing ──► read listing JSON          │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                 stdout ◄── render ◄── ListingQuote::build               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout carries only the quote.

mod cli;
mod config;
mod render;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use sitedrop_core::{Listing, ListingQuote};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::QuoteConfig;
use crate::render::{render_json, render_text};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = QuoteConfig::load(args.config.as_deref())?.with_overrides(&args);
    init_tracing(&config.log_level, args.verbose);

    let settings = config.display_settings()?;
    info!(
        display_currency = %settings.display_currency,
        locale = %settings.locale,
        round_trip_factor = settings.policy.round_trip_factor,
        "Configuration loaded"
    );

    let listing = read_listing(&args)?;
    let listing_id = listing.id.uuid;
    if listing.attributes.geolocation.is_none() {
        warn!(%listing_id, "Listing has no geolocation, measuring from (0, 0)");
    }
    if listing.attributes.public_data.delivery_price_per_km.is_none() {
        debug!(%listing_id, "Listing has no delivery rate, delivery is free");
    }

    let site = args.checked_site().context("Invalid construction site")?;

    let quote = ListingQuote::build(&listing, site, &settings)
        .with_context(|| format!("Failed to price listing {listing_id}"))?;

    if let Some(currency) = quote.price.unsupported_currency {
        warn!(
            %listing_id,
            %currency,
            display_currency = %settings.display_currency,
            "Listing priced in unsupported currency"
        );
    }
    info!(
        %listing_id,
        distance_km = quote.pricing.distance_km,
        delivery = %quote.pricing.delivery_cost,
        total = %quote.pricing.total_cost,
        "Quote computed"
    );

    let output = if args.json {
        render_json(&quote)?
    } else {
        render_text(&listing.attributes.title, &quote)
    };
    println!("{output}");

    Ok(())
}

/// `RUST_LOG` wins over the configured level; `--verbose` forces debug.
fn init_tracing(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_listing(args: &Args) -> Result<Listing> {
    let raw = if args.listing_from_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read listing from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.listing)
            .with_context(|| format!("Failed to read {}", args.listing.display()))?
    };

    let listing: Listing = serde_json::from_str(&raw).context("Listing is not valid JSON")?;
    debug!(listing_id = %listing.id.uuid, title = %listing.attributes.title, "Listing parsed");

    Ok(listing)
}
