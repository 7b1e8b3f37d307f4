//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_PRODUCTS_COLLECTION` - Primary catalog collection (default: `products`)
//! - `STOREFRONT_OFFERS_COLLECTION` - Special offers collection (default: `special offers`)
//! - `STOREFRONT_CART_BUFFER` - Cart command queue capacity (default: 32)
//! - `STOREFRONT_FETCH_TIMEOUT_MS` - Per-read timeout against the document store (default: 10000)
//! - `STOREFRONT_LISTING_INITIAL` - Items shown before "load more" (default: 10)
//! - `STOREFRONT_LISTING_STEP` - Items added per "load more" (default: 8)
//! - `STOREFRONT_FEATURED_COUNT` - Products featured on the home page (default: 4)

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PRODUCTS_COLLECTION: &str = "products";

/// Offers collection read by the offers list and the detail fallback.
///
/// The home banner in the mobile app reads `specialOffers` instead. Which of
/// the two is canonical is unconfirmed; set `STOREFRONT_OFFERS_COLLECTION`
/// to switch.
pub const DEFAULT_OFFERS_COLLECTION: &str = "special offers";

const DEFAULT_CART_BUFFER: usize = 32;
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_LISTING_INITIAL: usize = 10;
const DEFAULT_LISTING_STEP: usize = 8;
const DEFAULT_FEATURED_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
    /// Capacity of the cart actor's command queue
    pub cart_buffer: usize,
    pub listing: ListingConfig,
}

/// Where the catalog lives and how long a single read may take.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub products_collection: String,
    pub offers_collection: String,
    pub fetch_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingConfig {
    pub initial: usize,
    pub step: usize,
    pub featured: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            cart_buffer: DEFAULT_CART_BUFFER,
            listing: ListingConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_collection: DEFAULT_PRODUCTS_COLLECTION.to_string(),
            offers_collection: DEFAULT_OFFERS_COLLECTION.to_string(),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial: DEFAULT_LISTING_INITIAL,
            step: DEFAULT_LISTING_STEP,
            featured: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cart_buffer = parse_or(&lookup, "STOREFRONT_CART_BUFFER", DEFAULT_CART_BUFFER)?;
        if cart_buffer == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_CART_BUFFER".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        let timeout_ms = parse_or(&lookup, "STOREFRONT_FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS)?;

        Ok(Self {
            catalog: CatalogConfig {
                products_collection: lookup("STOREFRONT_PRODUCTS_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_PRODUCTS_COLLECTION.to_string()),
                offers_collection: lookup("STOREFRONT_OFFERS_COLLECTION")
                    .unwrap_or_else(|| DEFAULT_OFFERS_COLLECTION.to_string()),
                fetch_timeout: Duration::from_millis(timeout_ms),
            },
            cart_buffer,
            listing: ListingConfig {
                initial: parse_or(&lookup, "STOREFRONT_LISTING_INITIAL", DEFAULT_LISTING_INITIAL)?,
                step: parse_or(&lookup, "STOREFRONT_LISTING_STEP", DEFAULT_LISTING_STEP)?,
                featured: parse_or(&lookup, "STOREFRONT_FEATURED_COUNT", DEFAULT_FEATURED_COUNT)?,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
