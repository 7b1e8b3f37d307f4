//! Read-only access to the product catalog and special offers.

mod error;
mod mapping;
mod outcome;
mod repository;
mod resolver;

pub use error::*;
pub use mapping::product_from_document;
pub use outcome::{FetchOutcome, ProductLookup};
pub use repository::CatalogRepository;
pub use resolver::ProductDetailResolver;

use std::future::Future;
use std::time::Duration;

use crate::store::StoreResult;

/// Runs one store call under the configured timeout.
async fn bounded<T>(
    timeout: Duration,
    collection: &str,
    call: impl Future<Output = StoreResult<T>>,
) -> Result<T, CatalogError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(CatalogError::from),
        Err(_) => Err(CatalogError::Timeout {
            collection: collection.to_string(),
            after: timeout,
        }),
    }
}
