use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::config::CatalogConfig;
use crate::domain::Product;
use crate::store::DocumentStore;

use super::{bounded, product_from_document, FetchOutcome};

/// Bulk listings of products and special offers.
///
/// No retry: a failed read is reported once as [`FetchOutcome::Failed`].
#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn DocumentStore>,
    products_collection: String,
    offers_collection: String,
    timeout: Duration,
}

impl CatalogRepository {
    pub fn new(store: Arc<dyn DocumentStore>, config: &CatalogConfig) -> Self {
        Self {
            store,
            products_collection: config.products_collection.clone(),
            offers_collection: config.offers_collection.clone(),
            timeout: config.fetch_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> FetchOutcome<Product> {
        self.fetch_collection(&self.products_collection).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_special_offers(&self) -> FetchOutcome<Product> {
        self.fetch_collection(&self.offers_collection).await
    }

    async fn fetch_collection(&self, collection: &str) -> FetchOutcome<Product> {
        match bounded(self.timeout, collection, self.store.get_all(collection)).await {
            Ok(docs) => {
                let products: Vec<Product> = docs.iter().map(product_from_document).collect();
                info!(collection, count = products.len(), "Fetched listing");
                FetchOutcome::from_items(products)
            }
            Err(e) => {
                warn!(collection, error = %e, "Listing fetch failed");
                FetchOutcome::Failed(e)
            }
        }
    }
}
