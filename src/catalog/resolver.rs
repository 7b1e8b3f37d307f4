use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::CatalogConfig;
use crate::store::DocumentStore;

use super::{bounded, product_from_document, ProductLookup};

/// Single-product lookup: the products collection first, then special offers.
///
/// The two reads run sequentially. A store error ends the chain immediately
/// as [`ProductLookup::Failed`]; only a clean miss moves on to the offers.
#[derive(Clone)]
pub struct ProductDetailResolver {
    store: Arc<dyn DocumentStore>,
    chain: [String; 2],
    timeout: Duration,
}

impl ProductDetailResolver {
    pub fn new(store: Arc<dyn DocumentStore>, config: &CatalogConfig) -> Self {
        Self {
            store,
            chain: [
                config.products_collection.clone(),
                config.offers_collection.clone(),
            ],
            timeout: config.fetch_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_product(&self, id: &str) -> ProductLookup {
        for collection in &self.chain {
            match bounded(self.timeout, collection, self.store.get(collection, id)).await {
                Ok(Some(doc)) => {
                    info!(collection = %collection, "Product found");
                    return ProductLookup::Found(product_from_document(&doc));
                }
                Ok(None) => debug!(collection = %collection, "Not in collection"),
                Err(e) => {
                    warn!(collection = %collection, error = %e, "Product lookup failed");
                    return ProductLookup::Failed(e);
                }
            }
        }
        info!("Product not found");
        ProductLookup::NotFound
    }
}
