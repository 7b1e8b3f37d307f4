use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::cart_actor::{CartError, CartService};
use crate::catalog::{CatalogRepository, ProductDetailResolver};
use crate::clients::CartClient;
use crate::config::{ListingConfig, StorefrontConfig};
use crate::domain::{CartItem, Product};
use crate::identity::{Greeting, IdentityProvider};
use crate::listing::{featured, ListingWindow};
use crate::store::DocumentStore;

use super::SystemError;

/// Everything a storefront UI shell needs, wired together.
///
/// Owns the cart actor task; the catalog accessors are plain shared handles.
/// Must be created inside a tokio runtime.
pub struct StorefrontSystem {
    pub catalog: CatalogRepository,
    pub resolver: ProductDetailResolver,
    pub cart_client: CartClient,
    identity: Arc<dyn IdentityProvider>,
    listing: ListingConfig,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    pub fn new(
        config: &StorefrontConfig,
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        info!(
            products = %config.catalog.products_collection,
            offers = %config.catalog.offers_collection,
            "Starting storefront system"
        );

        let catalog = CatalogRepository::new(store.clone(), &config.catalog);
        let resolver = ProductDetailResolver::new(store, &config.catalog);

        let (cart_service, cart_client) = CartService::new(config.cart_buffer);
        let cart_handle = tokio::spawn(cart_service.run());

        Self {
            catalog,
            resolver,
            cart_client,
            identity,
            listing: config.listing,
            handles: vec![cart_handle],
        }
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::from_provider(self.identity.as_ref())
    }

    /// A fresh paging window for the offers list.
    pub fn offers_window(&self) -> ListingWindow {
        ListingWindow::from_config(&self.listing)
    }

    /// The leading products shown on the home page. Empty when the fetch fails.
    #[instrument(skip(self))]
    pub async fn featured_products(&self) -> Vec<Product> {
        let products = self.catalog.fetch_products().await.into_items();
        featured(&products, self.listing.featured).to_vec()
    }

    /// Snapshot `product` into the cart, as the detail view's buy action does.
    #[instrument(fields(product_id = %product.id), skip(self, product))]
    pub async fn buy(&self, product: Product) -> Result<usize, CartError> {
        self.cart_client.add_to_cart(CartItem::new(product)).await
    }

    /// Waits for the cart actor to finish. Clones of `cart_client` held
    /// elsewhere keep it running, so drop those first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // The cart actor exits once its last client is dropped.
        drop(self.cart_client);
        drop(self.catalog);
        drop(self.resolver);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
