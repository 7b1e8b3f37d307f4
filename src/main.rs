use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn, Instrument};

use storefront_cart::app_system::{setup_tracing, StorefrontSystem};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::domain::UserProfile;
use storefront_cart::identity::StaticIdentity;
use storefront_cart::store::InMemoryDocumentStore;

async fn seed_store(config: &StorefrontConfig) -> Arc<InMemoryDocumentStore> {
    let store = Arc::new(InMemoryDocumentStore::new());
    let products = &config.catalog.products_collection;
    let offers = &config.catalog.offers_collection;

    store
        .insert(products, "p1", json!({
            "name": "Cheeseburger",
            "description": "Beef patty, cheddar, pickles",
            "price": 9.99,
            "imageUrl": "https://images.example.com/p1.png"
        }))
        .await;
    store
        .insert(products, "p2", json!({"name": "Fries", "description": "Salted", "price": 4.5}))
        .await;
    store
        .insert(products, "p3", json!({"name": "Milkshake", "price": 3.25}))
        .await;
    store
        .insert(offers, "special1", json!({"name": "Combo", "price": 12}))
        .await;
    store
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    let store = seed_store(&config).await;
    let identity = StaticIdentity::signed_in(UserProfile::new(Some("Alice".into()), None));

    let system = StorefrontSystem::new(&config, store, Arc::new(identity));
    info!(user = %system.greeting().display_name, "Greeting");

    let span = tracing::info_span!("browse");
    let featured = async {
        let offers = system.catalog.fetch_special_offers().await;
        if offers.is_failed() {
            warn!("Special offers unavailable");
        }
        let window = system.offers_window();
        for offer in window.visible(offers.items()) {
            info!(id = %offer.id, name = %offer.name, price = offer.price, "Offer");
        }
        system.featured_products().await
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("checkout");
    async {
        for product in featured.iter().take(2) {
            info!(route = %product.detail_route(), "Opening product");
            system.buy(product.clone()).await?;
        }
        match system.resolver.fetch_product("special1").await.into_option() {
            Some(offer) => {
                system.buy(offer).await?;
            }
            None => warn!("Offer special1 not found"),
        }

        let summary = system.cart_client.summary().await?;
        for line in &summary.lines {
            info!(name = %line.product.name, quantity = line.quantity, subtotal = line.subtotal, "Cart line");
        }
        info!(items = summary.item_count, total = summary.total, "Cart summary");
        Ok::<_, storefront_cart::cart_actor::CartError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
