#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::app_system::StorefrontSystem;
    use crate::catalog::{CatalogRepository, ProductDetailResolver, ProductLookup};
    use crate::config::{CatalogConfig, StorefrontConfig};
    use crate::domain::{CartItem, Product, UserProfile};
    use crate::identity::StaticIdentity;
    use crate::mock_framework::{create_mock_cart_client, expect_add, expect_remove, expect_summary};
    use crate::store::InMemoryDocumentStore;

    async fn seeded_store() -> Arc<InMemoryDocumentStore> {
        let store = Arc::new(InMemoryDocumentStore::new());
        for (id, name, price) in [
            ("p1", "Burger", 9.99),
            ("p2", "Fries", 4.5),
            ("p3", "Shake", 3.25),
            ("p4", "Salad", 6.0),
            ("p5", "Wrap", 7.75),
        ] {
            store
                .insert("products", id, json!({"name": name, "price": price}))
                .await;
        }
        store
            .insert("special offers", "special1", json!({"name": "Combo", "price": 12}))
            .await;
        store
    }

    fn system_with(store: Arc<InMemoryDocumentStore>) -> StorefrontSystem {
        StorefrontSystem::new(
            &StorefrontConfig::default(),
            store,
            Arc::new(StaticIdentity::signed_in(UserProfile::new(Some("Alice".into()), None))),
        )
    }

    #[tokio::test]
    async fn test_browse_resolve_and_buy_flow() {
        let system = system_with(seeded_store().await);

        assert_eq!(system.greeting().display_name, "Alice");

        let featured = system.featured_products().await;
        let ids: Vec<_> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4"]);

        // Detail view for an offer-only id goes through the fallback.
        let combo = system
            .resolver
            .fetch_product("special1")
            .await
            .into_option()
            .expect("offer should resolve");
        assert_eq!(
            combo,
            Product {
                id: "special1".into(),
                name: "Combo".into(),
                description: String::new(),
                price: 12.0,
                image_url: String::new(),
            }
        );

        assert_eq!(system.buy(combo.clone()).await, Ok(1));
        assert_eq!(system.buy(featured[0].clone()).await, Ok(2));

        let summary = system.cart_client.summary().await.unwrap();
        assert_eq!(summary.item_count, 2);
        assert!((summary.total - 21.99).abs() < 1e-9);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cart_scenario_through_actor() {
        let system = system_with(Arc::new(InMemoryDocumentStore::new()));
        let cart = system.cart_client.clone();

        assert!(cart.items().await.unwrap().is_empty());

        let p1 = CartItem::new(Product::new("p1", "Burger", 9.99));
        let p2 = CartItem::new(Product::new("p2", "Fries", 4.5));
        cart.add_to_cart(p1.clone()).await.unwrap();
        cart.add_to_cart(p2.clone()).await.unwrap();

        let summary = cart.summary().await.unwrap();
        assert_eq!(summary.item_count, 2);
        assert!((summary.total - 14.49).abs() < 1e-9);

        assert_eq!(cart.remove_from_cart(p1).await, Ok(true));
        let items = cart.items().await.unwrap();
        assert_eq!(items, vec![p2]);

        drop(cart);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_round_trip_with_duplicate_removes_one_instance() {
        let system = system_with(Arc::new(InMemoryDocumentStore::new()));
        let a = CartItem::new(Product::new("a", "A", 1.0));
        let b = CartItem::new(Product::new("b", "B", 2.0));

        system.cart_client.add_to_cart(a.clone()).await.unwrap();
        system.cart_client.add_to_cart(b.clone()).await.unwrap();
        let before = system.cart_client.items().await.unwrap();

        system.cart_client.add_to_cart(a.clone()).await.unwrap();
        system.cart_client.remove_from_cart(a.clone()).await.unwrap();
        let after = system.cart_client.items().await.unwrap();

        // Same multiset, but the surviving `a` is the one added last.
        assert_eq!(after.len(), before.len());
        assert_eq!(after, vec![b, a]);
        assert_ne!(after, before);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_backend_never_errors_to_caller() {
        let store = seeded_store().await;
        store.set_failing(true);
        let system = system_with(store);

        assert!(system.featured_products().await.is_empty());
        assert!(system.catalog.fetch_special_offers().await.into_items().is_empty());
        assert_eq!(
            system.resolver.fetch_product("special1").await.into_option(),
            None
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_detail_buy_sends_resolved_snapshot() {
        let store = seeded_store().await;
        let config = CatalogConfig::default();
        let resolver = ProductDetailResolver::new(store.clone(), &config);
        let catalog = CatalogRepository::new(store, &config);
        let (cart, mut cart_rx) = create_mock_cart_client(10);

        let screen = tokio::spawn(async move {
            let ProductLookup::Found(product) = resolver.fetch_product("p2").await else {
                panic!("p2 should resolve");
            };
            let count = cart.add_to_cart(CartItem::new(product.clone())).await?;
            let removed = cart.remove_from_cart(CartItem::new(product)).await?;
            let summary = cart.summary().await?;
            Ok::<_, crate::cart_actor::CartError>((count, removed, summary.item_count))
        });

        let (item, responder) = expect_add(&mut cart_rx).await.expect("Expected AddToCart");
        let listed = catalog.fetch_products().await.into_items();
        assert_eq!(Some(&item.product), listed.iter().find(|p| p.id == "p2"));
        responder.send(Ok(1)).unwrap();

        let (item, responder) = expect_remove(&mut cart_rx).await.expect("Expected RemoveFromCart");
        assert_eq!(item.product.id, "p2");
        responder.send(Ok(true)).unwrap();

        let responder = expect_summary(&mut cart_rx).await.expect("Expected GetSummary");
        responder
            .send(Ok(crate::domain::Cart::new().summary()))
            .unwrap();

        assert_eq!(screen.await.unwrap(), Ok((1, true, 0)));
    }

    #[tokio::test]
    async fn test_offers_window_pages_through_offers() {
        let store = Arc::new(InMemoryDocumentStore::new());
        for n in 0..12 {
            store
                .insert("special offers", format!("s{n}"), json!({"name": format!("Offer {n}")}))
                .await;
        }
        let system = system_with(store);

        let offers = system.catalog.fetch_special_offers().await.into_items();
        let mut window = system.offers_window();
        assert_eq!(window.visible(&offers).len(), 10);
        assert!(window.has_more(offers.len()));
        window.load_more();
        assert_eq!(window.visible(&offers).len(), 12);
        assert!(!window.has_more(offers.len()));

        system.shutdown().await.unwrap();
    }
}
