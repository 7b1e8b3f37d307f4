//! # Storefront cart
//!
//! Catalog access and cart state for a storefront UI shell.
//!
//! - **Catalog** - [`catalog::CatalogRepository`] lists products and special
//!   offers; [`catalog::ProductDetailResolver`] looks one product up, falling
//!   back from the products collection to the offers collection.
//! - **Cart** - one [`cart_actor::CartService`] task owns the cart. Callers
//!   hold a cloneable [`clients::CartClient`]; every add or remove is a
//!   message on a single queue, applied in arrival order.
//! - **System** - [`app_system::StorefrontSystem`] wires both together over a
//!   [`store::DocumentStore`] and an [`identity::IdentityProvider`].
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use storefront_cart::app_system::StorefrontSystem;
//! use storefront_cart::config::StorefrontConfig;
//! use storefront_cart::identity::StaticIdentity;
//! use storefront_cart::store::InMemoryDocumentStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = StorefrontSystem::new(
//!     &StorefrontConfig::from_env()?,
//!     Arc::new(InMemoryDocumentStore::new()),
//!     Arc::new(StaticIdentity::anonymous()),
//! );
//!
//! if let Some(product) = system.resolver.fetch_product("special1").await.into_option() {
//!     system.buy(product).await?;
//! }
//! let summary = system.cart_client.summary().await?;
//! println!("{} items, total {:.2}", summary.item_count, summary.total);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod identity;
pub mod listing;
pub mod store;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
