use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::CartClient;
use crate::domain::{Cart, CartItem, CartSummary};

use super::{CartError, CartRequest, ServiceResponse};

pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
}

impl CartService {
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            cart: Cart::new(),
        };
        (service, CartClient::new(sender))
    }

    /// Runs until every [`CartClient`] has been dropped.
    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddToCart { item, respond_to } => {
                    self.handle_add_to_cart(item, respond_to);
                }
                CartRequest::RemoveFromCart { item, respond_to } => {
                    self.handle_remove_from_cart(item, respond_to);
                }
                CartRequest::GetItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.items().to_vec()));
                }
                CartRequest::GetSummary { respond_to } => {
                    self.handle_get_summary(respond_to);
                }
            }
        }
        info!(items = self.cart.len(), "CartService stopped");
    }

    #[instrument(fields(product_id = %item.product.id), skip(self, item, respond_to))]
    fn handle_add_to_cart(&mut self, item: CartItem, respond_to: ServiceResponse<usize, CartError>) {
        let count = self.cart.add(item);
        info!(count, "Item added to cart");
        let _ = respond_to.send(Ok(count));
    }

    #[instrument(fields(product_id = %item.product.id), skip(self, item, respond_to))]
    fn handle_remove_from_cart(&mut self, item: CartItem, respond_to: ServiceResponse<bool, CartError>) {
        let removed = self.cart.remove(&item);
        if removed {
            info!(count = self.cart.len(), "Item removed from cart");
        } else {
            debug!("Item not in cart");
        }
        let _ = respond_to.send(Ok(removed));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_summary(&self, respond_to: ServiceResponse<CartSummary, CartError>) {
        let summary = self.cart.summary();
        debug!(items = summary.item_count, total = summary.total, "Summarized cart");
        let _ = respond_to.send(Ok(summary));
    }
}
