//! # Mock Framework
//!
//! Utilities for testing cart callers in isolation.
//!
//! Use [`create_mock_cart_client`] to get a client and the receiving end of its
//! queue, then helpers like [`expect_add`] to assert what was sent and reply
//! by hand.

use tokio::sync::mpsc;

use crate::cart_actor::{CartError, CartRequest, ServiceResponse};
use crate::clients::CartClient;
use crate::domain::{CartItem, CartSummary};

/// Creates a client whose requests land on a receiver the test controls, so
/// replies (success, failure, delay) are chosen deterministically.
pub fn create_mock_cart_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(CartItem, ServiceResponse<usize, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::AddToCart { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(CartItem, ServiceResponse<bool, CartError>)> {
    match receiver.recv().await {
        Some(CartRequest::RemoveFromCart { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

pub async fn expect_summary(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<CartSummary, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::GetSummary { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_cart_client() {
        let (client, mut receiver) = create_mock_cart_client(10);

        let add_task = tokio::spawn(async move {
            client
                .add_to_cart(CartItem::new(Product::new("p1", "Test", 3.0)))
                .await
        });

        let (item, responder) = expect_add(&mut receiver).await.expect("Expected AddToCart request");
        assert_eq!(item.product.id, "p1");
        responder.send(Ok(7)).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(7));
    }

    #[tokio::test]
    async fn test_expect_helpers_reject_other_variants() {
        let (client, mut receiver) = create_mock_cart_client(10);

        let task = tokio::spawn(async move { client.items().await });
        assert!(expect_remove(&mut receiver).await.is_none());
        // The GetItems responder was dropped by the helper.
        assert!(task.await.unwrap().is_err());
    }
}
