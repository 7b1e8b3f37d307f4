use tokio::sync::oneshot;

use crate::domain::{CartItem, CartSummary};

use super::CartError;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Commands accepted by the cart actor. Each carries its own reply channel.
#[derive(Debug)]
pub enum CartRequest {
    AddToCart {
        item: CartItem,
        respond_to: ServiceResponse<usize, CartError>,
    },
    RemoveFromCart {
        item: CartItem,
        respond_to: ServiceResponse<bool, CartError>,
    },
    GetItems {
        respond_to: ServiceResponse<Vec<CartItem>, CartError>,
    },
    GetSummary {
        respond_to: ServiceResponse<CartSummary, CartError>,
    },
}
