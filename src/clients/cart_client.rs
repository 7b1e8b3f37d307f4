use tokio::sync::mpsc;

use crate::cart_actor::{CartError, CartRequest};
use crate::domain::{CartItem, CartSummary};

/// Cloneable handle to the cart actor.
///
/// Pass it to whichever component reads or writes the cart; all clones feed
/// the same command queue.
#[derive(Clone, Debug)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CartClient => fn add_to_cart(item: CartItem) -> usize as CartRequest::AddToCart, Error = CartError);
client_method!(CartClient => fn remove_from_cart(item: CartItem) -> bool as CartRequest::RemoveFromCart, Error = CartError);
client_method!(CartClient => fn items() -> Vec<CartItem> as CartRequest::GetItems, Error = CartError);
client_method!(CartClient => fn summary() -> CartSummary as CartRequest::GetSummary, Error = CartError);
