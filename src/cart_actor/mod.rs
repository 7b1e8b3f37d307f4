//! The cart actor: sole owner of the session's cart.
//!
//! Every mutation arrives as a [`CartRequest`] on one queue and is applied in
//! arrival order, so concurrent callers never race on the collection.

mod error;
mod messages;
mod service;

pub use error::*;
pub use messages::*;
pub use service::CartService;
