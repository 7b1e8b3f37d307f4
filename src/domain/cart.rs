use serde::{Deserialize, Serialize};

use super::Product;

/// A snapshot of a product placed into the cart.
///
/// The product is copied by value at add time, so later catalog changes do
/// not reach items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self { product }
    }
}

impl From<Product> for CartItem {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}

/// Ordered collection of cart items.
///
/// Items carry no quantity: adding the same product twice stores two entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally and returns the new item count.
    pub fn add(&mut self, item: CartItem) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Removes the first structurally-equal item. Returns `false` when absent.
    pub fn remove(&mut self, item: &CartItem) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.product.price).sum()
    }

    /// Groups equal items into lines, in the order each was first added.
    pub fn summary(&self) -> CartSummary {
        let mut lines: Vec<CartLine> = Vec::new();
        for item in &self.items {
            match lines.iter_mut().find(|line| line.product == item.product) {
                Some(line) => {
                    line.quantity += 1;
                    line.subtotal += item.product.price;
                }
                None => lines.push(CartLine {
                    product: item.product.clone(),
                    quantity: 1,
                    subtotal: item.product.price,
                }),
            }
        }

        CartSummary {
            item_count: self.items.len(),
            total: self.total(),
            lines,
        }
    }
}

/// Equal items folded together with a count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Read-only view of the cart for checkout-style surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub total: f64,
    pub lines: Vec<CartLine>,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
