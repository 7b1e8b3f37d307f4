use crate::domain::Product;

use super::CatalogError;

/// Result of a bulk listing fetch.
///
/// Keeps "no data" and "fetch failed" apart. [`FetchOutcome::into_items`]
/// folds a failure into an empty list for callers that render either case
/// the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    Empty,
    Failed(CatalogError),
}

impl<T> FetchOutcome<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(items)
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            Self::Empty | Self::Failed(_) => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Loaded(items) => items,
            Self::Empty | Self::Failed(_) => Vec::new(),
        }
    }
}

/// Result of a single-product lookup across the fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    Found(Product),
    NotFound,
    Failed(CatalogError),
}

impl ProductLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Collapses both not-found and failure into `None`.
    pub fn into_option(self) -> Option<Product> {
        match self {
            Self::Found(product) => Some(product),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}
