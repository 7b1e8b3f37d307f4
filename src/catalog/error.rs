use std::time::Duration;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog fetch failed: {0}")]
    Store(#[from] StoreError),
    #[error("Timed out reading {collection} after {after:?}")]
    Timeout { collection: String, after: Duration },
}
