use crate::domain::Product;
use crate::store::Document;

/// Maps a raw document to a [`Product`].
///
/// Missing or mistyped text fields become empty strings and a missing or
/// non-numeric price becomes `0.0`. No further validation is applied.
pub fn product_from_document(doc: &Document) -> Product {
    Product {
        id: doc.id.clone(),
        name: doc.get_str("name").unwrap_or_default().to_string(),
        description: doc.get_str("description").unwrap_or_default().to_string(),
        price: doc.get_f64("price").unwrap_or(0.0),
        image_url: doc.get_str("imageUrl").unwrap_or_default().to_string(),
    }
}
