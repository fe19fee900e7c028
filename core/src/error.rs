// shopcart/src/error.rs
use thiserror::Error;

/// Failures reported by a `ShopStore` backend.
///
/// A document that does not exist yet is not an error; backends report it as
/// an empty sequence.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("I/O failure on document '{document}': {source}")]
  Io {
    document: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Document '{document}' is not a valid JSON array: {source}")]
  Malformed {
    document: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Could not encode document '{document}': {source}")]
  Encode {
    document: String,
    #[source]
    source: serde_json::Error,
  },
}

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Product not found: {product_id}")]
  ProductNotFound { product_id: String },

  #[error("Item not found in cart: {item_id}")]
  ItemNotFound { item_id: String },

  #[error("Quantity for product {product_id} would overflow")]
  QuantityOverflow { product_id: String },

  #[error("Storage error: {0}")]
  Store(#[from] StoreError),
}

impl CartError {
  /// True for the two "unknown id" variants.
  pub fn is_not_found(&self) -> bool {
    matches!(self, CartError::ProductNotFound { .. } | CartError::ItemNotFound { .. })
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
