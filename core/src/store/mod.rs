// shopcart/src/store/mod.rs

//! Storage seam for the two documents the shop works with.
//!
//! Every call reads or writes a whole document. Backends must report a
//! document that does not exist yet as an empty sequence and anything else
//! that prevents reading it as a `StoreError`.

pub mod file;
pub mod memory;

use crate::error::StoreResult;
use crate::models::{CartItem, Product};
use async_trait::async_trait;

#[async_trait]
pub trait ShopStore: Send + Sync {
  /// Loads the full product catalog, in document order.
  async fn load_catalog(&self) -> StoreResult<Vec<Product>>;

  /// Replaces the full product catalog. Only used for seeding.
  async fn save_catalog(&self, products: &[Product]) -> StoreResult<()>;

  /// Loads the full cart, in document order.
  async fn load_cart(&self) -> StoreResult<Vec<CartItem>>;

  /// Replaces the full cart.
  async fn save_cart(&self, items: &[CartItem]) -> StoreResult<()>;
}
