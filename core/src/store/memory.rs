// shopcart/src/store/memory.rs

use crate::error::StoreResult;
use crate::models::{CartItem, Product};
use crate::store::ShopStore;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Volatile backend holding both documents behind `parking_lot` locks.
///
/// Guards are never held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  catalog: RwLock<Vec<Product>>,
  cart: RwLock<Vec<CartItem>>,
}

impl MemoryStore {
  pub fn new(catalog: Vec<Product>) -> Self {
    Self {
      catalog: RwLock::new(catalog),
      cart: RwLock::new(Vec::new()),
    }
  }

  /// Copy of the cart document as currently stored.
  pub fn cart_snapshot(&self) -> Vec<CartItem> {
    self.cart.read().clone()
  }
}

#[async_trait]
impl ShopStore for MemoryStore {
  async fn load_catalog(&self) -> StoreResult<Vec<Product>> {
    Ok(self.catalog.read().clone())
  }

  async fn save_catalog(&self, products: &[Product]) -> StoreResult<()> {
    *self.catalog.write() = products.to_vec();
    Ok(())
  }

  async fn load_cart(&self) -> StoreResult<Vec<CartItem>> {
    Ok(self.cart.read().clone())
  }

  async fn save_cart(&self, items: &[CartItem]) -> StoreResult<()> {
    *self.cart.write() = items.to_vec();
    Ok(())
  }
}
