// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use shopcart::{CartItem, ItemIdGenerator, MemoryStore, Product, ShopStore, StoreResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::Level;

// --- Fixtures ---
pub fn shirt() -> Product {
  Product {
    id: "1".to_string(),
    name: "Shirt".to_string(),
    price: 19.99,
    image: "x".to_string(),
  }
}

pub fn jeans() -> Product {
  Product {
    id: "2".to_string(),
    name: "Jeans".to_string(),
    price: 49.5,
    image: "https://img.example/jeans.jpg".to_string(),
  }
}

pub fn jacket() -> Product {
  Product {
    id: "3".to_string(),
    name: "Jacket".to_string(),
    price: 89.0,
    image: "https://img.example/jacket.jpg".to_string(),
  }
}

pub fn sample_catalog() -> Vec<Product> {
  vec![shirt(), jeans(), jacket()]
}

// --- Deterministic ids ---
#[derive(Debug, Default)]
pub struct SequentialIds(AtomicU64);

impl ItemIdGenerator for SequentialIds {
  fn next_id(&self) -> String {
    format!("line-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
  }
}

// --- Store that yields between read and write ---
// Widens the window a lost update would need, so the writer lock is actually exercised.
#[derive(Debug, Default)]
pub struct SlowStore {
  pub inner: MemoryStore,
}

#[async_trait]
impl ShopStore for SlowStore {
  async fn load_catalog(&self) -> StoreResult<Vec<Product>> {
    self.inner.load_catalog().await
  }

  async fn save_catalog(&self, products: &[Product]) -> StoreResult<()> {
    self.inner.save_catalog(products).await
  }

  async fn load_cart(&self) -> StoreResult<Vec<CartItem>> {
    let items = self.inner.load_cart().await?;
    tokio::time::sleep(Duration::from_millis(2)).await;
    Ok(items)
  }

  async fn save_cart(&self, items: &[CartItem]) -> StoreResult<()> {
    self.inner.save_cart(items).await
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
