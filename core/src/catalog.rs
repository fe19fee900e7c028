// shopcart/src/catalog.rs

//! Read-only access to the product catalog.

use crate::error::StoreResult;
use crate::models::Product;
use crate::store::ShopStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct Catalog {
  store: Arc<dyn ShopStore>,
}

impl Catalog {
  pub fn new(store: Arc<dyn ShopStore>) -> Self {
    Self { store }
  }

  /// All products in document order.
  ///
  /// An unreadable catalog is logged and reported as empty.
  #[instrument(name = "catalog::list", skip(self))]
  pub async fn list(&self) -> Vec<Product> {
    match self.store.load_catalog().await {
      Ok(products) => {
        info!("Fetched {} products.", products.len());
        products
      }
      Err(e) => {
        warn!(error = %e, "Catalog unreadable, listing it as empty.");
        Vec::new()
      }
    }
  }

  /// Looks a product up by id. Storage faults are returned, not masked.
  #[instrument(name = "catalog::find", skip(self), err(Display))]
  pub async fn find(&self, product_id: &str) -> StoreResult<Option<Product>> {
    let products = self.store.load_catalog().await?;
    Ok(products.into_iter().find(|p| p.id == product_id))
  }
}
