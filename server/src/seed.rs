// shopcart/server/src/seed.rs

//! Starter catalog written on startup when `SEED_CATALOG=true`.

use anyhow::Context;
use shopcart::{Product, ShopStore};
use tracing::{info, instrument};

fn starter_catalog() -> Vec<Product> {
  let product = |id: &str, name: &str, price: f64, image: &str| Product {
    id: id.to_string(),
    name: name.to_string(),
    price,
    image: image.to_string(),
  };
  vec![
    product("1", "Classic White T-Shirt", 19.99, "https://images.example.com/tshirt-white.jpg"),
    product("2", "Slim Fit Jeans", 49.99, "https://images.example.com/jeans-slim.jpg"),
    product("3", "Hooded Sweatshirt", 39.5, "https://images.example.com/hoodie.jpg"),
    product("4", "Denim Jacket", 79.0, "https://images.example.com/denim-jacket.jpg"),
    product("5", "Canvas Sneakers", 59.95, "https://images.example.com/sneakers.jpg"),
  ]
}

/// Writes the starter catalog if the current one is empty. Returns whether it wrote.
///
/// A catalog that exists but cannot be read is left alone and reported as an error.
#[instrument(name = "seed::seed_catalog_if_empty", skip(store), err(Display))]
pub async fn seed_catalog_if_empty(store: &dyn ShopStore) -> anyhow::Result<bool> {
  let current = store
    .load_catalog()
    .await
    .context("Reading the catalog before seeding")?;
  if !current.is_empty() {
    info!("Catalog already has {} products, skipping seed.", current.len());
    return Ok(false);
  }

  let products = starter_catalog();
  store
    .save_catalog(&products)
    .await
    .context("Writing the starter catalog")?;
  info!("Seeded catalog with {} products.", products.len());
  Ok(true)
}
