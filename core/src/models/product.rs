// shopcart/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A catalog entry. Products are edited out-of-band; the API only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub image: String,
}
