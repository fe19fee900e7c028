// shopcart/src/models/cart_item.rs

use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// One line of the shared cart.
///
/// `name`, `price` and `image` are copied from the product when the line is
/// created and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: String,
  pub product_id: String,
  pub name: String,
  pub price: f64,
  pub image: String,
  pub quantity: i64,
}

impl CartItem {
  /// Builds a fresh line for `product`, denormalizing its display fields.
  pub fn from_product(id: String, product: &Product, quantity: i64) -> Self {
    Self {
      id,
      product_id: product.id.clone(),
      name: product.name.clone(),
      price: product.price,
      image: product.image.clone(),
      quantity,
    }
  }
}
