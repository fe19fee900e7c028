// shopcart/src/cart/ops.rs

//! In-memory transformations over the cart sequence. Nothing here touches storage.

use crate::cart::id::ItemIdGenerator;
use crate::error::{CartError, CartResult};
use crate::models::{CartItem, Product};

/// What `add_line` did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
  /// An existing line for the product had its quantity increased.
  Merged,
  /// A new line was appended at the end.
  Appended,
}

/// What `set_quantity` did to the matched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
  Replaced,
  /// The new quantity was zero or negative, so the line was dropped.
  Removed,
}

/// Adds `quantity` of `product`, merging into the first line with the same product id.
///
/// The quantity is not validated; a negative value can drive a merged line below zero.
/// A merge whose sum does not fit in an `i64` fails and leaves the cart unchanged.
pub fn add_line(
  cart: &mut Vec<CartItem>,
  product: &Product,
  quantity: i64,
  ids: &dyn ItemIdGenerator,
) -> CartResult<AddOutcome> {
  if let Some(existing) = cart.iter_mut().find(|item| item.product_id == product.id) {
    existing.quantity = existing
      .quantity
      .checked_add(quantity)
      .ok_or_else(|| CartError::QuantityOverflow {
        product_id: product.id.clone(),
      })?;
    return Ok(AddOutcome::Merged);
  }
  cart.push(CartItem::from_product(ids.next_id(), product, quantity));
  Ok(AddOutcome::Appended)
}

/// Replaces the quantity of the line with `item_id`, or removes it when `quantity <= 0`.
///
/// Returns `None` when no line has that id.
pub fn set_quantity(cart: &mut Vec<CartItem>, item_id: &str, quantity: i64) -> Option<QuantityChange> {
  let index = cart.iter().position(|item| item.id == item_id)?;
  if quantity <= 0 {
    cart.remove(index);
    return Some(QuantityChange::Removed);
  }
  if let Some(item) = cart.get_mut(index) {
    item.quantity = quantity;
  }
  Some(QuantityChange::Replaced)
}

/// Drops every line with `item_id`, keeping the others in order.
///
/// Returns false when nothing matched.
pub fn remove_line(cart: &mut Vec<CartItem>, item_id: &str) -> bool {
  let before = cart.len();
  cart.retain(|item| item.id != item_id);
  cart.len() != before
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicU64, Ordering};

  struct Sequential(AtomicU64);

  impl ItemIdGenerator for Sequential {
    fn next_id(&self) -> String {
      format!("item-{}", self.0.fetch_add(1, Ordering::SeqCst))
    }
  }

  fn product(id: &str) -> Product {
    Product {
      id: id.to_string(),
      name: format!("Product {}", id),
      price: 10.0,
      image: format!("https://img.example/{}.jpg", id),
    }
  }

  fn ids() -> Sequential {
    Sequential(AtomicU64::new(1))
  }

  #[test]
  fn add_appends_then_merges_same_product() {
    let ids = ids();
    let mut cart = Vec::new();

    assert_eq!(add_line(&mut cart, &product("1"), 2, &ids).unwrap(), AddOutcome::Appended);
    assert_eq!(add_line(&mut cart, &product("1"), 5, &ids).unwrap(), AddOutcome::Merged);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 7);
    assert_eq!(cart[0].id, "item-1");
  }

  #[test]
  fn add_with_negative_quantity_is_not_floored() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("1"), 1, &ids).unwrap();
    add_line(&mut cart, &product("1"), -4, &ids).unwrap();
    assert_eq!(cart[0].quantity, -3);
  }

  #[test]
  fn add_different_products_keeps_insertion_order() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("b"), 1, &ids).unwrap();
    add_line(&mut cart, &product("a"), 1, &ids).unwrap();
    let order: Vec<_> = cart.iter().map(|i| i.product_id.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
  }

  #[test]
  fn merge_past_i64_max_fails_and_keeps_line() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("1"), i64::MAX, &ids).unwrap();
    let before = cart.clone();

    let err = add_line(&mut cart, &product("1"), 1, &ids).unwrap_err();
    assert!(matches!(err, CartError::QuantityOverflow { ref product_id } if product_id == "1"));
    assert_eq!(cart, before);

    add_line(&mut cart, &product("1"), -1, &ids).unwrap();
    assert_eq!(cart[0].quantity, i64::MAX - 1);
  }

  #[test]
  fn set_quantity_replaces_rather_than_adds() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("1"), 3, &ids).unwrap();

    assert_eq!(set_quantity(&mut cart, "item-1", 8), Some(QuantityChange::Replaced));
    assert_eq!(cart[0].quantity, 8);
  }

  #[test]
  fn set_quantity_to_zero_or_below_removes_line() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("1"), 3, &ids).unwrap();
    add_line(&mut cart, &product("2"), 3, &ids).unwrap();

    assert_eq!(set_quantity(&mut cart, "item-1", 0), Some(QuantityChange::Removed));
    assert_eq!(set_quantity(&mut cart, "item-2", -2), Some(QuantityChange::Removed));
    assert!(cart.is_empty());
  }

  #[test]
  fn set_quantity_on_unknown_id_leaves_cart_alone() {
    let ids = ids();
    let mut cart = Vec::new();
    add_line(&mut cart, &product("1"), 3, &ids).unwrap();
    let before = cart.clone();

    assert_eq!(set_quantity(&mut cart, "nope", 1), None);
    assert_eq!(cart, before);
  }

  #[test]
  fn remove_line_keeps_relative_order() {
    let ids = ids();
    let mut cart = Vec::new();
    for p in ["1", "2", "3"] {
      add_line(&mut cart, &product(p), 1, &ids).unwrap();
    }

    assert!(remove_line(&mut cart, "item-2"));
    let remaining: Vec<_> = cart.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(remaining, vec!["item-1", "item-3"]);
    assert!(!remove_line(&mut cart, "item-2"));
  }
}
