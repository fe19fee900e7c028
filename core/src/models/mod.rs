// shopcart/src/models/mod.rs

//! Records as they appear in the persisted JSON documents.

pub mod cart_item;
pub mod product;

pub use cart_item::CartItem;
pub use product::Product;
