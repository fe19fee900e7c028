// shopcart/src/cart/mod.rs

//! The shared cart: pure line-item operations, id generation, and the
//! service that persists the result.

pub mod id;
pub mod ops;
pub mod service;
