// shopcart/src/lib.rs

//! Shopcart: a product catalog and a single shared shopping cart, both kept
//! as JSON documents.
//!
//! The crate is split the same way requests flow through it:
//!  - `models` holds the `Product` and `CartItem` records exactly as they are persisted.
//!  - `store` defines the `ShopStore` trait plus a JSON-file and an in-memory backend.
//!  - `catalog` reads products out of a store.
//!  - `cart` holds the pure line-item transformations and the `CartService`
//!    that loads, mutates and saves the cart document under a writer lock.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod models;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::cart::id::{ItemIdGenerator, MillisIdGenerator};
pub use crate::cart::service::{AddItem, CartService};
pub use crate::catalog::Catalog;
pub use crate::error::{CartError, CartResult, StoreError, StoreResult};
pub use crate::models::{CartItem, Product};
pub use crate::store::file::JsonFileStore;
pub use crate::store::memory::MemoryStore;
pub use crate::store::ShopStore;

/*
    Request flow:
    1. Pick a backend: `JsonFileStore::new(products_path, cart_path)` or `MemoryStore::default()`.
    2. Wrap it in an `Arc<dyn ShopStore>` and hand clones to `Catalog::new` and `CartService::new`.
    3. Reads (`Catalog::list`, `CartService::list`) never fail; storage faults are logged
       and reported as empty.
    4. Mutations return `CartResult<_>` and always persist the whole cart before returning.
*/
