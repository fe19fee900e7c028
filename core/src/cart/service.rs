// shopcart/src/cart/service.rs

//! Loads, mutates and persists the shared cart document.

use crate::cart::id::{ItemIdGenerator, MillisIdGenerator};
use crate::cart::ops::{self, AddOutcome, QuantityChange};
use crate::catalog::Catalog;
use crate::error::{CartError, CartResult};
use crate::models::CartItem;
use crate::store::ShopStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Request to put a product into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
  pub product_id: String,
  pub quantity: i64,
}

impl AddItem {
  /// One unit of `product_id`.
  pub fn new(product_id: impl Into<String>) -> Self {
    Self {
      product_id: product_id.into(),
      quantity: 1,
    }
  }

  pub fn with_quantity(mut self, quantity: i64) -> Self {
    self.quantity = quantity;
    self
  }
}

/// Every mutation runs load -> transform -> save while holding `writer`, so
/// two requests in this process cannot overwrite each other's changes.
/// Separate processes sharing one cart document still race.
#[derive(Clone)]
pub struct CartService {
  store: Arc<dyn ShopStore>,
  catalog: Catalog,
  ids: Arc<dyn ItemIdGenerator>,
  writer: Arc<Mutex<()>>,
}

impl CartService {
  pub fn new(store: Arc<dyn ShopStore>) -> Self {
    Self {
      catalog: Catalog::new(store.clone()),
      store,
      ids: Arc::new(MillisIdGenerator),
      writer: Arc::new(Mutex::new(())),
    }
  }

  pub fn with_id_generator(mut self, ids: Arc<dyn ItemIdGenerator>) -> Self {
    self.ids = ids;
    self
  }

  /// The cart in document order. An unreadable cart is logged and reported as empty.
  #[instrument(name = "cart::list", skip(self))]
  pub async fn list(&self) -> Vec<CartItem> {
    match self.store.load_cart().await {
      Ok(items) => {
        debug!("Cart holds {} lines.", items.len());
        items
      }
      Err(e) => {
        warn!(error = %e, "Cart unreadable, listing it as empty.");
        Vec::new()
      }
    }
  }

  /// Adds a product, merging into its existing line if there is one.
  /// Returns the whole cart as saved.
  #[instrument(
    name = "cart::add",
    skip(self, request),
    fields(product_id = %request.product_id, quantity = request.quantity),
    err(Display)
  )]
  pub async fn add(&self, request: AddItem) -> CartResult<Vec<CartItem>> {
    let product = self
      .catalog
      .find(&request.product_id)
      .await?
      .ok_or_else(|| CartError::ProductNotFound {
        product_id: request.product_id.clone(),
      })?;

    let _guard = self.writer.lock().await;
    let mut cart = self.store.load_cart().await?;
    let outcome = ops::add_line(&mut cart, &product, request.quantity, self.ids.as_ref())?;
    self.store.save_cart(&cart).await?;

    match outcome {
      AddOutcome::Merged => info!("Merged into existing cart line."),
      AddOutcome::Appended => info!("Appended new cart line."),
    }
    Ok(cart)
  }

  /// Sets the quantity of one line. Zero or less removes the line.
  /// Returns the whole cart as saved.
  #[instrument(name = "cart::update_quantity", skip(self), err(Display))]
  pub async fn update_quantity(&self, item_id: &str, quantity: i64) -> CartResult<Vec<CartItem>> {
    let _guard = self.writer.lock().await;
    let mut cart = self.store.load_cart().await?;
    let change = ops::set_quantity(&mut cart, item_id, quantity).ok_or_else(|| CartError::ItemNotFound {
      item_id: item_id.to_string(),
    })?;
    self.store.save_cart(&cart).await?;

    match change {
      QuantityChange::Replaced => info!("Cart line quantity replaced."),
      QuantityChange::Removed => info!("Cart line removed by non-positive quantity."),
    }
    Ok(cart)
  }

  /// Removes one line by id.
  #[instrument(name = "cart::remove", skip(self), err(Display))]
  pub async fn remove(&self, item_id: &str) -> CartResult<()> {
    let _guard = self.writer.lock().await;
    let mut cart = self.store.load_cart().await?;
    if !ops::remove_line(&mut cart, item_id) {
      return Err(CartError::ItemNotFound {
        item_id: item_id.to_string(),
      });
    }
    self.store.save_cart(&cart).await?;
    info!("Cart line removed.");
    Ok(())
  }

  /// Empties the cart regardless of what it held.
  #[instrument(name = "cart::clear", skip(self), err(Display))]
  pub async fn clear(&self) -> CartResult<()> {
    let _guard = self.writer.lock().await;
    self.store.save_cart(&[]).await?;
    info!("Cart cleared.");
    Ok(())
  }
}
