// shopcart/server/src/state.rs
use crate::config::AppConfig;
use shopcart::{CartService, Catalog, ShopStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub cart: CartService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ShopStore>, config: Arc<AppConfig>) -> Self {
    Self {
      catalog: Catalog::new(store.clone()),
      cart: CartService::new(store),
      config,
    }
  }
}
