// shopcart/server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::Result;
use crate::state::AppState;

/// `GET /api/products`: the whole catalog as a bare array.
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let products = app_state.catalog.list().await;
  Ok(HttpResponse::Ok().json(products))
}
