// shopcart/server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use shopcart::AddItem;
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  // Absent ids take the same 404 path as unknown ones
  pub product_id: Option<String>,
  pub quantity: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityRequestPayload {
  pub quantity: i64,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state))]
pub async fn get_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let cart = app_state.cart.list().await;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = ?req_payload.product_id, quantity = ?req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse> {
  let AddToCartRequestPayload { product_id, quantity } = req_payload.into_inner();

  let Some(product_id) = product_id else {
    warn!("Add to cart request carried no productId.");
    return Err(AppError::NotFound("Product not found".to_string()));
  };

  let request = AddItem::new(product_id).with_quantity(quantity.unwrap_or(1));
  let cart = app_state.cart.add(request).await?;

  info!("Add to cart successful. Cart now has {} lines.", cart.len());
  Ok(HttpResponse::Created().json(json!({
      "message": "Product added to cart",
      "cart": cart
  })))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, path, req_payload),
    fields(item_id = %path.as_str(), quantity = req_payload.quantity)
)]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<UpdateQuantityRequestPayload>,
) -> Result<HttpResponse> {
  let item_id = path.into_inner();
  let cart = app_state.cart.update_quantity(&item_id, req_payload.quantity).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart updated",
      "cart": cart
  })))
}

#[instrument(name = "handler::remove_cart_item", skip(app_state, path), fields(item_id = %path.as_str()))]
pub async fn remove_cart_item_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let item_id = path.into_inner();
  app_state.cart.remove(&item_id).await?;

  Ok(HttpResponse::Ok().json(json!({ "message": "Product removed from cart" })))
}

#[instrument(name = "handler::clear_cart", skip(app_state))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  app_state.cart.clear().await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Cart cleared" })))
}
