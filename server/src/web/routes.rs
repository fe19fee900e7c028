// shopcart/server/src/web/routes.rs

use actix_web::{web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, page_handlers, product_handlers, status_handlers};

// Malformed or mistyped JSON bodies come back as 400 {"error": ...}
fn json_error_handler(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid request body: {}", err)).into()
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/", web::get().to(page_handlers::index_page_handler))
    .service(
      web::scope("/api")
        .route("/status", web::get().to(status_handlers::status_handler))
        .route("/products", web::get().to(product_handlers::list_products_handler))
        .service(
          web::resource("/cart")
            .route(web::get().to(cart_handlers::get_cart_handler))
            .route(web::post().to(cart_handlers::add_to_cart_handler))
            .route(web::delete().to(cart_handlers::clear_cart_handler)),
        )
        .service(
          web::resource("/cart/{id}")
            .route(web::put().to(cart_handlers::update_cart_item_handler))
            .route(web::delete().to(cart_handlers::remove_cart_item_handler)),
        ),
    );
}
