// shopcart/server/src/web/handlers/page_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::io::ErrorKind;
use tracing::{instrument, warn};

use crate::errors::{AppError, Result};
use crate::state::AppState;

/// `GET /`: serves `index.html` out of the configured static directory.
#[instrument(name = "handler::index_page", skip(app_state))]
pub async fn index_page_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let index_path = app_state.config.static_dir.join("index.html");

  match tokio::fs::read(&index_path).await {
    Ok(body) => Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body)),
    Err(e) if e.kind() == ErrorKind::NotFound => {
      warn!(path = %index_path.display(), "index.html not found.");
      Err(AppError::NotFound("Page not found".to_string()))
    }
    Err(e) => Err(AppError::Internal(format!(
      "Failed to read {}: {}",
      index_path.display(),
      e
    ))),
  }
}
