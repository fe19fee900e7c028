// shopcart/server/src/web/handlers/status_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tracing::instrument;

use crate::state::AppState;

/// `GET /api/status`. `timestamp` is generated per request, UTC with millisecond precision.
#[instrument(name = "handler::status", skip(app_state))]
pub async fn status_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({
    "message": format!("Shopping cart server running on port {}", app_state.config.server_port),
    "status": 200,
    "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
  }))
}
