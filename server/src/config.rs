// shopcart/server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // The two JSON documents backing the shop
  pub products_file: PathBuf,
  pub cart_file: PathBuf,

  // Directory holding index.html for GET /
  pub static_dir: PathBuf,

  // Write a starter catalog on startup when the catalog is empty
  pub seed_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("SERVER_PORT", "3001")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let products_file = PathBuf::from(get_or("PRODUCTS_FILE", "./products.json"));
    let cart_file = PathBuf::from(get_or("CART_FILE", "./cart.json"));
    let static_dir = PathBuf::from(get_or("STATIC_DIR", "./public"));

    let seed_catalog = get_or("SEED_CATALOG", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(
      products_file = %products_file.display(),
      cart_file = %cart_file.display(),
      "Document locations"
    );

    Ok(Self {
      server_host,
      server_port,
      products_file,
      cart_file,
      static_dir,
      seed_catalog,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
