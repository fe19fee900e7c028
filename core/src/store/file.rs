// shopcart/src/store/file.rs

use crate::error::{StoreError, StoreResult};
use crate::models::{CartItem, Product};
use crate::store::ShopStore;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Keeps the catalog and the cart as two pretty-printed JSON files.
///
/// Writes overwrite the target file in place; there is no temp-file rename,
/// so a crash mid-write can leave a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  products_path: PathBuf,
  cart_path: PathBuf,
}

impl JsonFileStore {
  pub fn new(products_path: impl Into<PathBuf>, cart_path: impl Into<PathBuf>) -> Self {
    Self {
      products_path: products_path.into(),
      cart_path: cart_path.into(),
    }
  }

  pub fn products_path(&self) -> &Path {
    &self.products_path
  }

  pub fn cart_path(&self) -> &Path {
    &self.cart_path
  }
}

fn document_name(path: &Path) -> String {
  path.display().to_string()
}

#[instrument(name = "JsonFileStore::read", skip_all, fields(document = %path.display()), err(Display))]
async fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
  let bytes = match tokio::fs::read(path).await {
    Ok(bytes) => bytes,
    Err(e) if e.kind() == ErrorKind::NotFound => {
      debug!("Document does not exist yet, treating it as empty.");
      return Ok(Vec::new());
    }
    Err(source) => {
      return Err(StoreError::Io {
        document: document_name(path),
        source,
      })
    }
  };

  let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
    document: document_name(path),
    source,
  })?;
  debug!(records = records.len(), "Document loaded.");
  Ok(records)
}

#[instrument(name = "JsonFileStore::write", skip_all, fields(document = %path.display(), records = records.len()), err(Display))]
async fn write_document<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
  let bytes = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Encode {
    document: document_name(path),
    source,
  })?;
  tokio::fs::write(path, bytes).await.map_err(|source| StoreError::Io {
    document: document_name(path),
    source,
  })?;
  debug!("Document written.");
  Ok(())
}

#[async_trait]
impl ShopStore for JsonFileStore {
  async fn load_catalog(&self) -> StoreResult<Vec<Product>> {
    read_document(&self.products_path).await
  }

  async fn save_catalog(&self, products: &[Product]) -> StoreResult<()> {
    write_document(&self.products_path, products).await
  }

  async fn load_cart(&self) -> StoreResult<Vec<CartItem>> {
    read_document(&self.cart_path).await
  }

  async fn save_cart(&self, items: &[CartItem]) -> StoreResult<()> {
    write_document(&self.cart_path, items).await
  }
}
