// shopcart/src/cart/id.rs

use chrono::Utc;

/// Source of ids for newly created cart lines.
pub trait ItemIdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Uses the current wall-clock time in milliseconds.
///
/// Two lines created within the same millisecond get the same id.
#[derive(Debug, Default, Clone, Copy)]
pub struct MillisIdGenerator;

impl ItemIdGenerator for MillisIdGenerator {
  fn next_id(&self) -> String {
    Utc::now().timestamp_millis().to_string()
  }
}
