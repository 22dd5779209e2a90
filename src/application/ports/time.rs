// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_date` / `updated_date` values.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
