//! HTTP handlers for the proxy server

pub mod health;
pub mod records;

pub use health::health_check;
pub use records::{list_records, method_not_allowed, mutate_records};
