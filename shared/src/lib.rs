//! Shared types and logic for the Compliance Certificate Dashboard
//!
//! This crate contains the domain model and the pure computations shared
//! between the backend, the browser frontend (via WASM), and tests: status
//! classification, label normalization, filtering, and the record store
//! state machine.

pub mod dashboard;
pub mod models;
pub mod status;
pub mod store;
pub mod validation;

pub use dashboard::*;
pub use models::*;
pub use status::*;
pub use store::*;
pub use validation::*;
