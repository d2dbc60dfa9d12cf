//! Domain models for the Compliance Certificate Dashboard

pub mod certificate;

pub use certificate::*;
