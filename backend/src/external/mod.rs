//! External service integrations

pub mod script;

pub use script::ScriptClient;
