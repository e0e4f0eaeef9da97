//! Token tables loaded from JSON, implementing [`boxstyle_core::TokenSource`].

pub mod error;
pub mod loader;
pub mod tables;

pub use error::ConfigError;
pub use loader::load_from_json;
pub use tables::TokenTables;
