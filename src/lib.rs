//! Core library surface for the library catalog.
//!
//! The binary only wires logging and arguments to [`Session`]; everything it
//! drives lives here so tests and other front-ends can reuse it.
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;

pub use catalog::{normalize_title, Catalog, Lookup};
pub use config::{Args, ColorChoice, ShellConfig};
pub use error::{CatalogError, CatalogResult};
pub use models::{Book, BookStatus};
pub use shell::Session;
