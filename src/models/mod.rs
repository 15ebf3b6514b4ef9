//! Data model layer.

pub mod builtin;
pub mod catalog;
pub mod descriptor;

pub use catalog::{Catalog, CatalogError};
pub use descriptor::{ExampleCode, ExampleConfig, ExampleDescriptor, FileEntry};
