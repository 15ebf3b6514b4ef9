//! runpad - headless live-code playground kernel
//!
//! Module structure:
//! - models: data model (ExampleDescriptor, ExampleCode, Catalog)
//! - kernel: headless core (state/action/effect/store)
//! - logging: tracing bootstrap for embedding hosts

pub mod kernel;
pub mod logging;
pub mod models;
