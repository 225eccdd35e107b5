#![forbid(unsafe_code)]
//! routegen: HTTP handler dispatch generator
//!
//! routegen compiles a declarative model of one HTTP handler type (its methods, their routes, parameters, binding
//! sources and return types) into C# source for a route-registration extension plus one dispatch routine per method.
//!
//! ## Pipeline
//!
//! 1. [`model`]: the input descriptors and their structural validation
//! 2. [`backend`]: binding resolution, conversion, two-pass method generation and unit emission
//! 3. [`cli`]: a developer harness reading a JSON model and writing the generated text
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.
//!
//! ## Example
//!
//! ```rust
//! use routegen::model::HandlerDescriptor;
//! use routegen::{GeneratorConfig, generate};
//!
//! let handler = HandlerDescriptor {
//!     name: "PingHandler".to_string(),
//!     namespace: Some("Demo".to_string()),
//!     constructors: vec![0],
//!     methods: vec![],
//! };
//! let unit = generate(&handler, &GeneratorConfig::default()).unwrap();
//! assert!(unit.source.contains("public static class PingHandlerRouteExtensions"));
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod model;
pub mod version;

pub use backend::{GenerateError, GenerateErrors, GeneratedUnit, TypeCapabilities, UnitGenerator};
pub use config::{ConfigError, GeneratorConfig};

/// Generate the source unit for `handler` with the default CLR capability provider.
pub fn generate(handler: &model::HandlerDescriptor, config: &GeneratorConfig) -> Result<GeneratedUnit, GenerateErrors> {
    UnitGenerator::new(handler, config).generate()
}
