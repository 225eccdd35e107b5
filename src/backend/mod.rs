//! routegen backend
//!
//! This module turns a validated handler model into C# dispatch source.
//!
//! The pipeline is:
//! 1. Validate the model (`model::validate`)
//! 2. Plan every method: bindings, conversions, return shape, suspension (`method`)
//! 3. Emit the unit: banner, usings, namespace, extension class, routes class (`unit`)
//!
//! ## Module Organization
//!
//! - `capabilities.rs` - Type capability queries and the CLR implementation
//! - `binding.rs` - Parameter binding strategy resolution
//! - `convert.rs` - String-to-type conversion emission
//! - `method.rs` - Two-pass dispatch routine generation
//! - `unit.rs` - Whole-file generation for one handler
//! - `types.rs` - Display names of types in emitted text
//! - `writer.rs` - Indentation-aware, block-scoped text writer
//! - `errors.rs` - Generation error types
#![deny(clippy::unwrap_used)]

pub mod binding;
pub mod capabilities;
pub mod convert;
pub mod errors;
pub mod method;
pub mod types;
pub mod unit;
pub mod writer;

pub use capabilities::{AwaitableInfo, ClrTypeSystem, TypeCapabilities};
pub use errors::{GenerateError, GenerateErrors};
pub use unit::{GeneratedUnit, UnitGenerator};
pub use writer::CodeWriter;
