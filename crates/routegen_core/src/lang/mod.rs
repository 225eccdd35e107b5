//! Target language vocabulary registries.
//!
//! The design goal is to avoid stringly-typed checks scattered across the generator. Instead, callers work with
//! **stable IDs** (e.g. `WellKnownRole`, `ClrBuiltinId`) and look up spellings/metadata via registry tables.
//!
//! ## Examples
//! ```rust
//! use routegen_core::lang::builtins::{self, ClrBuiltinId};
//!
//! assert_eq!(builtins::from_full_name("System.Int32"), Some(ClrBuiltinId::Int32));
//! assert_eq!(builtins::keyword(ClrBuiltinId::Int32), Some("int"));
//! ```

pub mod builtins;
pub mod csharp_keywords;
pub mod well_known;
