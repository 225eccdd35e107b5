//! Provide the canonical target vocabulary for the routegen dispatch generator.
//!
//! This crate is intentionally small and dependency-free. It holds the closed sets the generator consults when it
//! decides how to render or bind a type:
//! - the well-known role table (request context, form collection, task types, result adapters, ...),
//! - CLR builtin types and their C# keyword spellings,
//! - C# reserved keywords, and
//! - C# literal escaping helpers.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no generator-specific types.
//! - Callers work with stable ids (e.g. [`lang::well_known::WellKnownRole`]) and look up spellings here instead of
//!   scattering string literals across the generator.

pub mod lang;
pub mod strings;
