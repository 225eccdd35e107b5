//! CLR builtin type vocabulary.
//!
//! This registry covers the runtime types the generator knows without being told: their full names, their C# keyword
//! spelling (if any), whether they are value types, and whether they expose a static
//! `TryParse(string, out T)` operation.
//!
//! ## Notes
//! - Lookup via [`from_full_name`] is **exact** (CLR names are case-sensitive).
//! - `System.String` is intentionally *not* parsable: string targets are assigned directly, never parsed.
//!
//! ## Examples
//! ```rust
//! use routegen_core::lang::builtins::{self, ClrBuiltinId};
//!
//! assert!(builtins::info_for(ClrBuiltinId::Guid).try_parse);
//! assert_eq!(builtins::keyword(ClrBuiltinId::Guid), None);
//! assert_eq!(builtins::keyword(ClrBuiltinId::Void), Some("void"));
//! ```

/// Stable identifier for CLR builtin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClrBuiltinId {
    Boolean,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    Single,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Object,
    String,
    Void,
    Guid,
    DateTime,
    DateTimeOffset,
    TimeSpan,
}

/// Metadata for a CLR builtin type.
#[derive(Debug, Clone, Copy)]
pub struct ClrBuiltinInfo {
    pub id: ClrBuiltinId,
    /// Namespace-qualified name, e.g. `System.Int32`.
    pub full_name: &'static str,
    /// C# keyword alias, e.g. `int`.
    pub keyword: Option<&'static str>,
    pub value_type: bool,
    /// Whether `T.TryParse(string, out T)` exists.
    pub try_parse: bool,
}

/// Registry of CLR builtin types.
pub const CLR_BUILTINS: &[ClrBuiltinInfo] = &[
    info(ClrBuiltinId::Boolean, "System.Boolean", Some("bool"), true, true),
    info(ClrBuiltinId::Byte, "System.Byte", Some("byte"), true, true),
    info(ClrBuiltinId::SByte, "System.SByte", Some("sbyte"), true, true),
    info(ClrBuiltinId::Char, "System.Char", Some("char"), true, true),
    info(ClrBuiltinId::Decimal, "System.Decimal", Some("decimal"), true, true),
    info(ClrBuiltinId::Double, "System.Double", Some("double"), true, true),
    info(ClrBuiltinId::Single, "System.Single", Some("float"), true, true),
    info(ClrBuiltinId::Int16, "System.Int16", Some("short"), true, true),
    info(ClrBuiltinId::Int32, "System.Int32", Some("int"), true, true),
    info(ClrBuiltinId::Int64, "System.Int64", Some("long"), true, true),
    info(ClrBuiltinId::UInt16, "System.UInt16", Some("ushort"), true, true),
    info(ClrBuiltinId::UInt32, "System.UInt32", Some("uint"), true, true),
    info(ClrBuiltinId::UInt64, "System.UInt64", Some("ulong"), true, true),
    info(ClrBuiltinId::Object, "System.Object", Some("object"), false, false),
    info(ClrBuiltinId::String, "System.String", Some("string"), false, false),
    info(ClrBuiltinId::Void, "System.Void", Some("void"), true, false),
    info(ClrBuiltinId::Guid, "System.Guid", None, true, true),
    info(ClrBuiltinId::DateTime, "System.DateTime", None, true, true),
    info(ClrBuiltinId::DateTimeOffset, "System.DateTimeOffset", None, true, true),
    info(ClrBuiltinId::TimeSpan, "System.TimeSpan", None, true, true),
];

/// Resolve a namespace-qualified type name to a [`ClrBuiltinId`].
pub fn from_full_name(full_name: &str) -> Option<ClrBuiltinId> {
    CLR_BUILTINS.iter().find(|t| t.full_name == full_name).map(|t| t.id)
}

/// Return the C# keyword alias for a builtin, if it has one.
pub fn keyword(id: ClrBuiltinId) -> Option<&'static str> {
    info_for(id).keyword
}

/// Return the namespace-qualified name for a builtin.
pub fn full_name(id: ClrBuiltinId) -> &'static str {
    info_for(id).full_name
}

/// Return the metadata entry for a builtin.
pub fn info_for(id: ClrBuiltinId) -> &'static ClrBuiltinInfo {
    CLR_BUILTINS
        .iter()
        .find(|t| t.id == id)
        .expect("clr builtin info missing")
}

const fn info(
    id: ClrBuiltinId,
    full_name: &'static str,
    keyword: Option<&'static str>,
    value_type: bool,
    try_parse: bool,
) -> ClrBuiltinInfo {
    ClrBuiltinInfo {
        id,
        full_name,
        keyword,
        value_type,
        try_parse,
    }
}
