//! String-to-type conversion emission.
//!
//! Route, query, header and form values arrive as strings. A `string` target is assigned directly; any other target
//! is parsed with its static `TryParse`, falling back to `default` when the raw value is absent or does not parse.
//! The generated code swallows parse failures; lookup failures (non-nullable lookups) are not.

use routegen_core::strings::csharp_string_literal;

use super::binding::Lookup;
use super::capabilities::TypeCapabilities;
use super::types::display_name;
use super::writer::CodeWriter;
use crate::model::TypeRef;

/// What a converted local is parsed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionTarget {
    /// `string`: assigned from the lookup as-is.
    Text,
    /// A type with `TryParse`.
    Parse { ty: TypeRef },
    /// A nullable value type whose inner type has `TryParse`.
    NullableParse { ty: TypeRef, inner: TypeRef },
}

impl ConversionTarget {
    /// Classify `ty`; `None` when there is no way to parse it from a string.
    pub fn resolve(ty: &TypeRef, caps: &dyn TypeCapabilities) -> Option<Self> {
        if caps.is_string(ty) {
            return Some(ConversionTarget::Text);
        }
        if let Some(inner) = caps.nullable_inner(ty) {
            return caps.has_try_parse(inner).then(|| ConversionTarget::NullableParse {
                ty: ty.clone(),
                inner: inner.clone(),
            });
        }
        caps.has_try_parse(ty)
            .then(|| ConversionTarget::Parse { ty: ty.clone() })
    }
}

/// Emit the declaration of `local` converted from `lookup`.
pub fn emit_convert(w: &mut CodeWriter, local: &str, target: &ConversionTarget, lookup: Lookup<'_>) {
    let access = format!(
        "{}[{}]{}",
        lookup.kind.source(),
        csharp_string_literal(lookup.key),
        if lookup.kind.nullable() { "?.ToString();" } else { ".ToString();" }
    );

    match target {
        ConversionTarget::Text => {
            w.writeln(&format!("var {local} = {access}"));
        }
        ConversionTarget::Parse { ty } => {
            let ty = display_name(ty);
            w.writeln(&format!("var {local}_Value = {access}"));
            w.writeln(&format!("{ty} {local};"));
            w.simple_block(
                &format!("if ({local}_Value == null || !{ty}.TryParse({local}_Value, out {local}))"),
                |w| w.writeln(&format!("{local} = default;")),
            );
        }
        ConversionTarget::NullableParse { ty, inner } => {
            w.writeln(&format!("var {local}_Value = {access}"));
            w.writeln(&format!("{} {local};", display_name(ty)));
            w.simple_block(
                &format!(
                    "if ({local}_Value != null && {}.TryParse({local}_Value, out var {local}_Temp))",
                    display_name(inner)
                ),
                |w| w.writeln(&format!("{local} = {local}_Temp;")),
            );
            w.simple_block("else", |w| w.writeln(&format!("{local} = default;")));
        }
    }
}
