//! Type display names for emitted C#.
//!
//! Renders a [`TypeRef`] the way it must appear in source text: CLR builtins use their keyword (`int`, `string`,
//! `void`), every other type is fully qualified, nested types are joined with `.`, generic instantiations list their
//! arguments, and arrays carry their rank.

use routegen_core::lang::builtins;

use crate::model::TypeRef;

/// Canonical display name of `ty` for emission.
pub fn display_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(named) => {
            if named.type_args.is_empty() {
                if let Some(keyword) = builtins::from_full_name(&ty.full_name()).and_then(builtins::keyword) {
                    return keyword.to_string();
                }
            }
            let base = match (&named.declaring_type, named.namespace.as_deref()) {
                (Some(outer), _) => format!("{}.{}", display_name(outer), named.name),
                (None, Some(ns)) if !ns.is_empty() => format!("{}.{}", ns, named.name),
                _ => named.name.clone(),
            };
            if named.type_args.is_empty() {
                base
            } else {
                let args: Vec<_> = named.type_args.iter().map(display_name).collect();
                format!("{}<{}>", base, args.join(", "))
            }
        }
        TypeRef::Array(array) => format!(
            "{}[{}]",
            display_name(&array.element),
            ",".repeat(array.rank.saturating_sub(1))
        ),
    }
}
