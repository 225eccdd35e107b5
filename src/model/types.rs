//! Type references carried by the handler model.
//!
//! A [`TypeRef`] is a fully resolved reference to a target type. It is produced by whatever built the model (usually
//! a metadata reader) and is never inferred here: the generator only asks it questions ("is this the request
//! context?", "what does this await to?") through [`crate::backend::capabilities`].

use serde::{Deserialize, Serialize};

/// Reference to a target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Named(NamedType),
    Array(ArrayType),
}

/// A (possibly generic, possibly nested) named type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    /// Namespace of the outermost declaring type; `None` for the global namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Simple name without generic arity suffix.
    pub name: String,
    /// Enclosing type for nested types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<Box<TypeRef>>,
    /// Generic arguments of an instantiated generic type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_args: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub value_type: bool,
    /// Declares a static `TryParse(string, out T)` on a type outside the builtin registry.
    #[serde(default, skip_serializing_if = "is_false")]
    pub parsable: bool,
    /// Namespace-qualified names of implemented interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// Result type of a custom awaitable (a type following the awaiter pattern).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awaits: Option<Box<TypeRef>>,
}

/// A single- or multi-dimensional array type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayType {
    pub element: Box<TypeRef>,
    #[serde(default = "default_rank")]
    pub rank: usize,
}

fn default_rank() -> usize {
    1
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TypeRef {
    /// Named type in `namespace` (empty for the global namespace).
    pub fn named(namespace: &str, name: &str) -> Self {
        TypeRef::Named(NamedType {
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            name: name.to_string(),
            declaring_type: None,
            type_args: Vec::new(),
            value_type: false,
            parsable: false,
            interfaces: Vec::new(),
            awaits: None,
        })
    }

    /// Named type from a namespace-qualified name, splitting at the last `.`.
    pub fn from_full_name(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((namespace, name)) => TypeRef::named(namespace, name),
            None => TypeRef::named("", full_name),
        }
    }

    pub fn array_of(element: TypeRef, rank: usize) -> Self {
        TypeRef::Array(ArrayType {
            element: Box::new(element),
            rank: rank.max(1),
        })
    }

    /// Instantiate with generic arguments.
    pub fn with_args(self, args: Vec<TypeRef>) -> Self {
        self.map_named(|n| n.type_args = args)
    }

    /// Mark as a value type.
    pub fn value_type(self) -> Self {
        self.map_named(|n| n.value_type = true)
    }

    /// Mark as exposing `TryParse`.
    pub fn parsable(self) -> Self {
        self.map_named(|n| n.parsable = true)
    }

    pub fn implementing(self, interface: &str) -> Self {
        self.map_named(|n| n.interfaces.push(interface.to_string()))
    }

    /// Mark as a custom awaitable producing `result`.
    pub fn awaiting(self, result: TypeRef) -> Self {
        self.map_named(|n| n.awaits = Some(Box::new(result)))
    }

    /// Nest inside `outer`; the namespace moves to the outer type.
    pub fn nested_in(self, outer: TypeRef) -> Self {
        self.map_named(|n| {
            n.namespace = None;
            n.declaring_type = Some(Box::new(outer));
        })
    }

    fn map_named(mut self, f: impl FnOnce(&mut NamedType)) -> Self {
        if let TypeRef::Named(named) = &mut self {
            f(named);
        }
        self
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(named) => Some(named),
            TypeRef::Array(_) => None,
        }
    }

    /// Namespace-qualified name without generic arguments, nested types joined with `.`.
    pub fn full_name(&self) -> String {
        match self {
            TypeRef::Named(named) => {
                let prefix = match (&named.declaring_type, &named.namespace) {
                    (Some(outer), _) => Some(outer.full_name()),
                    (None, Some(ns)) if !ns.is_empty() => Some(ns.clone()),
                    _ => None,
                };
                match prefix {
                    Some(prefix) => format!("{}.{}", prefix, named.name),
                    None => named.name.clone(),
                }
            }
            TypeRef::Array(array) => format!("{}[{}]", array.element.full_name(), ",".repeat(array.rank.saturating_sub(1))),
        }
    }

    /// Whether this is the named type `full_name` instantiated with exactly `arity` generic arguments.
    pub fn is(&self, full_name: &str, arity: usize) -> bool {
        match self {
            TypeRef::Named(named) => named.type_args.len() == arity && self.full_name() == full_name,
            TypeRef::Array(_) => false,
        }
    }

    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named(named) => &named.type_args,
            TypeRef::Array(_) => &[],
        }
    }
}
