//! Handler model consumed by the generator.
//!
//! The model describes one handler type and the methods it exposes as HTTP endpoints. It is built by an external
//! collaborator (a metadata reader, a build task, a test) and is treated as immutable input: the generator never
//! adds to or corrects it.
//!
//! ## Notes
//! - All descriptors derive `serde` so the developer harness can read a model from JSON.
//! - Structural checks live in [`validate`]; generation refuses to start on a malformed model.

mod types;
pub mod validate;

pub use types::{ArrayType, NamedType, TypeRef};

use serde::{Deserialize, Serialize};

/// The handler type owning every generated dispatch routine in one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    /// Simple type name, e.g. `UserHandler`.
    pub name: String,
    /// `None` or empty for the global namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Parameter count of each public constructor.
    #[serde(default)]
    pub constructors: Vec<usize>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

/// How the generated code obtains a handler instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `new H()`
    Direct,
    /// Through an activator-built factory bound to the request services.
    Factory,
}

impl HandlerDescriptor {
    /// Type reference to the handler itself.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::named(self.namespace.as_deref().unwrap_or(""), &self.name)
    }

    /// Activation strategy, or `None` when no constructor information is present.
    ///
    /// A single parameterless constructor is activated directly; anything else goes through the factory.
    pub fn activation(&self) -> Option<Activation> {
        match self.constructors.as_slice() {
            [] => None,
            [0] => Some(Activation::Direct),
            _ => Some(Activation::Factory),
        }
    }

    /// Non-empty namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

/// One handler method exposed as an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Name of the generated dispatch routine; unique within the unit.
    pub unique_name: String,
    /// Name of the handler method to invoke. Defaults to `unique_name`; differs for overloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler_method: Option<String>,
    pub route_pattern: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: TypeRef,
    /// Attribute types attached to the route, in declaration order.
    #[serde(default)]
    pub metadata: Vec<TypeRef>,
}

impl MethodDescriptor {
    pub fn invoked_name(&self) -> &str {
        self.handler_method.as_deref().unwrap_or(&self.unique_name)
    }
}

/// One handler method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub source: BindingSource,
}

impl ParameterDescriptor {
    /// Generated local variable name: `arg_` followed by the name with every `_` doubled.
    pub fn local_name(&self) -> String {
        format!("arg_{}", self.name.replace('_', "__"))
    }
}

/// Where a parameter's value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingSource {
    RawContext,
    FormCollection,
    Route { key: String },
    Query { key: String },
    Header { key: String },
    Service,
    Form { key: String },
    Body,
}

impl BindingSource {
    /// Lookup key for keyed sources.
    pub fn key(&self) -> Option<&str> {
        match self {
            BindingSource::Route { key }
            | BindingSource::Query { key }
            | BindingSource::Header { key }
            | BindingSource::Form { key } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(constructors: Vec<usize>) -> HandlerDescriptor {
        HandlerDescriptor {
            name: "Orders".to_string(),
            namespace: Some("Shop".to_string()),
            constructors,
            methods: Vec::new(),
        }
    }

    // ========================================
    // Activation tests
    // ========================================

    #[test]
    fn test_single_parameterless_constructor_is_direct() {
        assert_eq!(handler(vec![0]).activation(), Some(Activation::Direct));
    }

    #[test]
    fn test_constructor_with_arguments_uses_factory() {
        assert_eq!(handler(vec![2]).activation(), Some(Activation::Factory));
    }

    #[test]
    fn test_multiple_constructors_use_factory() {
        assert_eq!(handler(vec![0, 1]).activation(), Some(Activation::Factory));
    }

    #[test]
    fn test_missing_constructor_info() {
        assert_eq!(handler(vec![]).activation(), None);
    }

    // ========================================
    // Naming tests
    // ========================================

    #[test]
    fn test_local_name_doubles_underscores() {
        let param = ParameterDescriptor {
            name: "user_id".to_string(),
            ty: TypeRef::from_full_name("System.Int32"),
            source: BindingSource::Service,
        };
        assert_eq!(param.local_name(), "arg_user__id");
    }

    #[test]
    fn test_invoked_name_defaults_to_unique_name() {
        let mut method = MethodDescriptor {
            unique_name: "Get1".to_string(),
            handler_method: None,
            route_pattern: "/".to_string(),
            parameters: Vec::new(),
            return_type: TypeRef::from_full_name("System.Void"),
            metadata: Vec::new(),
        };
        assert_eq!(method.invoked_name(), "Get1");
        method.handler_method = Some("Get".to_string());
        assert_eq!(method.invoked_name(), "Get");
    }

    #[test]
    fn test_empty_namespace_is_global() {
        let mut h = handler(vec![0]);
        h.namespace = Some(String::new());
        assert_eq!(h.namespace(), None);
        assert_eq!(h.type_ref().full_name(), "Orders");
    }

    // ========================================
    // Serde tests
    // ========================================

    #[test]
    fn test_binding_source_json_shape() {
        let source: BindingSource = serde_json::from_str(r#"{ "kind": "route", "key": "id" }"#).unwrap();
        assert_eq!(source, BindingSource::Route { key: "id".to_string() });
        let source: BindingSource = serde_json::from_str(r#"{ "kind": "raw_context" }"#).unwrap();
        assert_eq!(source, BindingSource::RawContext);
        assert_eq!(source.key(), None);
    }
}
