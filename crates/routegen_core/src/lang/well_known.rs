//! Well-known type roles.
//!
//! The generator never compares against target type names directly. Each semantic role it cares about (the request
//! context, the form collection, the task types, the result adapter, ...) has a stable [`WellKnownRole`] id, a
//! configuration key, and a default namespace-qualified target name. [`WellKnownTypes`] is the resolved table that is
//! injected into the generator; callers may override individual entries.
//!
//! ## Examples
//! ```rust
//! use routegen_core::lang::well_known::{self, WellKnownRole, WellKnownTypes};
//!
//! assert_eq!(well_known::from_key("http_context"), Some(WellKnownRole::HttpContext));
//!
//! let table = WellKnownTypes::default().with_override(WellKnownRole::ObjectResult, "My.JsonResult");
//! assert_eq!(table.get(WellKnownRole::ObjectResult), "My.JsonResult");
//! assert_eq!(table.get(WellKnownRole::Task), "System.Threading.Tasks.Task");
//! ```

use std::collections::HashMap;

/// Stable identifier for a semantic type role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WellKnownRole {
    /// The inbound request context passed to every dispatch routine.
    HttpContext,
    /// The materialized form collection.
    FormCollection,
    /// The raw structured (JSON) value; body parameters of this type need no generated deserializer.
    RawJson,
    /// The task type (non-generic: void result; one type argument: value result).
    Task,
    /// The value-task type, same shape as [`WellKnownRole::Task`].
    ValueTask,
    /// The nullable-of-value-type wrapper.
    Nullable,
    /// Results that write themselves to the response.
    ExecutableResult,
    /// Default adapter wrapping a plain value into an executable result.
    ObjectResult,
    /// Request body reader abstraction resolved from the request services.
    RequestReader,
    /// Reader used when no request-scoped reader is registered.
    DefaultRequestReader,
    /// Delegate type produced by the activator.
    ObjectFactory,
    /// Helper that builds handler factories.
    ActivatorUtilities,
    /// Receiver of the route-registration extension method.
    EndpointRouteBuilder,
    /// Marker attribute placed on every dispatch routine.
    DebuggerStepThrough,
    Type,
    Array,
}

/// Metadata for a well-known role.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownInfo {
    pub id: WellKnownRole,
    /// Configuration key (snake_case).
    pub key: &'static str,
    /// Default namespace-qualified target name.
    pub default_name: &'static str,
    pub description: &'static str,
}

/// Registry of well-known roles.
pub const WELL_KNOWN_ROLES: &[WellKnownInfo] = &[
    info(
        WellKnownRole::HttpContext,
        "http_context",
        "Microsoft.AspNetCore.Http.HttpContext",
        "Request context bound to raw-context parameters.",
    ),
    info(
        WellKnownRole::FormCollection,
        "form_collection",
        "Microsoft.AspNetCore.Http.IFormCollection",
        "Whole-form parameter type.",
    ),
    info(
        WellKnownRole::RawJson,
        "raw_json",
        "System.Text.Json.JsonElement",
        "Structured body value read without a generated deserializer.",
    ),
    info(
        WellKnownRole::Task,
        "task",
        "System.Threading.Tasks.Task",
        "Awaitable return type; also the dispatch routine's return type.",
    ),
    info(
        WellKnownRole::ValueTask,
        "value_task",
        "System.Threading.Tasks.ValueTask",
        "Awaitable value-task return type.",
    ),
    info(
        WellKnownRole::Nullable,
        "nullable",
        "System.Nullable",
        "Nullable-of-value-type wrapper.",
    ),
    info(
        WellKnownRole::ExecutableResult,
        "executable_result",
        "Microsoft.AspNetCore.Http.IResult",
        "Result objects that execute themselves against the response.",
    ),
    info(
        WellKnownRole::ObjectResult,
        "object_result",
        "uController.ObjectResult",
        "Default result adapter for plain return values.",
    ),
    info(
        WellKnownRole::RequestReader,
        "request_reader",
        "uController.IHttpRequestReader",
        "Request-scoped body reader override.",
    ),
    info(
        WellKnownRole::DefaultRequestReader,
        "default_request_reader",
        "uController.JsonRequestReader",
        "Body reader used when no override is registered.",
    ),
    info(
        WellKnownRole::ObjectFactory,
        "object_factory",
        "Microsoft.Extensions.DependencyInjection.ObjectFactory",
        "Handler factory delegate type.",
    ),
    info(
        WellKnownRole::ActivatorUtilities,
        "activator_utilities",
        "Microsoft.Extensions.DependencyInjection.ActivatorUtilities",
        "Builds handler factories bound to the service locator.",
    ),
    info(
        WellKnownRole::EndpointRouteBuilder,
        "endpoint_route_builder",
        "Microsoft.AspNetCore.Routing.IEndpointRouteBuilder",
        "Route table receiving the registrations.",
    ),
    info(
        WellKnownRole::DebuggerStepThrough,
        "debugger_step_through",
        "System.Diagnostics.DebuggerStepThroughAttribute",
        "Debugger-transparency marker on dispatch routines.",
    ),
    info(WellKnownRole::Type, "type", "System.Type", "Runtime type handle."),
    info(WellKnownRole::Array, "array", "System.Array", "Array helpers (empty argument lists)."),
];

/// Resolve a configuration key to a [`WellKnownRole`].
pub fn from_key(key: &str) -> Option<WellKnownRole> {
    WELL_KNOWN_ROLES.iter().find(|r| r.key == key).map(|r| r.id)
}

/// Return the configuration key for a role.
pub fn key(id: WellKnownRole) -> &'static str {
    info_for(id).key
}

/// Return the metadata entry for a role.
pub fn info_for(id: WellKnownRole) -> &'static WellKnownInfo {
    WELL_KNOWN_ROLES
        .iter()
        .find(|r| r.id == id)
        .expect("well-known role info missing")
}

const fn info(
    id: WellKnownRole,
    key: &'static str,
    default_name: &'static str,
    description: &'static str,
) -> WellKnownInfo {
    WellKnownInfo {
        id,
        key,
        default_name,
        description,
    }
}

/// Resolved role → target name table.
///
/// Unset roles fall back to their registry default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellKnownTypes {
    overrides: HashMap<WellKnownRole, String>,
}

impl WellKnownTypes {
    /// Replace the target name of one role.
    pub fn with_override(mut self, role: WellKnownRole, full_name: impl Into<String>) -> Self {
        self.set(role, full_name);
        self
    }

    pub fn set(&mut self, role: WellKnownRole, full_name: impl Into<String>) {
        self.overrides.insert(role, full_name.into());
    }

    /// Namespace-qualified target name for `role`.
    pub fn get(&self, role: WellKnownRole) -> &str {
        match self.overrides.get(&role) {
            Some(name) => name.as_str(),
            None => info_for(role).default_name,
        }
    }
}
