//! Parameter binding resolution.
//!
//! Maps a parameter's declared binding source to the strategy the method generator emits. Strategies are checked in
//! a fixed precedence order; the model is expected to be unambiguous already, the order only decides the cases where
//! a parameter's *type* implies a binding (the request context, the form collection) regardless of its tag.

use routegen_core::lang::well_known::WellKnownRole;

use super::capabilities::TypeCapabilities;
use super::errors::GenerateError;
use crate::model::{BindingSource, ParameterDescriptor};

/// Name of the request-context parameter of every dispatch routine.
pub const CONTEXT: &str = "httpContext";
/// Local holding the materialized form, shared by all form-bound parameters of a method.
pub const FORM_LOCAL: &str = "formCollection";
/// Local holding the body reader, shared by all body-bound parameters of a method.
pub const READER_LOCAL: &str = "reader";

/// How a parameter's value is obtained, in precedence order.
///
/// Keys borrow from the parameter descriptor the strategy was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrategy<'p> {
    RawContext,
    FormCollection,
    /// Route, query, header or form value converted from its string form.
    Lookup(Lookup<'p>),
    Service,
    Body,
}

/// Collection a keyed lookup reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Route,
    Query,
    Header,
    Form,
}

impl LookupKind {
    /// Expression indexed by the key, e.g. `httpContext.Request.Query`.
    pub fn source(self) -> &'static str {
        match self {
            LookupKind::Route => "httpContext.Request.RouteValues",
            LookupKind::Query => "httpContext.Request.Query",
            LookupKind::Header => "httpContext.Request.Headers",
            LookupKind::Form => FORM_LOCAL,
        }
    }

    /// `?.` access: a missing key yields null instead of failing. Only route values are read this way.
    pub fn nullable(self) -> bool {
        self == LookupKind::Route
    }
}

/// Keyed lookup performed by a string-converting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    pub kind: LookupKind,
    pub key: &'a str,
}

impl BindingStrategy<'_> {
    /// Whether this strategy always contains an await point in the emitted code.
    ///
    /// Form lookups are excluded: only the first form-bound parameter of a method awaits the form read.
    pub fn always_suspends(&self) -> bool {
        matches!(self, BindingStrategy::FormCollection | BindingStrategy::Body)
    }
}

/// Error-context for one method being planned.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub handler: &'a str,
    pub method: &'a str,
}

impl Site<'_> {
    pub fn unresolved(&self, param: &ParameterDescriptor, reason: impl Into<String>) -> GenerateError {
        GenerateError::UnresolvedBinding {
            handler: self.handler.to_string(),
            method: self.method.to_string(),
            parameter: param.name.clone(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(&self, param: &ParameterDescriptor, ty: String) -> GenerateError {
        GenerateError::UnsupportedType {
            handler: self.handler.to_string(),
            method: self.method.to_string(),
            parameter: param.name.clone(),
            ty,
        }
    }
}

/// Select the binding strategy for `param`.
pub fn resolve<'p>(
    param: &'p ParameterDescriptor,
    caps: &dyn TypeCapabilities,
    site: Site<'_>,
) -> Result<BindingStrategy<'p>, GenerateError> {
    if caps.is_role(&param.ty, WellKnownRole::HttpContext) {
        return Ok(BindingStrategy::RawContext);
    }
    if caps.is_role(&param.ty, WellKnownRole::FormCollection) {
        return Ok(BindingStrategy::FormCollection);
    }
    if param.source.key().is_some_and(str::is_empty) {
        return Err(site.unresolved(param, "empty lookup key"));
    }

    let strategy = match &param.source {
        BindingSource::RawContext => {
            return Err(site.unresolved(
                param,
                format!(
                    "a raw-context parameter must be declared as `{}`",
                    caps.well_known().get(WellKnownRole::HttpContext)
                ),
            ));
        }
        BindingSource::FormCollection => {
            return Err(site.unresolved(
                param,
                format!(
                    "a form-collection parameter must be declared as `{}`",
                    caps.well_known().get(WellKnownRole::FormCollection)
                ),
            ));
        }
        BindingSource::Route { key } => keyed(LookupKind::Route, key),
        BindingSource::Query { key } => keyed(LookupKind::Query, key),
        BindingSource::Header { key } => keyed(LookupKind::Header, key),
        BindingSource::Service => BindingStrategy::Service,
        BindingSource::Form { key } => keyed(LookupKind::Form, key),
        BindingSource::Body => BindingStrategy::Body,
    };
    tracing::trace!(parameter = %param.name, ?strategy, "resolved binding");
    Ok(strategy)
}

fn keyed(kind: LookupKind, key: &str) -> BindingStrategy<'_> {
    BindingStrategy::Lookup(Lookup { kind, key })
}
