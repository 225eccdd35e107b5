//! Whole-file generation for one handler.
//!
//! A unit is the complete C# source for one handler: the generated-file banner, the `using` preamble, an optional
//! namespace block, and the `{Handler}RouteExtensions` class holding the registration method and the private
//! `{Handler}Routes` class with one dispatch routine per method.
//!
//! ## Notes
//!
//! - The model is validated and every method planned before any text is written. A failed run returns all errors
//!   and no text.
//! - Collaborator fields (`_factory`, `_requestReader`) are only emitted when some routine refers to them.

use routegen_core::lang::well_known::WellKnownRole;
use routegen_core::strings::csharp_string_literal;

use super::capabilities::{ClrTypeSystem, TypeCapabilities};
use super::errors::{GenerateError, GenerateErrors};
use super::method::{FACTORY_FIELD, MethodGenerator, MethodPlan, READER_FIELD};
use super::types::display_name;
use super::writer::CodeWriter;
use crate::config::GeneratorConfig;
use crate::model::validate::validate;
use crate::model::{Activation, HandlerDescriptor, TypeRef};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Complete C# source text.
    pub source: String,
    /// Types read from request bodies, excluding the raw JSON type, in first-seen order.
    pub body_types: Vec<TypeRef>,
}

/// Generates the source unit for one handler.
///
/// Consumed by [`UnitGenerator::generate`]; create one per handler.
pub struct UnitGenerator<'a, C: TypeCapabilities = ClrTypeSystem> {
    handler: &'a HandlerDescriptor,
    config: &'a GeneratorConfig,
    caps: C,
}

impl<'a> UnitGenerator<'a, ClrTypeSystem> {
    /// Generator answering type questions from the configured well-known table.
    pub fn new(handler: &'a HandlerDescriptor, config: &'a GeneratorConfig) -> Self {
        Self {
            handler,
            config,
            caps: ClrTypeSystem::new(config.well_known.clone()),
        }
    }
}

impl<'a, C: TypeCapabilities> UnitGenerator<'a, C> {
    /// Replace the capability provider.
    pub fn with_capabilities<D: TypeCapabilities>(self, caps: D) -> UnitGenerator<'a, D> {
        UnitGenerator {
            handler: self.handler,
            config: self.config,
            caps,
        }
    }

    #[tracing::instrument(skip_all, fields(handler = %self.handler.name, methods = self.handler.methods.len()))]
    pub fn generate(self) -> Result<GeneratedUnit, GenerateErrors> {
        validate(self.handler)?;
        let activation = self.handler.activation().ok_or_else(|| {
            GenerateErrors::single(GenerateError::MissingConstructor {
                handler: self.handler.name.clone(),
            })
        })?;

        let methods = MethodGenerator::new(&self.caps, self.handler, activation)
            .with_debugger_step_through(self.config.debugger_step_through);

        let mut plans = Vec::with_capacity(self.handler.methods.len());
        let mut errors = Vec::new();
        for method in &self.handler.methods {
            match methods.plan(method) {
                Ok(plan) => plans.push(plan),
                Err(e) => errors.push(e),
            }
        }
        if let Some(errors) = GenerateErrors::from_vec(errors) {
            tracing::debug!(errors = errors.len(), "planning failed");
            return Err(errors);
        }

        let mut body_types: Vec<TypeRef> = Vec::new();
        for ty in plans.iter().flat_map(|p| &p.body_types) {
            if !body_types.contains(ty) {
                body_types.push(ty.clone());
            }
        }

        let mut w = CodeWriter::new(self.config.indent_width);
        self.emit_banner(&mut w);
        self.emit_usings(&mut w);
        match self.handler.namespace() {
            Some(ns) => w.simple_block(&format!("namespace {ns}"), |w| {
                self.emit_extensions(w, &methods, activation, &plans);
            }),
            None => self.emit_extensions(&mut w, &methods, activation, &plans),
        }

        tracing::debug!(body_types = body_types.len(), "generated unit");
        Ok(GeneratedUnit {
            source: w.finish(),
            body_types,
        })
    }

    fn emit_banner(&self, w: &mut CodeWriter) {
        let version = format!("//     Runtime Version:{}", self.config.tool_version);
        let lines = [
            "//------------------------------------------------------------------------------",
            "// <auto-generated>",
            "//     This code was generated by a tool.",
            version.as_str(),
            "//",
            "//     Changes to this file may cause incorrect behavior and will be lost if",
            "//     the code is regenerated.",
            "// </auto-generated>",
            "//------------------------------------------------------------------------------",
        ];
        for line in lines {
            w.writeln(line);
        }
        w.blank_line();
    }

    fn emit_usings(&self, w: &mut CodeWriter) {
        if self.config.usings.is_empty() {
            return;
        }
        for using in &self.config.usings {
            w.writeln(&format!("using {using};"));
        }
        w.blank_line();
    }

    fn emit_extensions(
        &self,
        w: &mut CodeWriter,
        methods: &MethodGenerator<'_>,
        activation: Activation,
        plans: &[MethodPlan<'_>],
    ) {
        let name = &self.handler.name;
        w.simple_block(&format!("public static class {name}RouteExtensions"), |w| {
            if !plans.is_empty() {
                self.emit_registration(w, plans);
            }
            w.simple_block(&format!("private class {name}Routes"), |w| {
                self.emit_fields(w, activation, plans);
                for plan in plans {
                    methods.emit(w, plan);
                    w.blank_line();
                    tracing::debug!(method = %plan.method.unique_name, "emitted dispatch routine");
                }
            });
        });
    }

    fn emit_registration(&self, w: &mut CodeWriter, plans: &[MethodPlan<'_>]) {
        let wk = self.caps.well_known();
        let header = format!(
            "public static void MapHttpHandler<THttpHandler>(this {} routes) where THttpHandler : {}",
            wk.get(WellKnownRole::EndpointRouteBuilder),
            display_name(&self.handler.type_ref()),
        );
        w.simple_block(&header, |w| {
            w.writeln(&format!("var handler = new {}Routes();", self.handler.name));
            for plan in plans {
                let method = plan.method;
                w.write(&format!(
                    "routes.Map({}, handler.{})",
                    csharp_string_literal(&method.route_pattern),
                    method.unique_name
                ));
                if !method.metadata.is_empty() {
                    let attributes: Vec<String> = method
                        .metadata
                        .iter()
                        .map(|attr| format!("new {}()", display_name(attr)))
                        .collect();
                    w.write_no_indent(&format!(".WithMetadata({})", attributes.join(", ")));
                }
                w.writeln_no_indent(";");
            }
        });
    }

    fn emit_fields(&self, w: &mut CodeWriter, activation: Activation, plans: &[MethodPlan<'_>]) {
        let wk = self.caps.well_known();
        if activation == Activation::Factory && !plans.is_empty() {
            w.writeln(&format!(
                "private readonly {} {FACTORY_FIELD} = {}.CreateFactory(typeof({}), {}.EmptyTypes);",
                wk.get(WellKnownRole::ObjectFactory),
                wk.get(WellKnownRole::ActivatorUtilities),
                display_name(&self.handler.type_ref()),
                wk.get(WellKnownRole::Type),
            ));
            w.blank_line();
        }
        if plans.iter().any(|plan| plan.uses_default_reader()) {
            let reader = wk.get(WellKnownRole::DefaultRequestReader);
            w.writeln(&format!("private readonly {reader} {READER_FIELD} = new {reader}();"));
            w.blank_line();
        }
    }
}
