//! Dispatch routine generation for one handler method.
//!
//! Generation runs in two passes. [`MethodGenerator::plan`] resolves every binding and conversion and classifies the
//! return type, so everything that shapes the routine's signature (notably whether it is `async`) is known before a
//! single line is written. [`MethodGenerator::emit`] then renders the plan without revisiting any decision.

use routegen_core::lang::builtins::{self, ClrBuiltinId};
use routegen_core::lang::well_known::WellKnownRole;

use super::binding::{self, BindingStrategy, CONTEXT, FORM_LOCAL, Lookup, LookupKind, READER_LOCAL, Site};
use super::capabilities::{AwaitableInfo, TypeCapabilities};
use super::convert::{ConversionTarget, emit_convert};
use super::errors::GenerateError;
use super::types::display_name;
use super::writer::CodeWriter;
use crate::model::{Activation, HandlerDescriptor, MethodDescriptor, ParameterDescriptor, TypeRef};

/// Field of the routes class holding the activator-built handler factory.
pub const FACTORY_FIELD: &str = "_factory";
/// Field of the routes class holding the fallback body reader.
pub const READER_FIELD: &str = "_requestReader";

/// How the handler method's return value is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// Plain `void`.
    Void,
    /// Awaitable that completes without a value.
    AwaitedVoid,
    /// Awaitable producing the contained type.
    AwaitedValue(TypeRef),
    /// Synchronous value.
    Value(TypeRef),
}

impl ReturnShape {
    pub fn awaits(&self) -> bool {
        matches!(self, ReturnShape::AwaitedVoid | ReturnShape::AwaitedValue(_))
    }

    /// Value bound to `result`, after awaiting if needed.
    pub fn value(&self) -> Option<&TypeRef> {
        match self {
            ReturnShape::AwaitedValue(ty) | ReturnShape::Value(ty) => Some(ty),
            ReturnShape::Void | ReturnShape::AwaitedVoid => None,
        }
    }
}

/// How the routine completes after the handler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultExecution {
    /// `result.ExecuteAsync(httpContext)`: the value writes itself.
    Execute,
    /// `new ObjectResult(result).ExecuteAsync(httpContext)`.
    Wrap,
    /// `return Task.CompletedTask;` for a synchronous routine with nothing to write.
    CompletedTask,
    /// Falls off the end of an `async` routine.
    Nothing,
}

/// One parameter, fully resolved.
#[derive(Debug, Clone)]
pub struct PlannedParameter<'m> {
    pub descriptor: &'m ParameterDescriptor,
    pub local: String,
    pub binding: PlannedBinding<'m>,
}

/// Resolved binding of one parameter together with everything its emission needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedBinding<'m> {
    RawContext,
    FormCollection,
    Service,
    Body {
        /// First body-bound parameter: obtains the reader before its own read.
        opens_reader: bool,
    },
    Lookup {
        lookup: Lookup<'m>,
        conversion: ConversionTarget,
        /// First form-bound parameter: materializes the form before its own lookup.
        reads_form: bool,
    },
}

impl PlannedParameter<'_> {
    pub fn reads_form(&self) -> bool {
        matches!(self.binding, PlannedBinding::Lookup { reads_form: true, .. })
    }

    pub fn opens_reader(&self) -> bool {
        matches!(self.binding, PlannedBinding::Body { opens_reader: true })
    }
}

/// Everything needed to emit one dispatch routine.
#[derive(Debug, Clone)]
pub struct MethodPlan<'m> {
    pub method: &'m MethodDescriptor,
    pub parameters: Vec<PlannedParameter<'m>>,
    pub returns: ReturnShape,
    pub execution: ResultExecution,
    /// Whether the routine contains an await point and is therefore `async`.
    pub suspends: bool,
    /// Body-bound types other than the raw JSON type, in first-seen order.
    pub body_types: Vec<TypeRef>,
}

impl MethodPlan<'_> {
    /// Whether the routine reads a body and so needs the fallback reader field.
    pub fn uses_default_reader(&self) -> bool {
        self.parameters.iter().any(|p| p.opens_reader())
    }
}

/// Plans and emits dispatch routines for methods of one handler.
pub struct MethodGenerator<'a> {
    caps: &'a dyn TypeCapabilities,
    handler: &'a HandlerDescriptor,
    activation: Activation,
    debugger_step_through: bool,
}

impl<'a> MethodGenerator<'a> {
    pub fn new(caps: &'a dyn TypeCapabilities, handler: &'a HandlerDescriptor, activation: Activation) -> Self {
        Self {
            caps,
            handler,
            activation,
            debugger_step_through: true,
        }
    }

    pub fn with_debugger_step_through(mut self, enabled: bool) -> Self {
        self.debugger_step_through = enabled;
        self
    }

    // ========================================
    // Pass 1: planning
    // ========================================

    /// Resolve bindings, conversions and the return shape of `method`.
    ///
    /// Stops at the first parameter that cannot be bound.
    #[tracing::instrument(skip_all, fields(method = %method.unique_name))]
    pub fn plan<'m>(&self, method: &'m MethodDescriptor) -> Result<MethodPlan<'m>, GenerateError> {
        let site = Site {
            handler: &self.handler.name,
            method: &method.unique_name,
        };

        let mut parameters = Vec::with_capacity(method.parameters.len());
        let mut body_types: Vec<TypeRef> = Vec::new();
        let mut form_read = false;
        let mut reader_open = false;
        let mut suspends = false;

        for param in &method.parameters {
            let strategy = binding::resolve(param, self.caps, site)?;
            suspends |= strategy.always_suspends();

            let binding = match strategy {
                BindingStrategy::RawContext => PlannedBinding::RawContext,
                BindingStrategy::FormCollection => PlannedBinding::FormCollection,
                BindingStrategy::Service => PlannedBinding::Service,
                BindingStrategy::Body => {
                    if !self.caps.is_role(&param.ty, WellKnownRole::RawJson) && !body_types.contains(&param.ty) {
                        body_types.push(param.ty.clone());
                    }
                    let opens_reader = !reader_open;
                    reader_open = true;
                    PlannedBinding::Body { opens_reader }
                }
                BindingStrategy::Lookup(lookup) => {
                    let conversion = ConversionTarget::resolve(&param.ty, self.caps)
                        .ok_or_else(|| site.unsupported(param, display_name(&param.ty)))?;
                    let reads_form = lookup.kind == LookupKind::Form && !form_read;
                    form_read |= reads_form;
                    suspends |= reads_form;
                    PlannedBinding::Lookup {
                        lookup,
                        conversion,
                        reads_form,
                    }
                }
            };

            parameters.push(PlannedParameter {
                descriptor: param,
                local: param.local_name(),
                binding,
            });
        }

        let returns = self.classify_return(&method.return_type);
        suspends |= returns.awaits();

        let execution = match returns.value() {
            Some(ty) if self.caps.is_executable_result(ty) => ResultExecution::Execute,
            Some(_) => ResultExecution::Wrap,
            None if suspends => ResultExecution::Nothing,
            None => ResultExecution::CompletedTask,
        };

        tracing::debug!(suspends, ?execution, "planned dispatch routine");

        Ok(MethodPlan {
            method,
            parameters,
            returns,
            execution,
            suspends,
            body_types,
        })
    }

    fn classify_return(&self, ty: &TypeRef) -> ReturnShape {
        if self.caps.is_void(ty) {
            return ReturnShape::Void;
        }
        match self.caps.awaitable(ty) {
            Some(AwaitableInfo { result_type: None }) => ReturnShape::AwaitedVoid,
            Some(AwaitableInfo {
                result_type: Some(result),
            }) => ReturnShape::AwaitedValue(result),
            None => ReturnShape::Value(ty.clone()),
        }
    }

    // ========================================
    // Pass 2: emission
    // ========================================

    /// Emit the routine described by `plan`.
    pub fn emit(&self, w: &mut CodeWriter, plan: &MethodPlan<'_>) {
        let wk = self.caps.well_known();
        if self.debugger_step_through {
            w.writeln(&format!("[{}]", wk.get(WellKnownRole::DebuggerStepThrough)));
        }

        let header = format!(
            "public {}{} {}({} {CONTEXT})",
            if plan.suspends { "async " } else { "" },
            wk.get(WellKnownRole::Task),
            plan.method.unique_name,
            wk.get(WellKnownRole::HttpContext),
        );
        w.simple_block(&header, |w| {
            self.emit_handler_construction(w);
            for param in &plan.parameters {
                self.emit_parameter(w, param);
            }
            self.emit_invocation(w, plan);
            self.emit_execution(w, plan);
        });
    }

    fn emit_handler_construction(&self, w: &mut CodeWriter) {
        let handler = display_name(&self.handler.type_ref());
        match self.activation {
            Activation::Direct => w.writeln(&format!("var handler = new {handler}();")),
            Activation::Factory => w.writeln(&format!(
                "var handler = ({handler}){FACTORY_FIELD}({CONTEXT}.RequestServices, {}.Empty<{}>());",
                self.caps.well_known().get(WellKnownRole::Array),
                builtins::full_name(ClrBuiltinId::Object),
            )),
        }
    }

    fn emit_parameter(&self, w: &mut CodeWriter, param: &PlannedParameter<'_>) {
        let local = &param.local;
        let ty = || display_name(&param.descriptor.ty);
        match &param.binding {
            PlannedBinding::RawContext => w.writeln(&format!("var {local} = {CONTEXT};")),
            PlannedBinding::FormCollection => {
                w.writeln(&format!("var {local} = await {CONTEXT}.Request.ReadFormAsync();"));
            }
            PlannedBinding::Service => w.writeln(&format!(
                "var {local} = {CONTEXT}.RequestServices.GetRequiredService<{}>();",
                ty()
            )),
            PlannedBinding::Body { opens_reader } => {
                if *opens_reader {
                    w.writeln(&format!(
                        "var {READER_LOCAL} = {CONTEXT}.RequestServices.GetService<{}>() ?? {READER_FIELD};",
                        self.caps.well_known().get(WellKnownRole::RequestReader)
                    ));
                }
                let ty = ty();
                w.writeln(&format!(
                    "var {local} = ({ty})await {READER_LOCAL}.ReadAsync({CONTEXT}, typeof({ty}));"
                ));
            }
            PlannedBinding::Lookup {
                lookup,
                conversion,
                reads_form,
            } => {
                if *reads_form {
                    w.writeln(&format!("var {FORM_LOCAL} = await {CONTEXT}.Request.ReadFormAsync();"));
                }
                emit_convert(w, local, conversion, *lookup);
            }
        }
    }

    fn emit_invocation(&self, w: &mut CodeWriter, plan: &MethodPlan<'_>) {
        let prefix = match plan.returns {
            ReturnShape::Void => "",
            ReturnShape::AwaitedVoid => "await ",
            ReturnShape::AwaitedValue(_) => "var result = await ",
            ReturnShape::Value(_) => "var result = ",
        };
        let args = plan
            .parameters
            .iter()
            .map(|p| p.local.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        w.writeln(&format!("{prefix}handler.{}({args});", plan.method.invoked_name()));
    }

    fn emit_execution(&self, w: &mut CodeWriter, plan: &MethodPlan<'_>) {
        let keyword = if plan.suspends { "await" } else { "return" };
        match plan.execution {
            ResultExecution::Execute => w.writeln(&format!("{keyword} result.ExecuteAsync({CONTEXT});")),
            ResultExecution::Wrap => w.writeln(&format!(
                "{keyword} new {}(result).ExecuteAsync({CONTEXT});",
                self.caps.well_known().get(WellKnownRole::ObjectResult)
            )),
            ResultExecution::CompletedTask => w.writeln(&format!(
                "return {}.CompletedTask;",
                self.caps.well_known().get(WellKnownRole::Task)
            )),
            ResultExecution::Nothing => {}
        }
    }
}
