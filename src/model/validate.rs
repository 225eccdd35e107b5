//! Structural checks on a handler model.
//!
//! Validation runs before any planning and reports every malformation it finds, not just the first. A model that
//! passes is guaranteed to produce well-formed identifiers in the emitted text; binding and conversion problems are
//! left to planning, which has the type capabilities to judge them.

use std::collections::HashSet;

use routegen_core::lang::csharp_keywords::{is_identifier, is_identifier_shape};

use super::HandlerDescriptor;
use crate::backend::GenerateError;
use crate::backend::GenerateErrors;

/// Check `handler` for malformed names and missing constructor information.
///
/// Parameter names are judged by the local they become (`arg_<name>`), so keywords and non-ASCII letters are fine.
pub fn validate(handler: &HandlerDescriptor) -> Result<(), GenerateErrors> {
    let mut errors = Vec::new();
    let name = &handler.name;

    if !is_identifier(name) {
        errors.push(GenerateError::InvalidHandlerName { handler: name.clone() });
    }
    if handler.activation().is_none() {
        errors.push(GenerateError::MissingConstructor { handler: name.clone() });
    }

    let mut seen = HashSet::new();
    for method in &handler.methods {
        let unique = &method.unique_name;
        if unique.is_empty() {
            errors.push(GenerateError::EmptyMethodName { handler: name.clone() });
            continue;
        }
        if !is_identifier(unique) {
            errors.push(GenerateError::InvalidMethodName {
                handler: name.clone(),
                method: unique.clone(),
            });
        } else if !seen.insert(unique.as_str()) {
            errors.push(GenerateError::DuplicateMethodName {
                handler: name.clone(),
                method: unique.clone(),
            });
        }

        let invoked = method.invoked_name();
        if invoked != unique && !is_identifier(invoked) {
            errors.push(GenerateError::InvalidMethodName {
                handler: name.clone(),
                method: invoked.to_string(),
            });
        }

        let mut params = HashSet::new();
        for param in &method.parameters {
            if param.name.is_empty() || !is_identifier_shape(&param.local_name()) {
                errors.push(GenerateError::InvalidParameterName {
                    handler: name.clone(),
                    method: unique.clone(),
                    parameter: param.name.clone(),
                });
            } else if !params.insert(param.name.as_str()) {
                errors.push(GenerateError::DuplicateParameterName {
                    handler: name.clone(),
                    method: unique.clone(),
                    parameter: param.name.clone(),
                });
            }
        }
    }

    match GenerateErrors::from_vec(errors) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}
