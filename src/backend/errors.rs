//! Define error types for model → C# generation.
//!
//! These errors are *generation-time* faults: the model is malformed or asks for something the generator cannot
//! express. None of them is recoverable inside a run; the caller fixes the model and regenerates.
//!
//! ## Notes
//!
//! - Every variant names the handler, and the method and parameter where one is involved, so a diagnostic can be
//!   traced back to the declaration that caused it.
//! - Runtime lookup failures inside the *generated* code are not represented here; they surface through the host.

use miette::Diagnostic;
use thiserror::Error;

/// A single generation fault.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerateError {
    #[error("`{handler}` is not a valid handler type name")]
    #[diagnostic(code(routegen::model::invalid_handler_name))]
    InvalidHandlerName { handler: String },

    #[error("handler `{handler}` declares no constructors")]
    #[diagnostic(
        code(routegen::model::missing_constructor),
        help("list the parameter count of each public constructor, e.g. `\"constructors\": [0]`")
    )]
    MissingConstructor { handler: String },

    #[error("handler `{handler}`: a method has an empty generated name")]
    #[diagnostic(code(routegen::model::empty_method_name))]
    EmptyMethodName { handler: String },

    #[error("handler `{handler}`: `{method}` is not a valid C# method name")]
    #[diagnostic(code(routegen::model::invalid_method_name))]
    InvalidMethodName { handler: String, method: String },

    #[error("handler `{handler}`: generated method name `{method}` is used more than once")]
    #[diagnostic(
        code(routegen::model::duplicate_method_name),
        help("give each overload its own `unique_name` and point `handler_method` at the shared name")
    )]
    DuplicateMethodName { handler: String, method: String },

    #[error("handler `{handler}`, method `{method}`: parameter `{parameter}` is not a valid C# identifier")]
    #[diagnostic(code(routegen::model::invalid_parameter_name))]
    InvalidParameterName {
        handler: String,
        method: String,
        parameter: String,
    },

    #[error("handler `{handler}`, method `{method}`: parameter `{parameter}` is declared more than once")]
    #[diagnostic(code(routegen::model::duplicate_parameter_name))]
    DuplicateParameterName {
        handler: String,
        method: String,
        parameter: String,
    },

    #[error("handler `{handler}`, method `{method}`, parameter `{parameter}`: cannot bind ({reason})")]
    #[diagnostic(code(routegen::binding::unresolved))]
    UnresolvedBinding {
        handler: String,
        method: String,
        parameter: String,
        reason: String,
    },

    #[error("handler `{handler}`, method `{method}`, parameter `{parameter}`: `{ty}` has no TryParse operation")]
    #[diagnostic(
        code(routegen::convert::unsupported_type),
        help("bind the parameter as `string`, or mark the type `parsable` if it declares `static bool TryParse(string, out T)`")
    )]
    UnsupportedType {
        handler: String,
        method: String,
        parameter: String,
        ty: String,
    },
}

/// Collection of generation faults.
///
/// Validation reports every malformation it finds; planning stops at the first fault of a method. Either way a
/// failed run produces no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateErrors(pub Vec<GenerateError>);

impl GenerateErrors {
    pub fn single(error: GenerateError) -> Self {
        Self(vec![error])
    }

    /// `Some` if `errors` is non-empty.
    pub fn from_vec(errors: Vec<GenerateError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenerateError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&GenerateError> {
        self.0.first()
    }
}

impl std::fmt::Display for GenerateErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.len() == 1 {
            write!(f, "{}", self.0[0])
        } else {
            writeln!(f, "{} generation errors:", self.0.len())?;
            for (i, err) in self.0.iter().enumerate() {
                writeln!(f, "  {}: {}", i + 1, err)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for GenerateErrors {}

impl Diagnostic for GenerateErrors {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new("routegen::generate"))
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        if self.0.len() < 2 {
            return None;
        }
        Some(Box::new(self.0.iter().map(|e| e as &dyn Diagnostic)))
    }
}

impl From<GenerateError> for GenerateErrors {
    fn from(e: GenerateError) -> Self {
        GenerateErrors::single(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate(name: &str) -> GenerateError {
        GenerateError::DuplicateMethodName {
            handler: "Orders".to_string(),
            method: name.to_string(),
        }
    }

    #[test]
    fn test_single_error_display_is_the_error() {
        let errors = GenerateErrors::single(duplicate("Get"));
        assert_eq!(
            errors.to_string(),
            "handler `Orders`: generated method name `Get` is used more than once"
        );
    }

    #[test]
    fn test_multiple_errors_are_numbered() {
        let errors = GenerateErrors(vec![duplicate("Get"), duplicate("Put")]);
        let text = errors.to_string();
        assert!(text.starts_with("2 generation errors:\n"));
        assert!(text.contains("  1: handler `Orders`: generated method name `Get`"));
        assert!(text.contains("  2: handler `Orders`: generated method name `Put`"));
    }

    #[test]
    fn test_from_vec_empty_is_none() {
        assert!(GenerateErrors::from_vec(Vec::new()).is_none());
        assert_eq!(GenerateErrors::from_vec(vec![duplicate("Get")]).map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_related_only_for_multiple() {
        assert!(GenerateErrors::single(duplicate("Get")).related().is_none());
        let errors = GenerateErrors(vec![duplicate("Get"), duplicate("Put")]);
        assert_eq!(errors.related().map(|r| r.count()), Some(2));
    }

    #[test]
    fn test_unsupported_type_message_names_everything() {
        let err = GenerateError::UnsupportedType {
            handler: "Orders".to_string(),
            method: "Find".to_string(),
            parameter: "filter".to_string(),
            ty: "Shop.Filter".to_string(),
        };
        let text = err.to_string();
        for part in ["Orders", "Find", "filter", "Shop.Filter", "TryParse"] {
            assert!(text.contains(part), "missing {part} in {text}");
        }
    }
}
