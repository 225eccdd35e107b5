//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::backend::types::display_name;
use crate::config::GeneratorConfig;
use crate::model::HandlerDescriptor;
use crate::{GenerateErrors, GeneratedUnit, generate};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Inputs
// ============================================================================

/// Read and deserialize a handler model.
pub fn load_model(path: &Path) -> CliResult<HandlerDescriptor> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading model `{}`: {}", path.display(), e)))?;
    parse_model(&text).map_err(|e| CliError::failure(format!("Error in model `{}`: {}", path.display(), e)))
}

/// Deserialize a handler model from JSON text.
pub fn parse_model(text: &str) -> Result<HandlerDescriptor, serde_json::Error> {
    serde_json::from_str(text)
}

fn load_config(path: Option<&Path>) -> CliResult<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::load(path).map_err(|e| CliError::failure(format!("Error: {e}"))),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Render generation errors with their diagnostic codes and help.
pub fn render_errors(errors: GenerateErrors) -> String {
    format!("{:?}", miette::Report::new(errors))
}

fn run_generator(model: &Path, config: Option<&Path>) -> CliResult<GeneratedUnit> {
    let handler = load_model(model)?;
    let config = load_config(config)?;
    generate(&handler, &config).map_err(|errors| CliError::new(render_errors(errors), ExitCode::GENERATION_FAILED))
}

// ============================================================================
// Commands
// ============================================================================

/// Generate source for a model, writing it to `out` or stdout.
pub fn emit_model(
    model: &Path,
    config: Option<&Path>,
    out: Option<&Path>,
    body_types: Option<&Path>,
) -> CliResult<ExitCode> {
    let unit = run_generator(model, config)?;

    match out {
        Some(path) => {
            fs::write(path, &unit.source)
                .map_err(|e| CliError::failure(format!("Error writing `{}`: {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), bytes = unit.source.len(), "wrote generated source");
        }
        None => print!("{}", unit.source),
    }

    if let Some(path) = body_types {
        fs::write(path, body_type_listing(&unit))
            .map_err(|e| CliError::failure(format!("Error writing `{}`: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), count = unit.body_types.len(), "wrote body types");
    }

    Ok(ExitCode::SUCCESS)
}

/// Validate and plan a model without writing any output.
pub fn check_model(model: &Path, config: Option<&Path>) -> CliResult<ExitCode> {
    let unit = run_generator(model, config)?;
    println!("{}: ok ({} body types)", model.display(), unit.body_types.len());
    Ok(ExitCode::SUCCESS)
}

/// Body-bound type names as they appear in the generated source, one per line.
pub fn body_type_listing(unit: &GeneratedUnit) -> String {
    unit.body_types.iter().map(|ty| format!("{}\n", display_name(ty))).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::TypeRef;

    const MODEL: &str = r#"{
        "name": "Items",
        "namespace": "Shop",
        "constructors": [0],
        "methods": [
            {
                "unique_name": "Create",
                "route_pattern": "/items",
                "parameters": [
                    { "name": "item", "type": { "namespace": "Shop", "name": "Item" }, "source": { "kind": "body" } }
                ],
                "return_type": { "namespace": "System", "name": "Void" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_model() {
        let handler = parse_model(MODEL).unwrap();
        assert_eq!(handler.name, "Items");
        assert_eq!(handler.methods[0].parameters[0].ty, TypeRef::named("Shop", "Item"));
    }

    #[test]
    fn test_parse_model_rejects_unknown_source() {
        let bad = MODEL.replace(r#""kind": "body""#, r#""kind": "cookie""#);
        assert!(parse_model(&bad).is_err());
    }

    #[test]
    fn test_body_type_listing() {
        let unit = generate(&parse_model(MODEL).unwrap(), &GeneratorConfig::default()).unwrap();
        assert_eq!(body_type_listing(&unit), "Shop.Item\n");
    }

    #[test]
    fn test_body_type_listing_keeps_generic_arguments() {
        let mut handler = parse_model(MODEL).unwrap();
        let list = |item: &str| {
            TypeRef::named("System.Collections.Generic", "List").with_args(vec![TypeRef::named("Shop", item)])
        };
        handler.methods[0].parameters[0].ty = list("Order");
        let mut second = handler.methods[0].parameters[0].clone();
        second.name = "items".to_string();
        second.ty = list("Item");
        handler.methods[0].parameters.push(second);

        let unit = generate(&handler, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            body_type_listing(&unit),
            "System.Collections.Generic.List<Shop.Order>\nSystem.Collections.Generic.List<Shop.Item>\n"
        );
    }

    #[test]
    fn test_render_errors_mentions_every_fault() {
        let mut handler = parse_model(MODEL).unwrap();
        handler.constructors.clear();
        handler.methods[0].unique_name = "class".to_string();
        let errors = generate(&handler, &GeneratorConfig::default()).unwrap_err();
        let rendered = render_errors(errors);
        assert!(rendered.contains("declares no constructors"));
        assert!(rendered.contains("`class`"));
    }

    #[test]
    fn test_missing_model_file() {
        let err = load_model(Path::new("/nonexistent/model.json")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Error reading model"));
    }
}
