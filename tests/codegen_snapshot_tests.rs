//! Golden snapshot tests for codegen
//!
//! These tests generate C# from JSON handler models in `tests/codegen_snapshots/` and compare the output against
//! stored snapshots. This ensures codegen changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use routegen::model::{HandlerDescriptor, TypeRef};
use routegen::{GeneratedUnit, GeneratorConfig, generate};
use std::fs;

/// Load a handler model from the codegen_snapshots directory
fn load_model(name: &str) -> HandlerDescriptor {
    let path = format!("tests/codegen_snapshots/{}.json", name);
    let text = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read model: {}", path));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Failed to parse model {}: {}", path, e))
}

/// Generate with a pinned tool version so snapshots do not churn on releases
fn generate_unit(name: &str) -> GeneratedUnit {
    let config = GeneratorConfig::default().with_tool_version("1.0.0");
    generate(&load_model(name), &config).expect("generation failed")
}

#[test]
fn test_basic_handler_codegen() {
    let unit = generate_unit("basic_handler");
    assert!(unit.body_types.is_empty());
    insta::assert_snapshot!("basic_handler", unit.source);
}

#[test]
fn test_factory_handler_codegen() {
    let unit = generate_unit("factory_handler");
    assert_eq!(unit.body_types, vec![TypeRef::named("Shop.Orders", "Order")]);
    insta::assert_snapshot!("factory_handler", unit.source);
}

#[test]
fn test_empty_handler_codegen() {
    let unit = generate_unit("empty_handler");
    insta::assert_snapshot!("empty_handler", unit.source);
}

// ============================================================================
// Output independent of snapshot text
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    for name in ["basic_handler", "factory_handler", "empty_handler"] {
        assert_eq!(generate_unit(name), generate_unit(name), "{name} differs between runs");
    }
}

#[test]
fn test_indent_width_is_configurable() {
    let config = GeneratorConfig::default().with_indent_width(2).with_debugger_step_through(false);
    let unit = generate(&load_model("basic_handler"), &config).expect("generation failed");
    assert!(unit.source.contains("\n  public static class ItemsHandlerRouteExtensions\n"));
    assert!(unit.source.contains("\n      public System.Threading.Tasks.Task Get("));
    assert!(!unit.source.contains("DebuggerStepThrough"));
}
