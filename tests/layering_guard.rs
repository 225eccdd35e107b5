//! Layering guardrails to keep the vocabulary crate dependency-free.
//!
//! `routegen_core` holds the target vocabulary (well-known roles, CLR builtins, C# keywords) and is meant to be
//! usable from any tool that speaks the same model. This test scans its `Cargo.toml` and fails if anything appears in
//! `[dependencies]`.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/routegen_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`routegen_core` must stay dependency-free, found `{line}` in [dependencies]");
    }
}

#[test]
fn core_crate_does_not_depend_on_generator() {
    let manifest = include_str!("../crates/routegen_core/Cargo.toml");
    assert!(
        !manifest.lines().any(|l| l.trim_start().starts_with("routegen ") || l.trim_start().starts_with("routegen=")),
        "`routegen_core` must not depend on the generator crate"
    );
}
