use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use routegen_core::lang::builtins::CLR_BUILTINS;
use routegen_core::lang::well_known::WELL_KNOWN_ROLES;

/// Guardrail against hard-coding target type names in generator sources.
///
/// Framework and builtin type names must come from the `routegen_core::lang` registries (and, for framework types,
/// through the injectable `WellKnownTypes` table), so a renamed or relocated framework type is a configuration
/// change rather than a code change. This scans for any quoted occurrence of a registered name.
///
/// Notes:
/// - We allow occurrences in `crates/routegen_core/src/lang/**` (registries themselves) and in tests/fixtures.
/// - Everything after the first `#[cfg(test)]` line of a file is treated as test code.
/// - This is not meant to be perfect; it's meant to catch "oops I inlined a type name".
#[test]
fn no_hard_coded_target_type_names_in_rust_sources() {
    let root = repo_root();
    let spellings = registered_names();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found hard-coded target type names. Prefer routegen_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn registered_names_are_nonempty() {
    assert!(registered_names().len() >= WELL_KNOWN_ROLES.len());
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn registered_names() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();
    for role in WELL_KNOWN_ROLES {
        set.insert(role.default_name);
    }
    for builtin in CLR_BUILTINS {
        set.insert(builtin.full_name);
    }
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the names; allow them.
    if rel.starts_with("crates/routegen_core/src/lang/") {
        return true;
    }
    // Tests can mention names directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }
    spellings.iter().any(|s| line.contains(&format!("\"{s}\"")))
}
