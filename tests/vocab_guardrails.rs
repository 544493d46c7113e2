use std::fs;
use std::path::{Path, PathBuf};

use aster_core::lang::keywords;

/// Guardrail against hard-coding canonical keyword spellings.
///
/// Stages must emit canonical keywords through `aster_core::lang::keywords` (e.g. `keywords::as_str(TokenKind::Let)`)
/// so the registry stays the single source of truth. This scans non-test Rust code for string literals that are
/// exactly a canonical spelling, such as `"Return"`.
///
/// Notes:
/// - `crates/aster_core/src/lang/**` (the registry itself) and the built-in lexicon tables are allowed.
/// - Scanning of a file stops at its first `#[cfg(test)]`; unit tests may spell keywords out.
#[test]
fn no_hard_coded_canonical_keywords_in_rust_sources() {
    let root = repo_root();
    let spellings: Vec<&'static str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found hard-coded canonical keywords. Use aster_core::lang::keywords instead.\n\n");
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

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/");
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/aster_core/src/lang/") || rel == "crates/aster_core/src/lexicon/builtin.rs" {
        return true;
    }
    // Integration tests can mention spellings directly.
    rel.contains("/tests/") || rel.starts_with("tests/")
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
