//! Hygiene — enforces coding standards at test time
//!
//! Scans the behavior crate's production sources for antipatterns. Every
//! pattern has a budget of zero; if one must be introduced, an existing
//! occurrence has to be removed first so the budget never grows.

use std::fs;
use std::path::Path;

/// (needle, budget, what it costs us)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "crashes the page on None/Err"),
    (".expect(", 0, "crashes the page on None/Err"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "unfinished production path"),
    ("unimplemented!(", 0, "unfinished production path"),
    ("let _ =", 0, "discards an error without inspecting it"),
    (".ok()", 0, "discards an error without inspecting it"),
    ("#[allow(dead_code)]", 0, "hides unused production code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy().to_string();
            // Sibling test modules are exempt.
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn source_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (needle, budget, why) in BUDGETS {
        let mut hits = Vec::new();
        for (path, content) in &files {
            let count = content.lines().filter(|line| line.contains(needle)).count();
            if count > 0 {
                hits.push(format!("  {path}: {count}"));
            }
        }
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|l| l.contains(needle)).count())
            .sum();
        if total > *budget {
            violations.push(format!(
                "`{needle}` budget exceeded ({total} > {budget}; {why}):\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(violations.is_empty(), "\n{}", violations.join("\n\n"));
}
