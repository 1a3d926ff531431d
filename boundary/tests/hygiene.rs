//! Source hygiene for the boundary crate.
//!
//! Boundaries exist to contain panics, so the boundary code itself carries a
//! zero budget for panicking helpers and silently discarded results. Test
//! modules (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

/// Pattern, budget, and what it means when the budget is exceeded.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "unwrap panics on None/Err"),
    (".expect(", 0, "expect panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "unreachable panics when reached"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "result discarded without inspection"),
    (".ok()", 0, "error converted to None without inspection"),
    ("#[allow(dead_code)]", 0, "dead code kept alive"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_code_stays_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut violations = Vec::new();
    for (pattern, budget, meaning) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| (path.clone(), content.lines().filter(|line| line.contains(pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > *budget {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!("`{pattern}` ({meaning}): found {found}, budget {budget}\n{detail}"));
        }
    }
    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
