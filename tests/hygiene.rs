//! Hygiene: coding standards checked at test time.
//!
//! Scans production sources under `src/` (sibling `_test.rs` files are
//! skipped) for patterns the crate does not allow. Every budget is zero and
//! stays zero; fix the offending site rather than raising a number.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics take the whole page script down with them.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or log instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or log instead" },
    Budget { pattern: "panic!(", max: 0, why: "return an error" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the case in the type" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "inspect or log the result" },
    Budget { pattern: ".ok()", max: 0, why: "inspect or log the error" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rust || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

fn report(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

// =============================================================
// Budgets
// =============================================================

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|file| file.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                report(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn browser_types_stay_in_browser_module() {
    let files = source_files();
    let browser_dir = Path::new("src").join("browser");
    let outside: Vec<SourceFile> = files.into_iter().filter(|file| !file.path.starts_with(&browser_dir)).collect();
    for pattern in ["web_sys", "wasm_bindgen", "gloo_"] {
        let found = hits(&outside, pattern);
        assert!(found.is_empty(), "{pattern} used outside src/browser:\n{}", report(&found));
    }
}
