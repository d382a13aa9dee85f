//! Architectural Enforcement
//!
//! Source-scanning helpers shared by the enforcement tests in `tests/`.
//! The tests read production sources as text and reject patterns the
//! editor must not ship: sleep-based polling, blocking I/O inside async
//! code, and panicking shortcuts.

use std::fs;
use std::path::{Path, PathBuf};

/// Production source directories, relative to the workspace root
pub const PRODUCTION_DIRS: &[&str] = &["editor/core/src", "editor/client/src"];

/// Workspace root, resolved from this crate's manifest directory
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// One production source file, cut off at its test module
pub struct SourceFile {
    /// Path relative to the workspace root
    pub path: PathBuf,
    /// Lines up to (not including) the first `#[cfg(test)]`
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Code part of a line, with any `//` comment removed
    ///
    /// A `//` inside a string literal (a URL, say) is not a comment. The
    /// `'"'` char literal is skipped so it does not open a string.
    #[must_use]
    pub fn code(line: &str) -> &str {
        let bytes = line.as_bytes();
        let mut in_string = false;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if in_string => i += 1,
                b'"' => in_string = !in_string,
                b'\'' if !in_string && bytes[i..].starts_with(b"'\"'") => i += 2,
                b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
                _ => {}
            }
            i += 1;
        }
        line
    }
}

/// Load every `.rs` file under the production directories
#[must_use]
pub fn production_sources() -> Vec<SourceFile> {
    let root = workspace_root();
    let mut sources = Vec::new();

    for dir in PRODUCTION_DIRS {
        let path = root.join(dir);
        if !path.exists() {
            continue;
        }

        for entry in walkdir::WalkDir::new(&path)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) != Some("rs") {
                continue;
            }
            let Ok(content) = fs::read_to_string(entry.path()) else {
                continue;
            };
            let lines = content
                .lines()
                .take_while(|l| !l.trim_start().starts_with("#[cfg(test)]"))
                .map(str::to_string)
                .collect();
            let relative = entry
                .path()
                .strip_prefix(&root)
                .unwrap_or(entry.path())
                .to_path_buf();
            sources.push(SourceFile {
                path: relative,
                lines,
            });
        }
    }

    sources
}

/// Whether `line` opens a function definition, and if so whether it is async
#[must_use]
pub fn fn_header(line: &str) -> Option<bool> {
    let trimmed = line.trim_start();
    let rest = trimmed
        .strip_prefix("pub(crate) ")
        .or_else(|| trimmed.strip_prefix("pub "))
        .unwrap_or(trimmed);
    if rest.starts_with("fn ") {
        Some(false)
    } else if rest.starts_with("async fn ") {
        Some(true)
    } else {
        None
    }
}

/// Whether the function enclosing `idx` is async
///
/// Scans backwards to the nearest function header. Lines outside any
/// function count as not async.
#[must_use]
pub fn in_async_fn(lines: &[String], idx: usize) -> bool {
    lines[..=idx]
        .iter()
        .rev()
        .find_map(|l| fn_header(l))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_header_detection() {
        assert_eq!(fn_header("    pub fn load() {"), Some(false));
        assert_eq!(fn_header("pub(crate) fn helper() {"), Some(false));
        assert_eq!(fn_header("    async fn connect(&mut self) {"), Some(true));
        assert_eq!(fn_header("pub async fn run_session<T>("), Some(true));
        assert_eq!(fn_header("let f = 1;"), None);
    }

    #[test]
    fn test_async_scope_detection() {
        let lines: Vec<String> = [
            "pub fn load() {",
            "    std::fs::read_to_string(p)",
            "}",
            "async fn run() {",
            "    work().await;",
            "}",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

        assert!(!in_async_fn(&lines, 1));
        assert!(in_async_fn(&lines, 4));
    }

    #[test]
    fn test_sources_are_found() {
        let sources = production_sources();
        assert!(sources
            .iter()
            .any(|s| s.path.ends_with("editor/core/src/lib.rs")));
        assert!(sources
            .iter()
            .any(|s| s.path.ends_with("editor/client/src/main.rs")));
    }

    #[test]
    fn test_code_strips_comments() {
        assert_eq!(SourceFile::code("let a = 1; // sleep(1)"), "let a = 1; ");
        assert_eq!(SourceFile::code("/// docs"), "");
    }

    #[test]
    fn test_code_keeps_slashes_inside_strings() {
        let line = r#"let u = "http://canvas.local"; std::thread::sleep(d); // why"#;
        assert_eq!(
            SourceFile::code(line),
            r#"let u = "http://canvas.local"; std::thread::sleep(d); "#
        );

        let escaped = r#"let s = "a\"//b"; x.unwrap(); // note"#;
        assert_eq!(SourceFile::code(escaped), r#"let s = "a\"//b"; x.unwrap(); "#);

        let quote = r#"let q = '"'; // "//"#;
        assert_eq!(SourceFile::code(quote), r#"let q = '"'; "#);
    }
}
