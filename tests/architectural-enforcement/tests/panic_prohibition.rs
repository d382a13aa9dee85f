//! Integration Test: Panic Prohibition
//!
//! **Policy**: Production code propagates errors with `?` or handles them.
//! `.unwrap()` and `.expect(..)` are allowed only in test code.
//! Infallible fallbacks (`unwrap_or`, `unwrap_or_else`, `unwrap_or_default`)
//! are fine.

use architectural_enforcement::{production_sources, SourceFile};

#[test]
fn test_no_unwrap_in_production_code() {
    let mut violations = Vec::new();

    for source in production_sources() {
        for (idx, line) in source.lines.iter().enumerate() {
            let code = SourceFile::code(line);
            if code.trim_start().starts_with("///") || code.trim_start().starts_with("//!") {
                continue;
            }
            if is_panicking_shortcut(code) {
                violations.push(format!(
                    "{}:{} - {}",
                    source.path.display(),
                    idx + 1,
                    line.trim()
                ));
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ unwrap()/expect() found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        panic!(
            "\nFound {} panicking shortcut(s) in production code.",
            violations.len()
        );
    }
}

fn is_panicking_shortcut(code: &str) -> bool {
    code.contains(".unwrap()") || code.contains(".expect(")
}

#[test]
fn test_shortcut_detection() {
    assert!(is_panicking_shortcut("let x = value.unwrap();"));
    assert!(is_panicking_shortcut("let x = value.expect(\"present\");"));
    assert!(!is_panicking_shortcut("let x = value.unwrap_or(0);"));
    assert!(!is_panicking_shortcut("let x = value.unwrap_or_else(|| 0);"));
}
