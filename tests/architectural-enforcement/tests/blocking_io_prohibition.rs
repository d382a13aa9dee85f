//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async code in the editor MUST NOT use blocking I/O.
//! **Required**: `tokio::net` and `tokio::io` for the canvas connection.
//! **Acceptable**: blocking file reads in plain `fn`s that run before the
//! event loop starts (configuration loading), and test code.

use architectural_enforcement::{in_async_fn, production_sources, SourceFile};

/// Test that production async code does not use blocking I/O
#[test]
fn test_no_blocking_io_in_production_code() {
    let violations = find_blocking_io_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Blocking I/O calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }

        eprintln!("\n❌ FORBIDDEN blocking I/O:");
        eprintln!("  - std::net::TcpStream, std::net::TcpListener (anywhere)");
        eprintln!("  - std::fs::* inside async fn");
        eprintln!("  - std::io::stdin()/stdout() inside async fn");
        eprintln!("\n✅ REQUIRED async I/O:");
        eprintln!("  - tokio::net::TcpStream::connect().await");
        eprintln!("  - tokio::io::AsyncReadExt / AsyncWriteExt");

        panic!(
            "\nFound {} blocking I/O violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

fn find_blocking_io_violations() -> Vec<String> {
    let mut violations = Vec::new();

    for source in production_sources() {
        for (idx, line) in source.lines.iter().enumerate() {
            let code = SourceFile::code(line);
            let reason = if code.contains("std::net") {
                Some("Blocking network I/O")
            } else if in_async_fn(&source.lines, idx) && is_blocking_in_async(code) {
                Some("Blocking I/O in async fn")
            } else {
                None
            };

            if let Some(reason) = reason {
                violations.push(format!(
                    "{}:{} - {}: {}",
                    source.path.display(),
                    idx + 1,
                    reason,
                    line.trim()
                ));
            }
        }
    }

    violations
}

fn is_blocking_in_async(code: &str) -> bool {
    code.contains("std::fs::")
        || code.contains("std::io::stdin()")
        || code.contains("std::io::stdout()")
        || code.contains("std::process::Command")
}

#[test]
fn test_blocking_detection() {
    assert!(is_blocking_in_async(
        "    let contents = std::fs::read_to_string(\"file.txt\")?;"
    ));
    assert!(!is_blocking_in_async(
        "    let contents = tokio::fs::read_to_string(\"file.txt\").await?;"
    ));
}
