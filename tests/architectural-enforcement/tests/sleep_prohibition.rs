//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code in the editor MUST NOT call sleep methods.
//! Periodic work uses `tokio::time::interval`; one-shot delays wait on a
//! fixed deadline with `tokio::time::sleep_until` inside the event loop.
//! **Exceptions**: test code (everything after `#[cfg(test)]`)

use architectural_enforcement::{production_sources, SourceFile};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_sleep_violations();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }

        eprintln!("\n✅ ACCEPTABLE:");
        eprintln!("  - Periodic tasks using tokio::time::interval()");
        eprintln!("  - One-shot deadlines with tokio::time::sleep_until() in a select! loop");
        eprintln!("  - Test code");
        eprintln!("\n❌ FORBIDDEN:");
        eprintln!("  - Sleep in polling loops");
        eprintln!("  - Sleep as poor man's synchronization");
        eprintln!("  - Sleep to 'wait' for events (use async I/O!)");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

fn find_sleep_violations() -> Vec<String> {
    let mut violations = Vec::new();

    for source in production_sources() {
        for (idx, line) in source.lines.iter().enumerate() {
            if is_sleep_call(SourceFile::code(line)) {
                violations.push(format!(
                    "{}:{} - {}",
                    source.path.display(),
                    idx + 1,
                    line.trim()
                ));
            }
        }
    }

    violations
}

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("thread::sleep")
}

#[test]
fn test_sleep_detection() {
    assert!(is_sleep_call("    tokio::time::sleep(Duration::from_millis(10)).await;"));
    assert!(is_sleep_call("std::thread::sleep(d);"));
    assert!(!is_sleep_call(
        "let first = tokio::time::sleep_until(Instant::now() + delay);"
    ));
    assert!(!is_sleep_call("let mut ticker = tokio::time::interval(period);"));
}
