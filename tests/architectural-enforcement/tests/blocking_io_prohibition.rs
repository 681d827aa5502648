//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async code in the widget and TUI MUST NOT use blocking I/O.
//! **Required**: `tokio::fs`, `tokio::net`, async `reqwest`.
//! **Acceptable**: blocking calls in plain `fn`s (config loading runs before
//! any send is in flight) and in test code.

use architectural_enforcement::{rust_sources, FnContext, SourceFile};

/// File allowed to touch stdin/stdout while setting up the terminal
const TERMINAL_SETUP_FILE: &str = "tui/src/main.rs";

const STDIO: &str = "Blocking stdin/stdout in async";

/// Directories holding production code
const PRODUCTION_DIRS: &[&str] = &["widget/src", "tui/src"];

/// Test that async production code does not use blocking I/O
#[test]
fn test_no_blocking_io_in_async_code() {
    let violations = find_blocking_io_violations();

    if !violations.is_empty() {
        eprintln!("\nBlocking I/O calls found in async production code!\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        eprintln!("\nFORBIDDEN inside async fn:");
        eprintln!("  - std::fs::*, std::net::*");
        eprintln!("  - std::process::Command");
        eprintln!("  - reqwest::blocking::*");
        eprintln!("  - std::io::stdin() / std::io::stdout() (outside terminal setup in main)");
        eprintln!("\nUse tokio::fs, tokio::net, tokio::process or async reqwest instead.");

        panic!(
            "\nFound {} blocking I/O violation(s) in production code.",
            violations.len()
        );
    }
}

/// `reqwest::blocking` has no place anywhere outside tests
#[test]
fn test_no_blocking_http_client() {
    let mut violations = Vec::new();
    for dir in PRODUCTION_DIRS {
        for file in rust_sources(dir) {
            for idx in 0..file.lines.len() {
                if file.code(idx).contains("reqwest::blocking")
                    && file.context(idx) != FnContext::Test
                {
                    violations.push(file.describe(idx, "Blocking HTTP client"));
                }
            }
        }
    }
    assert!(violations.is_empty(), "{violations:#?}");
}

/// Find all blocking I/O calls in async production code
fn find_blocking_io_violations() -> Vec<String> {
    let mut violations = Vec::new();
    for dir in PRODUCTION_DIRS {
        for file in rust_sources(dir) {
            check_file(&file, &mut violations);
        }
    }
    violations
}

fn check_file(file: &SourceFile, violations: &mut Vec<String>) {
    for idx in 0..file.lines.len() {
        if file.context(idx) != FnContext::Async {
            continue;
        }
        let Some(what) = blocking_call(file.code(idx)) else {
            continue;
        };
        if is_terminal_setup(file, what) {
            continue;
        }
        violations.push(file.describe(idx, what));
    }
}

/// The binary's `main` owns the terminal: it checks for a TTY and hands
/// stdout to the ratatui backend before the event loop starts
fn is_terminal_setup(file: &SourceFile, what: &str) -> bool {
    what == STDIO && file.path.ends_with(TERMINAL_SETUP_FILE)
}

/// Name the blocking call on a line of code, if any
fn blocking_call(code: &str) -> Option<&'static str> {
    if code.contains("std::fs::") {
        Some("Blocking file I/O")
    } else if code.contains("std::net::") {
        Some("Blocking network I/O")
    } else if code.contains("std::process::Command") {
        Some("Blocking process I/O")
    } else if code.contains("reqwest::blocking") {
        Some("Blocking HTTP client")
    } else if code.contains("io::stdin()") || code.contains("io::stdout()") {
        Some(STDIO)
    } else {
        None
    }
}

#[test]
fn test_blocking_call_detection() {
    assert_eq!(
        blocking_call("    let s = std::fs::read_to_string(p)?;"),
        Some("Blocking file I/O")
    );
    assert_eq!(
        blocking_call("    let c = reqwest::blocking::Client::new();"),
        Some("Blocking HTTP client")
    );
    assert_eq!(blocking_call("    let s = tokio::fs::read(p).await?;"), None);
}

#[test]
fn test_stdio_detection_with_short_paths() {
    assert_eq!(
        blocking_call("    if !io::stdin().is_terminal() {"),
        Some(STDIO)
    );
    assert_eq!(blocking_call("    let out = std::io::stdout();"), Some(STDIO));
}

#[test]
fn test_terminal_setup_allowed_only_in_main() {
    let main = SourceFile {
        path: "tui/src/main.rs".into(),
        lines: vec!["    let mut stdout = io::stdout();".to_string()],
    };
    let app = SourceFile {
        path: "tui/src/app.rs".into(),
        lines: main.lines.clone(),
    };

    assert!(is_terminal_setup(&main, STDIO));
    assert!(!is_terminal_setup(&app, STDIO));
    assert!(!is_terminal_setup(&main, "Blocking file I/O"));
}
