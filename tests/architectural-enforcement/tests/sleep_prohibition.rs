//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Sends wait on
//! network I/O, never on a timer.
//! **Exceptions**: frame pacing in the TUI event loop, test code.

use architectural_enforcement::{rust_sources, FnContext, SourceFile};

struct SleepPolicy {
    dir: &'static str,
    allow_frame_limiting: bool,
}

const POLICIES: &[SleepPolicy] = &[
    SleepPolicy {
        dir: "widget/src",
        allow_frame_limiting: false,
    },
    SleepPolicy {
        dir: "tui/src",
        allow_frame_limiting: true,
    },
];

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();
    for policy in POLICIES {
        for file in rust_sources(policy.dir) {
            check_file(&file, policy, &mut violations);
        }
    }

    if !violations.is_empty() {
        eprintln!("\nSleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        eprintln!("\nACCEPTABLE sleep uses:");
        eprintln!("  - Frame tick in the TUI event loop (tokio::time::sleep(FRAME_DURATION))");
        eprintln!("  - Test code (#[test] or #[tokio::test] functions)");

        panic!(
            "\nFound {} sleep violation(s) in production code.",
            violations.len()
        );
    }
}

fn check_file(file: &SourceFile, policy: &SleepPolicy, violations: &mut Vec<String>) {
    for idx in 0..file.lines.len() {
        let code = file.code(idx);
        if !is_sleep_call(code) || file.context(idx) == FnContext::Test {
            continue;
        }

        // Blocking the executor thread is never acceptable
        if code.contains("std::thread::sleep") || code.contains("thread::sleep(") {
            violations.push(file.describe(idx, "Thread sleep"));
            continue;
        }

        if policy.allow_frame_limiting && is_frame_limiting(code) {
            continue;
        }

        violations.push(file.describe(idx, "Sleep"));
    }
}

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("sleep_until(")
}

fn is_frame_limiting(code: &str) -> bool {
    code.contains("tokio::time::sleep(FRAME_DURATION)")
}

#[test]
fn test_sleep_detection() {
    assert!(is_sleep_call("tokio::time::sleep(Duration::from_millis(5)).await;"));
    assert!(is_sleep_call("std::thread::sleep(d);"));
    assert!(!is_sleep_call("tokio::time::timeout(d, fut).await"));
    assert!(is_frame_limiting("() = tokio::time::sleep(FRAME_DURATION) => {}"));
    assert!(!is_frame_limiting("tokio::time::sleep(Duration::from_secs(1)).await"));
}
