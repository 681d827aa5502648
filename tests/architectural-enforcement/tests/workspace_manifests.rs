//! Integration Test: Workspace Manifests
//!
//! **Policy**: build profiles live in the root manifest. Cargo ignores
//! `[profile.*]` tables in member manifests.

use std::fs;

use architectural_enforcement::workspace_root;

const MEMBERS: &[&str] = &["widget", "tui", "tests/architectural-enforcement"];

fn has_profile_table(manifest: &str) -> bool {
    manifest
        .lines()
        .any(|line| line.trim_start().starts_with("[profile."))
}

#[test]
fn test_members_declare_no_profiles() {
    for member in MEMBERS {
        let path = workspace_root().join(member).join("Cargo.toml");
        let manifest = fs::read_to_string(&path).expect("member manifest should be readable");
        assert!(
            !has_profile_table(&manifest),
            "{} declares a profile; move it to the root Cargo.toml",
            path.display()
        );
    }
}

#[test]
fn test_root_declares_release_profile() {
    let manifest = fs::read_to_string(workspace_root().join("Cargo.toml"))
        .expect("root manifest should be readable");
    assert!(manifest.contains("[profile.release]"));
}
