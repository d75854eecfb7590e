//! Injects build metadata for `termo --version`.
//!
//! Each value can be pinned through the environment (reproducible builds);
//! otherwise it is probed from git/date, falling back to "unknown".

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "TERMO_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "TERMO_BUILD_TIMESTAMP";
const PROFILE_VAR: &str = "TERMO_BUILD_PROFILE";

fn main() {
    watch_git_head();

    let git_hash = pinned_or(GIT_HASH_VAR, || {
        capture("git", &["rev-parse", "--short=12", "HEAD"])
            .unwrap_or_else(|| "unknown".to_string())
    });
    let timestamp = pinned_or(TIMESTAMP_VAR, || {
        capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(unix_seconds)
    });
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env={GIT_HASH_VAR}={git_hash}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={timestamp}");
    println!("cargo:rustc-env={PROFILE_VAR}={profile}");
}

fn pinned_or(var: &str, probe: impl FnOnce() -> String) -> String {
    println!("cargo:rerun-if-env-changed={var}");
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(probe)
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(branch_ref) = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string))
    {
        println!("cargo:rerun-if-changed=.git/{branch_ref}");
    }
}

fn unix_seconds() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
