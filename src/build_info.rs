//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or "unknown" outside a git checkout.
pub const GIT_COMMIT: &str = env!("TERMO_BUILD_GIT_HASH");

/// UTC build time.
pub const BUILD_TIMESTAMP: &str = env!("TERMO_BUILD_TIMESTAMP");

/// Cargo profile (`debug` / `release`).
pub const BUILD_PROFILE: &str = env!("TERMO_BUILD_PROFILE");

/// Version block rendered by `termo --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("TERMO_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("TERMO_BUILD_TIMESTAMP"),
    " (",
    env!("TERMO_BUILD_PROFILE"),
    ")"
);
