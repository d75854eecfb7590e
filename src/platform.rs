//! Host platform identity resolved once at startup.
//!
//! The platform decides two things: the shell family named in the generation
//! prompt, and which executor variant runs the confirmed command.

use std::fmt;

/// Host shell family as presented to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows hosts; commands run through PowerShell.
    WindowsPowerShell,
    /// macOS hosts; commands run through `sh`.
    MacUnix,
    /// Linux and every other POSIX-like host.
    LinuxUnix,
}

impl Platform {
    /// Detect the platform of the running binary.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::WindowsPowerShell,
            "macos" => Self::MacUnix,
            _ => Self::LinuxUnix,
        }
    }

    /// Label embedded in the generation prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::WindowsPowerShell => "Windows PowerShell",
            Self::MacUnix => "macOS/Unix",
            Self::LinuxUnix => "Linux/Unix",
        }
    }

    /// True when commands must be dispatched through PowerShell.
    pub fn uses_powershell(self) -> bool {
        matches!(self, Self::WindowsPowerShell)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
