//! Core data model shared by the inference, execution, and session layers.

use std::fmt;

/// Coarse risk label attached to a generated command.
///
/// Only used to decide whether to warn; never blocks execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Dangerous,
    Unknown,
}

impl Safety {
    /// Normalize a raw model label. Only the exact literals match.
    pub fn from_label(label: &str) -> Self {
        match label {
            "safe" => Self::Safe,
            "dangerous" => Self::Dangerous,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Dangerous => "dangerous",
            Self::Unknown => "unknown",
        }
    }
}

/// Structured interpretation of a natural-language request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    command: String,
    explanation: String,
    safety: Safety,
    /// Label exactly as the model produced it, kept for display.
    safety_label: String,
}

impl CommandDescriptor {
    pub fn new(command: String, explanation: String, safety_label: String) -> Self {
        Self {
            command,
            explanation,
            safety: Safety::from_label(&safety_label),
            safety_label,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn safety(&self) -> Safety {
        self.safety
    }

    pub fn safety_label(&self) -> &str {
        &self.safety_label
    }

    pub fn is_dangerous(&self) -> bool {
        self.safety == Safety::Dangerous
    }
}

/// Failure to obtain a descriptor for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub message: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorResult {}

/// Outcome of one generation request: exactly one of descriptor or error.
pub type Generation = Result<CommandDescriptor, ErrorResult>;

/// Captured result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Process exit code; `128 + N` for death by signal N, and
    /// [`ExecutionOutcome::NOT_RUN`] when the process could not be launched
    /// or was stopped by termo itself.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    /// Reserved exit code for "could not run / timed out".
    pub const NOT_RUN: i32 = -1;

    /// Outcome for a command that never produced an exit status.
    pub fn not_run(reason: impl Into<String>) -> Self {
        Self {
            exit_code: Self::NOT_RUN,
            stdout: String::new(),
            stderr: reason.into(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
