//! Session lifecycle states and terminal outcomes.

use std::fmt;

use crate::types::{ErrorResult, ExecutionOutcome};

/// Where a session currently is in its single generate/confirm/run cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Generating,
    Presenting,
    /// Detailed explanation requested with `e` at the first prompt.
    Explaining,
    Confirming,
    Executing,
    /// Offering a diagnosis after a failed execution.
    ExplainFailure,
    Done,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Presenting => "presenting",
            Self::Explaining => "explaining",
            Self::Confirming => "confirming",
            Self::Executing => "executing",
            Self::ExplainFailure => "explain_failure",
            Self::Done => "done",
        }
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Idle, Generating)
                | (Generating, Presenting)
                | (Generating, Done)
                | (Presenting, Confirming)
                | (Confirming, Explaining)
                | (Explaining, Confirming)
                | (Confirming, Executing)
                | (Confirming, Done)
                | (Executing, ExplainFailure)
                | (Executing, Done)
                | (ExplainFailure, Done)
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The command ran; it may still have failed.
    Completed(ExecutionOutcome),
    /// The user declined at a confirmation prompt.
    Cancelled,
    /// No descriptor could be produced; nothing ran.
    GenerationFailed(ErrorResult),
}

impl SessionOutcome {
    /// Process exit code for this outcome. A command that ran and failed is
    /// still a completed session.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed(_) | Self::Cancelled => 0,
            Self::GenerationFailed(_) => 1,
        }
    }
}
