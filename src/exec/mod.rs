//! Execution engine: runs a confirmed command in the host shell.
//!
//! Platform dispatch is a one-time capability selection producing an
//! [`Executor`] variant; the rest of the engine is platform-agnostic.

mod process;

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::platform::Platform;
use crate::types::ExecutionOutcome;

/// Wall-clock limit for one command.
pub const EXECUTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can run a command string to completion.
///
/// The session controller depends on this seam so tests can count or fake
/// executions without spawning processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn execute(&self, command: &str) -> ExecutionOutcome;
}

/// How a command string is handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    /// `sh -c <command>`: pipes, redirection, and globbing as the shell does.
    PosixShell,
    /// `powershell -Command <command>` with the command as one argument.
    PowerShell,
}

impl Executor {
    pub fn for_platform(platform: Platform) -> Self {
        if platform.uses_powershell() {
            Self::PowerShell
        } else {
            Self::PosixShell
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            Self::PosixShell => "sh",
            Self::PowerShell => "powershell",
        }
    }

    pub fn args(self, command: &str) -> Vec<String> {
        let flag = match self {
            Self::PosixShell => "-c",
            Self::PowerShell => "-Command",
        };
        vec![flag.to_string(), command.to_string()]
    }
}

/// Production [`CommandRunner`] backed by a real interpreter process.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    executor: Executor,
    timeout: Duration,
}

impl ShellExecutor {
    pub fn new(platform: Platform) -> Self {
        Self::with_timeout(Executor::for_platform(platform), EXECUTION_TIMEOUT)
    }

    pub fn with_timeout(executor: Executor, timeout: Duration) -> Self {
        Self { executor, timeout }
    }

    pub fn executor(&self) -> Executor {
        self.executor
    }

    /// Run `command` and capture its outcome. Never fails; see
    /// [`ExecutionOutcome::NOT_RUN`].
    pub async fn execute(&self, command: &str) -> ExecutionOutcome {
        info!(executor = ?self.executor, command, "executing command");
        process::run_process(
            self.executor.program(),
            &self.executor.args(command),
            self.timeout,
        )
        .await
    }
}

#[async_trait]
impl CommandRunner for ShellExecutor {
    async fn execute(&self, command: &str) -> ExecutionOutcome {
        ShellExecutor::execute(self, command).await
    }
}
