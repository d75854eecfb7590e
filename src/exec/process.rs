//! Process spawning with bounded wall-clock time.

use std::future::Future;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::types::ExecutionOutcome;

/// Reported on stderr when the user interrupts a running command.
pub(super) const INTERRUPTED_MESSAGE: &str = "Command interrupted";

/// Spawn `program args...`, capture both streams, and enforce `limit`.
///
/// Never fails: launch errors, timeouts and Ctrl-C are reported as
/// [`ExecutionOutcome::NOT_RUN`] outcomes with the reason on stderr.
pub(super) async fn run_process(program: &str, args: &[String], limit: Duration) -> ExecutionOutcome {
    run_process_until(program, args, limit, interrupted()).await
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}

enum Finish {
    Exited(io::Result<ExecutionOutcome>),
    TimedOut,
    Interrupted,
}

/// Like [`run_process`], but stops the command when `cancel` resolves.
pub(super) async fn run_process_until<F>(
    program: &str,
    args: &[String],
    limit: Duration,
    cancel: F,
) -> ExecutionOutcome
where
    F: Future<Output = ()>,
{
    let mut cmd = Command::new(program);
    // If the owning future is dropped the child must not outlive it.
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    // Own process group so a timeout can take down grandchildren as well.
    // Terminal SIGINT no longer reaches the group, so `cancel` covers it.
    #[cfg(unix)]
    cmd.process_group(0);

    let started = Instant::now();
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!(program, error = %e, "failed to launch command interpreter");
            return ExecutionOutcome::not_run(format!("{program}: {e}"));
        }
    };
    debug!(program, pid = child.id(), "command started");

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let finish = tokio::select! {
        result = timeout(limit, collect_output(&mut child, stdout, stderr)) => match result {
            Ok(exited) => Finish::Exited(exited),
            Err(_) => Finish::TimedOut,
        },
        _ = cancel => Finish::Interrupted,
    };
    match finish {
        Finish::Exited(Ok(outcome)) => {
            debug!(
                exit_code = outcome.exit_code,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "command finished"
            );
            outcome
        }
        Finish::Exited(Err(e)) => {
            warn!(program, error = %e, "failed while waiting for command");
            terminate(&mut child).await;
            ExecutionOutcome::not_run(format!("{program}: {e}"))
        }
        Finish::TimedOut => {
            warn!(program, limit_secs = limit.as_secs(), "command timed out; killing it");
            terminate(&mut child).await;
            ExecutionOutcome::not_run(timeout_message(limit))
        }
        Finish::Interrupted => {
            warn!(program, "interrupted; killing command");
            terminate(&mut child).await;
            ExecutionOutcome::not_run(INTERRUPTED_MESSAGE)
        }
    }
}

/// Message reported when a command exceeds its time limit.
pub(super) fn timeout_message(limit: Duration) -> String {
    if limit.subsec_nanos() == 0 {
        format!("Command timed out after {} seconds", limit.as_secs())
    } else {
        format!("Command timed out after {:.3} seconds", limit.as_secs_f64())
    }
}

async fn collect_output<O, E>(
    child: &mut Child,
    stdout: Option<O>,
    stderr: Option<E>,
) -> io::Result<ExecutionOutcome>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    // Drain both pipes while waiting so a chatty child cannot block on a
    // full pipe buffer.
    let (out, err, status) =
        tokio::try_join!(read_pipe(stdout), read_pipe(stderr), child.wait())?;
    Ok(ExecutionOutcome {
        exit_code: exit_code(status),
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    })
}

/// Shell convention: a child killed by signal N reports 128 + N.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    ExecutionOutcome::NOT_RUN
}

async fn read_pipe<R>(pipe: Option<R>) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Kill the child (and its process group on unix) and reap it.
async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        kill_process_group(pid);
    }
    if let Err(e) = child.kill().await {
        debug!(error = %e, "child already exited before kill");
    }
}

#[cfg(unix)]
fn kill_process_group(pgid: u32) {
    let Ok(pgid) = i32::try_from(pgid) else {
        return;
    };
    // SAFETY: kill(2) takes plain integers and touches no memory of ours.
    let rc = unsafe { libc::kill(-pgid, libc::SIGKILL) };
    if rc != 0 {
        debug!(pgid, error = %io::Error::last_os_error(), "failed to signal process group");
    }
}
