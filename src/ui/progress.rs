//! Spinner shown on stderr while a backend request is in flight.
//!
//! The spinner runs on its own OS thread so it keeps ticking while the async
//! runtime is parked on the request. Dropping the handle stops it and clears
//! the row before any further status output.

use crate::ui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

static PROGRESS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Active spinner. Stops on [`ProgressHandle::finish`] or drop.
pub struct ProgressHandle {
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl ProgressHandle {
    /// Handle that renders nothing.
    pub fn disabled() -> Self {
        Self {
            stop_tx: None,
            worker: None,
        }
    }

    pub fn finish(&mut self) {
        // Disconnecting the channel wakes the worker immediately.
        self.stop_tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Globally enable/disable live progress rendering.
pub fn set_progress_enabled(enabled: bool) {
    PROGRESS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start a spinner labelled `label`. No-op unless stderr is a terminal.
pub fn start_progress(label: &str, color: bool) -> ProgressHandle {
    if !PROGRESS_ENABLED.load(Ordering::Relaxed) || !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }

    let label = label.to_string();
    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let tick = Duration::from_millis(settings::PROGRESS_TICK_MS);

    let worker = thread::spawn(move || {
        let started = Instant::now();
        let mut err = io::stderr();
        for frame in settings::PROGRESS_FRAMES.iter().cycle() {
            let _ = write!(err, "{}", spinner_row(*frame, &label, started.elapsed(), color));
            let _ = err.flush();
            match stop_rx.recv_timeout(tick) {
                Err(RecvTimeoutError::Timeout) => continue,
                _ => break,
            }
        }
        let _ = write!(err, "{}", settings::PROGRESS_CLEAR_LINE);
        let _ = err.flush();
    });

    ProgressHandle {
        stop_tx: Some(stop_tx),
        worker: Some(worker),
    }
}

fn spinner_row(frame: char, label: &str, elapsed: Duration, color: bool) -> String {
    let secs = elapsed.as_secs_f64();
    if !color {
        return format!("{}{frame} {label} {secs:.1}s", settings::PROGRESS_CLEAR_LINE);
    }
    format!(
        "{}{} {} {}",
        settings::PROGRESS_CLEAR_LINE,
        frame.to_string().with(settings::COLOR_PROGRESS_FRAME).bold(),
        label.with(settings::COLOR_PROGRESS_LABEL),
        format!("{secs:.1}s").with(settings::COLOR_PROGRESS_ELAPSED),
    )
}
