//! Rendering contract and the default terminal renderer.
//!
//! `RenderSink` is the output contract consumed by the session controller.
//! Status text goes to stderr; output of the executed command goes to stdout
//! so it can be piped.

use crossterm::style::Stylize;

use crate::ui::progress::{set_progress_enabled, start_progress, ProgressHandle};
use crate::ui::settings;

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` is the default terminal implementation; tests substitute a
/// recording sink.
pub trait RenderSink: Send + Sync {
    /// Start a progress indicator while waiting on the backend.
    fn progress(&self, label: &str) -> ProgressHandle;
    /// Render activity/lifecycle text.
    fn activity(&self, text: &str);
    /// Render a titled section header.
    fn section(&self, title: &str);
    /// Render the generated command line.
    fn command(&self, command: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render explanation text, one indented row per line.
    fn explanation(&self, text: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render a success line.
    fn success(&self, msg: &str);
    /// Render a plain notice line.
    fn notice(&self, msg: &str);
    /// Forward captured stdout of the executed command.
    fn command_output(&self, text: &str);
    /// Render captured stderr of a failed command.
    fn error_output(&self, text: &str);
}

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Globally enable/disable live progress spinners.
    pub fn set_progress_enabled(enabled: bool) {
        set_progress_enabled(enabled);
    }
}

impl RenderSink for Renderer {
    fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label, self.color)
    }

    fn activity(&self, text: &str) {
        if self.color {
            eprintln!(
                "\r{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                text.with(settings::COLOR_ACTIVITY_TEXT).bold()
            );
        } else {
            eprintln!("\r{text}");
        }
    }

    fn section(&self, title: &str) {
        if self.color {
            eprintln!("\r{}", title.with(settings::COLOR_SECTION_TITLE).bold());
        } else {
            eprintln!("\r{title}");
        }
    }

    fn command(&self, command: &str) {
        if self.color {
            eprintln!(
                "\r{}{}",
                settings::INDENT_1,
                command.with(settings::COLOR_COMMAND).bold()
            );
        } else {
            eprintln!("\r{}{command}", settings::INDENT_1);
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "\r{}{} {}",
                settings::INDENT_1,
                key.with(settings::COLOR_FIELD_KEY),
                value.with(settings::safety_color(value)),
            );
        } else {
            eprintln!("\r{}{key} {value}", settings::INDENT_1);
        }
    }

    fn explanation(&self, text: &str) {
        for line in text.lines() {
            if self.color {
                eprintln!(
                    "\r{}{}",
                    settings::INDENT_1,
                    line.with(settings::COLOR_EXPLANATION)
                );
            } else {
                eprintln!("\r{}{line}", settings::INDENT_1);
            }
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold(),
                msg.with(settings::COLOR_WARNING)
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }

    fn success(&self, msg: &str) {
        if self.color {
            eprintln!("\r{}", msg.with(settings::COLOR_SUCCESS).bold());
        } else {
            eprintln!("\r{msg}");
        }
    }

    fn notice(&self, msg: &str) {
        eprintln!("\r{msg}");
    }

    fn command_output(&self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }

    fn error_output(&self, text: &str) {
        if self.color {
            eprintln!("\r{}", settings::LABEL_ERROR_OUTPUT.with(settings::COLOR_FIELD_KEY));
            for line in text.lines() {
                eprintln!("\r{}{}", settings::INDENT_1, line.with(settings::COLOR_ERROR));
            }
        } else {
            eprintln!("\r{}", settings::LABEL_ERROR_OUTPUT);
            for line in text.lines() {
                eprintln!("\r{}{line}", settings::INDENT_1);
            }
        }
    }
}
