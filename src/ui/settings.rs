//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! The single place to tweak prompt strings, labels, glyphs, colors, and
//! spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "   ";

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_CONFIRM: &str = "Execute this command? (y/n/e for explain): ";
pub const PROMPT_CONFIRM_AFTER_EXPLAIN: &str = "Execute now? (y/n): ";
pub const PROMPT_EXPLAIN_FAILURE: &str = "Would you like an explanation? (y/n): ";

/// Token accepted as "yes" (after trim + lowercase).
pub const ACCEPT_TOKEN: &str = "y";
/// Token requesting a detailed explanation before deciding.
pub const EXPLAIN_TOKEN: &str = "e";

// ---------------------------------------------------------------------------
// Sections / labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_GENERATED_COMMAND: &str = "Generated command:";
pub const LABEL_EXPLANATION: &str = "Explanation:";
pub const LABEL_SAFETY: &str = "Safety:";
pub const LABEL_ERROR_OUTPUT: &str = "Error output:";

pub const MSG_DANGEROUS: &str = "This command may modify or delete files!";
pub const MSG_CANCELLED: &str = "Cancelled.";
pub const MSG_SUCCESS: &str = "Success!";
pub const MSG_EXECUTING: &str = "Executing...";
pub const MSG_DETAILED_EXPLANATION: &str = "Getting detailed explanation...";
pub const MSG_ANALYZING_ERROR: &str = "Analyzing error...";
pub const MSG_UNDERSTANDING: &str = "Understanding:";
pub const MSG_ANALYZING_COMMAND: &str = "Analyzing command:";

pub const GLYPH_SECTION_BULLET: &str = "•";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;
pub const PROGRESS_GENERATING: &str = "generating command";
pub const PROGRESS_EXPLAINING: &str = "waiting for explanation";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_ACTIVITY_TEXT: Color = Color::Cyan;
pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Green;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_COMMAND: Color = Color::White;
pub const COLOR_EXPLANATION: Color = Color::Blue;
pub const COLOR_PROMPT: Color = Color::Yellow;

pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Color used for a raw safety label in the presentation block.
pub fn safety_color(label: &str) -> Color {
    match label {
        "dangerous" => COLOR_ERROR,
        "safe" => COLOR_SUCCESS,
        _ => COLOR_FIELD_KEY,
    }
}
