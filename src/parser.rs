//! Turns raw model text into a [`CommandDescriptor`].
//!
//! Models are asked for a bare JSON object but routinely wrap it in code
//! fences or answer in prose. Parsing never fails: when the cleaned text is
//! not a usable JSON object, the first line is taken as the command. Only
//! that first line is authoritative in the fallback path; everything after
//! it is discarded.

use serde::Deserialize;
use tracing::debug;

use crate::types::{CommandDescriptor, Safety};

/// Explanation used when the model's answer could not be parsed.
pub const FALLBACK_EXPLANATION: &str = "Generated command";

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    command: String,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    safety: Option<String>,
}

/// Parse raw backend completion text into a descriptor.
pub fn parse_descriptor(raw: &str) -> CommandDescriptor {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<RawDescriptor>(&cleaned) {
        Ok(parsed) => CommandDescriptor::new(
            parsed.command,
            parsed.explanation.unwrap_or_default(),
            parsed
                .safety
                .unwrap_or_else(|| Safety::Unknown.as_str().to_string()),
        ),
        Err(err) => {
            debug!(error = %err, "model output is not a descriptor object; using first line");
            fallback_descriptor(&cleaned)
        }
    }
}

/// Remove ```` ```json ```` / ```` ``` ```` markers anywhere in the text and
/// trim surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn fallback_descriptor(cleaned: &str) -> CommandDescriptor {
    let first_line = cleaned.lines().next().unwrap_or_default();
    CommandDescriptor::new(
        first_line.to_string(),
        FALLBACK_EXPLANATION.to_string(),
        Safety::Unknown.as_str().to_string(),
    )
}
