//! Terminal-facing UI facade.
//!
//! Groups the rendering contract, user input, and spinner under one namespace
//! so the session controller can depend on `ui` traits instead of stdio.

pub mod input;
pub mod progress;
pub mod render;
pub mod settings;

pub use input::{is_affirmative, Choice, Prompter, StdinPrompter};
pub use progress::ProgressHandle;
pub use render::{RenderSink, Renderer};
