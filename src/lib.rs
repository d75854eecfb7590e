//! termo — natural language to shell commands, backed by a local model.
//!
//! A request like "show disk usage" is sent to an Ollama-compatible backend,
//! the reply is parsed into a [`types::CommandDescriptor`], and the command
//! runs in the host shell only after the user confirms it.
//!
//! # Quick start
//!
//! ```no_run
//! use termo::config::{load_config, ConfigOverrides};
//! use termo::inference::InferenceClient;
//!
//! # async fn example() {
//! let loaded = load_config(None, &ConfigOverrides::default()).unwrap();
//! let client = InferenceClient::new(&loaded.config);
//! match client.generate("list files").await {
//!     Ok(descriptor) => println!("{}", descriptor.command()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod error;
pub mod exec;
pub mod inference;
pub mod parser;
pub mod platform;
pub mod preflight;
pub mod prompt;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod types;
pub mod ui;
