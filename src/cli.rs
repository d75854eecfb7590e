//! CLI argument parsing via clap.

use clap::Parser;
use termo::build_info;
use termo::config::ConfigOverrides;

/// Turn plain English into a shell command, confirm it, and run it.
#[derive(Debug, Parser)]
#[command(
    name = "termo",
    version,
    long_version = build_info::LONG_VERSION,
    after_help = "Examples:\n  termo find all python files\n  termo show disk usage\n  termo list processes using port 8080\n  termo --explain tar -xzvf archive.tar.gz"
)]
pub struct Args {
    /// What you want to do, in plain words.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "REQUEST")]
    pub words: Vec<String>,

    /// Explain the given command instead of generating one. Nothing is executed.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Path to config file (default: ./termo.toml or ~/.config/termo/termo.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the backend base URL.
    #[arg(long = "ollama-url")]
    pub ollama_url: Option<String>,

    /// Override model name.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log debug diagnostics to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print the documented default config file and exit.
    #[arg(long = "print-config")]
    pub print_config: bool,
}

/// What this invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Usage,
    PrintConfig,
    Explain(String),
    Generate(String),
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.print_config {
            return Mode::PrintConfig;
        }
        let joined = self.words.join(" ");
        let text = joined.trim();
        if text.is_empty() {
            return Mode::Usage;
        }
        if self.explain {
            Mode::Explain(text.to_string())
        } else {
            Mode::Generate(text.to_string())
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ollama_url: self.ollama_url.clone(),
            model: self.model.clone(),
            no_color: self.no_color,
        }
    }
}
