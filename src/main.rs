//! CLI entry point for termo.

mod cli;

use clap::{CommandFactory, Parser};
use std::io::Write;
use termo::config::{default_config_template, default_global_config_path, load_config};
use termo::exec::ShellExecutor;
use termo::inference::InferenceClient;
use termo::preflight::validate_config;
use termo::session::{explain_command, Session};
use termo::ui::{RenderSink, Renderer, StdinPrompter};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Args, Mode};

/// Env var holding the tracing filter directive.
const LOG_ENV: &str = "TERMO_LOG";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args);

    let code = run(args).await;
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

async fn run(args: Args) -> i32 {
    let (explain, text) = match args.mode() {
        Mode::Usage => {
            let _ = Args::command().print_help();
            if let Some(path) = default_global_config_path() {
                println!("\nGlobal config: {}", path.display());
            }
            return 0;
        }
        Mode::PrintConfig => {
            print!("{}", default_config_template());
            return 0;
        }
        Mode::Explain(command) => (true, command),
        Mode::Generate(request) => (false, request),
    };

    let loaded = match load_config(args.config.as_deref(), &args.overrides()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let config = loaded.config;
    let renderer = Renderer::new(config.display.color);
    if let Err(msg) = validate_config(&config) {
        renderer.error(&msg);
        return 1;
    }
    // Log lines would tear through the spinner row.
    Renderer::set_progress_enabled(!args.verbose);
    info!(
        source = ?loaded.source,
        model = %config.model,
        platform = %config.platform,
        "configuration ready"
    );

    let generator = InferenceClient::new(&config);
    if explain {
        return explain_command(&generator, &renderer, &text).await;
    }

    let runner = ShellExecutor::new(config.platform);
    let mut prompter = StdinPrompter::new(config.display.color);
    Session::new(&generator, &runner, &mut prompter, &renderer)
        .run(&text)
        .await
        .exit_code()
}

fn init_tracing(args: &Args) {
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let ansi = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
