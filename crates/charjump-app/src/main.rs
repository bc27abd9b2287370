mod cli;
mod input;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use charjump_common::{CharJumpError, ConfigError};
use charjump_config::CharJumpConfig;
use charjump_engine::{Host, NavigationController, NavigationOutcome, PromptChannel, TextBuffer};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::terminal::{location, Terminal};

fn load_config(args: &Args) -> Result<CharJumpConfig, ConfigError> {
    match &args.config {
        Some(path) => charjump_config::load_config_from(path),
        None => charjump_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("invalid log level {directive:?} ({e}), using info");
            EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter; problems are
    // reported once logging is up.
    let loaded = load_config(&args);
    let config_level = match &loaded {
        Ok(config) => config.logging.level.directive(),
        Err(_) => "info",
    };
    init_logging(args.log_level.as_deref().unwrap_or(config_level));

    tracing::debug!("charjump v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CharJumpConfig::default()
    });
    // Loading happened before the subscriber existed, so report again.
    if let Err(e) = charjump_config::validation::validate(&config) {
        tracing::warn!("{e} (keeping the values as written)");
    }
    if let Some(ms) = args.timeout_ms {
        config.search.timeout_ms = ms;
    }

    if args.print_config {
        println!("{}", charjump_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: &Args, config: CharJumpConfig) -> Result<ExitCode, CharJumpError> {
    let buffer = Arc::new(TextBuffer::new());
    for path in &args.files {
        let text = tokio::fs::read_to_string(path).await?;
        let view = buffer.open(path.display().to_string(), text);
        buffer.set_visible_lines(view, args.top, args.height);
    }
    tracing::info!(views = args.files.len(), "Files loaded");

    let terminal = Arc::new(Terminal::new(buffer.clone()));
    let prompts = Arc::new(PromptChannel::new());
    let host = Host {
        text: buffer.clone(),
        feedback: terminal.clone(),
        cursor: terminal.clone(),
        input: prompts.clone(),
    };
    let controller = NavigationController::with_config(host, config);

    input::spawn_stdin_feeder(prompts, args.literal);

    match controller.run().await {
        NavigationOutcome::Jumped { view, position } => {
            println!("{}:{}", terminal.name(view), location(position));
            Ok(ExitCode::SUCCESS)
        }
        NavigationOutcome::Failed(reason) => Err(CharJumpError::Other(reason)),
        other => {
            tracing::info!(outcome = ?other.kind(), "No jump");
            Ok(ExitCode::FAILURE)
        }
    }
}
