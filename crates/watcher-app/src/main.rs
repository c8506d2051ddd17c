mod cli;
mod options;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use watcher_ai::{GeminiClient, ImageData, Session, TurnOutcome};
use watcher_config::WatcherConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/watcher-app/
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("Ignoring log filter {directive:?}: {e}");
            EnvFilter::from_default_env()
        }
    };
    // Replies go to stdout; logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    let loaded = match &args.config {
        Some(path) => watcher_config::load_config_from(path),
        None => watcher_config::load_config(),
    };
    init_logging(&options::log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok(),
    ));

    tracing::info!("Watcher v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WatcherConfig::default()
    });
    if let Some(model) = args.model {
        config.model.name = model;
    }

    let client = match GeminiClient::new(options::gemini_config(&config)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create model client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let session = Arc::new(Session::with_options(
        Arc::new(client),
        options::session_options(&config),
    ));
    tracing::info!(
        session = %session.id().short(),
        model = %config.model.name,
        "Session ready"
    );

    let image = match args.image.as_deref().map(ImageData::from_path).transpose() {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Cannot read image: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(question) = args.ask {
        return match repl::ask_once(&session, question, image).await {
            Some(TurnOutcome::Answered | TurnOutcome::Skipped) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    if let Err(e) = repl::run(session, image).await {
        tracing::error!("Input error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
