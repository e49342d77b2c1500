//! Hookbook - booking webhook subscriptions and embed snippets
//!
//! Main entry point for the Hookbook CLI.

mod cli;
mod cmd_webhook;

use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hookbook_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig, ValidationResult};
use hookbook_core::{EmbedSnippets, WebhookRegistry};
use hookbook_store_http::HttpSubscriptionStore;

use crate::cli::{Cli, Commands};
use crate::cmd_webhook::{webhook_create, webhook_delete, webhook_edit, webhook_list};

/// Initialize tracing with console output and, when configured, a rolling log file.
///
/// Console output goes to stderr so command output on stdout stays clean.
fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match config.directory {
        Some(ref dir) => {
            let log_dir = ConfigLoader::expand_path(&dir.to_string_lossy());
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("hookbook")
                .filename_suffix("log")
                .max_log_files(14)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keeps the background writer alive for the program duration
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };
    Ok(config)
}

/// Fail on the first validation error and log the warnings.
fn check(result: ValidationResult) -> Result<(), Box<dyn std::error::Error>> {
    for warning in result.into_result()? {
        warn!("{}: {}", warning.path, warning.message);
    }
    Ok(())
}

fn open_registry(config: &Config) -> Result<WebhookRegistry, Box<dyn std::error::Error>> {
    check(ConfigValidator::validate_api(config))?;
    let store = HttpSubscriptionStore::from_config(&config.api)?;
    Ok(WebhookRegistry::new(Arc::new(store)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging)?;
    debug!("Hookbook v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Embed { username, html } => {
            check(ConfigValidator::validate_embed(&config))?;
            let snippets = EmbedSnippets::new(&config.embed, &username);
            println!("{}", if html { snippets.html } else { snippets.iframe });
            Ok(())
        }
        Commands::List { format } => {
            let mut registry = open_registry(&config)?;
            webhook_list(&mut registry, &format).await
        }
        Commands::Create {
            url,
            no_created,
            no_rescheduled,
            no_cancelled,
        } => {
            let mut registry = open_registry(&config)?;
            webhook_create(&mut registry, &url, no_created, no_rescheduled, no_cancelled).await
        }
        Commands::Edit {
            id,
            url,
            triggers,
            active,
        } => {
            let mut registry = open_registry(&config)?;
            webhook_edit(&mut registry, &id, url, triggers, active).await
        }
        Commands::Delete { id } => {
            let mut registry = open_registry(&config)?;
            webhook_delete(&mut registry, &id).await
        }
    }
}
