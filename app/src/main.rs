//! Taskboard terminal app
//!
//! Reads commands from stdin, one per line, and prints the resulting page.
//! Logs go to stderr so they never interleave with pages.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin taskboard -- --locale en
//! echo 'add "buy milk"' | cargo run --bin taskboard
//! RUST_LOG=taskboard=debug cargo run --bin taskboard
//! ```

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use taskboard::view::{Outcome, ViewBinding};
use taskboard::{AppEnvironment, AppReducer, AppState, Config};
use taskboard_core::environment::SystemClock;
use taskboard_runtime::Store;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory schedule board
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about)]
struct Cli {
    /// Display language (ja or en); overrides TASKBOARD_LOCALE
    #[arg(long)]
    locale: Option<String>,

    /// Title for todos created without one; overrides TASKBOARD_DEFAULT_TITLE
    #[arg(long)]
    default_title: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()
        .and_then(|config| config.with_overrides(cli.locale.as_deref(), cli.default_title))
        .context("invalid configuration")?;

    let directives = if cli.verbose && std::env::var_os("RUST_LOG").is_none() {
        "taskboard=debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&directives)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taskboard=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        locale = %config.locale,
        default_title = config.default_title(),
        "Configuration loaded"
    );

    let env = AppEnvironment::new(Arc::new(SystemClock), config.default_title());
    let store = Store::new(AppState::default(), AppReducer::new(), env);
    let binding = ViewBinding::new(store, config.locale);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_page(&mut stdout, &binding.render().await).await?;
    loop {
        stdout.write_all(b"> ").await.context("failed to write prompt")?;
        stdout.flush().await.context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };

        match binding.handle_line(&line).await? {
            Outcome::Continue(page) => write_page(&mut stdout, &page).await?,
            Outcome::Quit => break,
        }
    }

    tracing::info!("Shutting down");
    binding
        .store()
        .shutdown(config.shutdown_timeout())
        .await
        .context("shutdown did not complete")?;
    Ok(())
}

async fn write_page(stdout: &mut tokio::io::Stdout, page: &str) -> anyhow::Result<()> {
    stdout
        .write_all(format!("{page}\n").as_bytes())
        .await
        .context("failed to write page")
}
