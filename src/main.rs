use std::env;

use anyhow::Context;
use chrono::Utc;

mod cli;
use cli::{ParseContext, USAGE, parse_command, run_command};

use nonprofit_crm::storage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::load_or_create().context("Failed to load configuration")?;
    let context = ParseContext {
        today: Utc::now().date_naive(),
        default_period: config.finances.default_period,
    };

    let command = match parse_command(env::args().skip(1), &context) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    if let Err(err) = run_command(command, &config).await {
        tracing::error!("Command failed: {:#}", err);
        return Err(err);
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "nonprofit-crm.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("nonprofit-crm started");
}
