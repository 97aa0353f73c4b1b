mod cli;

use crate::cli::{LogFormat, CLI, DEFAULT_LOG_FILTER};
use anyhow::Context;
use clap::Parser;
use surly_cli::{render_history, Command, Reply, Session, HELP};
use surly_registry::RegistrySettings;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    let settings = RegistrySettings::builder()
        .base_url(config.base_url)
        .build();

    info!(
        base_url = %settings.base_url,
        log_format = %config.log_format,
        "starting surly session"
    );

    let mut session = Session::with_settings(settings);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read from stdin")?
    {
        match Command::parse(&line) {
            Command::Submit(input) => {
                let reply = session.submit(input);
                if reply != Reply::Nothing {
                    println!("{reply}");
                }
            }
            Command::Check(input) => match session.feedback(input) {
                Some(notice) => println!("{notice}"),
                None => println!("ok"),
            },
            Command::History => print!("{}", render_history(&session.history())),
            Command::Export => {
                let json = serde_json::to_string_pretty(&session.history())
                    .context("failed to serialize history")?;
                println!("{json}");
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(name) => {
                debug!(command = %name, "unknown command");
                println!("Unknown command :{name}, try :help");
            }
        }
    }

    info!(entries = session.history().len(), "session ended");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}
