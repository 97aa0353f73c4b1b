use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};

pub const BASE_URL_ENV: &str = "SURLY_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "SURLY_LOG_FORMAT";

pub const DEFAULT_BASE_URL: &str = surly_registry::DEFAULT_BASE_URL;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "surly", about = "Shorten URLs and expand them again, in memory")]
pub struct CLI {
    /// Base that short codes are appended to; input starting with it is expanded.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log output format. Logs go to stderr, filtered by RUST_LOG.
    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}
