//! Command-line configuration and logging setup.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// placard-server: serve base64-encoded placeholder PNG images over HTTP
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind to
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Log output format
    #[clap(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Install the global tracing subscriber.
///
/// Levels come from `RUST_LOG` and default to `info`. Records emitted through
/// the `log` facade (the canvas crate) are forwarded to tracing.
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    tracing_log::LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(registry.with(fmt::layer()))?,
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))?
        }
    }
    Ok(())
}

/// Format a bound address for the startup log line.
pub fn display_addr(addr: &SocketAddr) -> String {
    format!("http://{addr}")
}
