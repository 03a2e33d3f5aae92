use anyhow::Context;
use clap::Parser;
use placard_canvas::FontConfig;
use placard_server::config::{init_logging, Args};
use placard_server::{serve, Renderer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format)?;

    // The label font is loaded once; the server does not start without it
    let font_config = FontConfig::default();
    let fonts = font_config.resolve().with_context(|| {
        format!(
            "cannot start without the label font at {}",
            font_config.font_path.display()
        )
    })?;
    tracing::info!(family = fonts.family().unwrap_or_default(), "label font loaded");

    let bind_addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_addr))?;

    serve(listener, Renderer::new(Arc::new(fonts)))
        .await
        .context("server error")?;
    Ok(())
}
