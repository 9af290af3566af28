// main.rs only boots the router and server

mod config;
mod data;
mod handlers;
mod logging;
mod router;
mod state;
mod summary;
mod templates;

use std::env;
use std::path::PathBuf;

use clap::Parser;

use config::Config;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "layar-web", about = "Serves the Layar cinema browsing site")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listen port (also: PORT env var)
    #[arg(long)]
    port: Option<u16>,

    /// Override the path of the cinema data document
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    } else if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
    if let Some(data) = args.data {
        config.data.path = data;
    }

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let state = AppState::new(config);
    let app = router::app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("web server listening on {bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
