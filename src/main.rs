use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sketchmaker::models::{AppConfig, DEFAULT_BIND_ADDR};
use sketchmaker::server;

#[derive(Parser)]
#[command(name = "sketchmaker")]
#[command(about = "Turn photographs into line drawings with a live preview")]
struct Cli {
    /// Image to open on startup (defaults to ./test.png when present)
    image: Option<PathBuf>,

    /// Address for the preview server
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// Directory that relative save paths resolve against
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sketchmaker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cwd = std::env::current_dir()?;
    let config = AppConfig {
        bind_addr: cli.bind,
        initial_image: AppConfig::resolve_initial_image(cli.image, &cwd),
        output_dir: cli.output_dir,
    };
    tracing::info!(
        bind = %config.bind_addr,
        output_dir = %config.output_dir.display(),
        image = ?config.initial_image.as_ref().map(|p| p.display().to_string()),
        "Configuration"
    );

    let state = server::create_app_state(config.clone());
    server::open_initial_image(&state).await;

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Sketchmaker listening");
    tracing::info!("Open http://{}/ in a browser", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
