use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use translate_service::{build_router, AppState, HttpTransport, ServiceConfig};

#[derive(Parser)]
#[command(
    name = "translate-service",
    about = "HTTP microservice translating text via the Google Cloud Translation API",
    version
)]
struct Cli {
    /// Path to config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. ":8080" or "127.0.0.1:8080" (overrides config)
    #[arg(short, long, env = "ADDR")]
    addr: Option<String>,

    /// Print config search paths and exit
    #[arg(long)]
    show_config_paths: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "translate_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.show_config_paths {
        println!("Config search paths:");
        for (i, path) in translate_service::config::config_search_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.display());
        }
        return Ok(());
    }

    let mut config = ServiceConfig::find_and_load(cli.config.as_deref())?;

    config.override_addr(cli.addr);

    let api_key = config.resolve_api_key()?;
    let endpoint = config.endpoint_url()?;
    let transport = HttpTransport::new(config.timeout())?;

    info!("translate-service v{}", env!("CARGO_PKG_VERSION"));
    info!("  Service:   {}", config.name);
    info!("  Endpoint:  {}", endpoint);
    info!("  Timeout:   {}s", config.provider.timeout_secs);

    let state = Arc::new(AppState {
        name: config.name.clone(),
        api_key,
        endpoint,
        transport: Arc::new(transport),
    });

    let app = build_router(state);
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
