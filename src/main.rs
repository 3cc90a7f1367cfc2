use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

use customer_service::config::AppConfig;
use customer_service::logging;
use customer_service::startup;

#[derive(Parser, Debug)]
#[command(name = "customer-service")]
#[command(about = "A customer registry REST service")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Store strategy: list, jdbc or jpa (overrides config file)
    #[arg(long)]
    store: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_tracing("info");

    // Load configuration from specified file or use defaults
    let mut app_config = if args.config == "config.yaml" && !Path::new("config.yaml").exists() {
        tracing::warn!("No config.yaml found, using the seeded in-memory list store");
        AppConfig::default_config()
    } else {
        AppConfig::load_from_file(&args.config)
            .map_err(|e| format!("Failed to load configuration: {}", e))?
    };

    // Override with command line arguments if provided
    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }
    if let Some(store) = args.store {
        app_config.store.store_type = store;
        app_config.validate()?;
    }

    let app = startup::build_app(&app_config).await?;

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        tracing::warn!(
            host = %app_config.server.host,
            "Invalid host address, using 127.0.0.1"
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    tracing::info!(
        %addr,
        store = %app_config.store.store_type,
        customers = %format!("{}/customers", app_config.base_path()),
        "Customer service listening"
    );

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
