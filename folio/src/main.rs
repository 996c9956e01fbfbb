use std::io::Read;
use std::net::SocketAddr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use folio::{FolioBuilder, Platform, normalize_route_path};
use tower_http::trace::TraceLayer;

/// Command line interface for the folio contact relay
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the contact endpoint over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "FOLIO_BIND", default_value = "0.0.0.0:3000")]
        bind: SocketAddr,

        /// Hosting platform whose conventions to follow
        #[arg(long, value_enum, default_value_t = ServePlatform::Vercel)]
        platform: ServePlatform,

        /// Route path, or function name for azure-functions
        #[arg(long, value_parser = normalize_route_path)]
        path: Option<String>,
    },
    /// Handle one platform event read from stdin and print the response to stdout
    Invoke {
        #[arg(long, value_enum)]
        platform: InvokePlatform,
    },
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ServePlatform {
    Vercel,
    StaticWebApps,
    AzureFunctions,
}

impl From<ServePlatform> for Platform {
    fn from(platform: ServePlatform) -> Self {
        match platform {
            ServePlatform::Vercel => Platform::Vercel,
            ServePlatform::StaticWebApps => Platform::StaticWebApps,
            ServePlatform::AzureFunctions => Platform::AzureFunctions,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InvokePlatform {
    Netlify,
    AzureFunctions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            platform,
            path,
        } => serve(bind_address(bind, platform), platform.into(), path).await,
        Commands::Invoke { platform } => invoke(platform).await,
        Commands::Version => {
            println!("folio v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// The Functions host tells a custom handler which port to use.
fn bind_address(bind: SocketAddr, platform: ServePlatform) -> SocketAddr {
    if !matches!(platform, ServePlatform::AzureFunctions) {
        return bind;
    }

    match std::env::var("FUNCTIONS_CUSTOMHANDLER_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
    {
        Some(port) => SocketAddr::new(bind.ip(), port),
        None => bind,
    }
}

async fn serve(bind: SocketAddr, platform: Platform, path: Option<String>) -> anyhow::Result<()> {
    let folio = FolioBuilder::from_env()
        .build()
        .context("Failed to configure contact relay")?;

    let mut routes = folio.router_builder(platform);
    if let Some(path) = path {
        routes = routes.with_path(path);
    }
    let app = routes
        .build()
        .context("Invalid contact route path")?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {bind}"))?;

    tracing::info!(
        address = %listener.local_addr()?,
        platform = %platform,
        recipient = %folio.config().recipient_email,
        "Contact relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn invoke(platform: InvokePlatform) -> anyhow::Result<()> {
    let folio = FolioBuilder::from_env()
        .build()
        .context("Failed to configure contact relay")?;

    let mut event = String::new();
    std::io::stdin()
        .read_to_string(&mut event)
        .context("Failed to read event from stdin")?;

    let response = match platform {
        InvokePlatform::Netlify => folio.netlify().call_json(&event).await,
        InvokePlatform::AzureFunctions => folio.azure_functions().call_json(&event).await,
    }
    .context("Failed to encode platform response")?;

    println!("{response}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
