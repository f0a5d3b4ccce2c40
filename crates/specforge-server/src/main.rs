use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use specforge_store::LocalStatePort;

#[derive(Parser)]
#[command(name = "specforge-server", about = "Specification generator API server")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "SPECFORGE_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "SPECFORGE_PORT", default_value_t = 3720)]
    port: u16,

    /// State directory (defaults to the platform data dir)
    #[arg(long, env = "SPECFORGE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Directory holding the template index and content files
    #[arg(long, env = "SPECFORGE_TEMPLATES_DIR", default_value = "templates")]
    templates_dir: PathBuf,

    /// Chat-completion endpoint base URL
    #[arg(long, env = "SPECFORGE_CHAT_URL", default_value = specforge_client::DEFAULT_BASE_URL)]
    chat_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let state_port = cli
        .data_dir
        .map(LocalStatePort::new)
        .unwrap_or_else(LocalStatePort::default_dir);
    tracing::info!("state dir: {}", state_port.base_dir().display());

    let state =
        specforge_server::init_state(Arc::new(state_port), &cli.templates_dir, &cli.chat_url)
            .await?;

    let addr = SocketAddr::new(cli.bind.parse()?, cli.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("specforge-server listening on http://{addr}");

    specforge_server::serve(listener, state).await
}
