use std::net::SocketAddr;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use askbox_server::{run_server, ServerConfig};

/// Development backend serving health and echo replies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "ASKBOX_SERVER_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Prefix prepended to every echoed query
    #[arg(long, default_value = "Echo: ")]
    reply_prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let args = Args::parse();
    info!("Starting askbox server");

    let config = ServerConfig {
        reply_prefix: args.reply_prefix,
    };
    run_server(args.addr, config).await
}
