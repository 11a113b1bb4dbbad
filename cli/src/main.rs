use clap::Parser;
use colored::*;
use std::error::Error;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod logging;
mod output;
mod widget;

use crate::cli::Args;
use crate::logging::{log_error, log_info};
use crate::output::print_usage_instructions;
use askbox_core::client::HttpQueryClient;
use askbox_core::config::AskConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration (file first, then environment overrides)
    let mut config = AskConfig::load()?;

    // Initialize logging: RUST_LOG wins, then --verbose, then the config
    let default_filter = if args.verbose {
        "debug".to_string()
    } else {
        config
            .log_level
            .clone()
            .unwrap_or_else(|| "info".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // A command-line URL overrides the configured one
    if let Some(url) = args.api_url.clone() {
        config.api_url = Some(url);
    }

    // Initialize the query client
    let client = match HttpQueryClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log_error(&format!("Failed to initialize query client: {}", e));
            eprintln!("{}", format!("Error initializing query client: {}", e).red());
            return Err(e.into());
        }
    };
    log_info(&format!("Using backend at {}", client.base_url()));

    // Call app logic based on arguments
    if args.interactive {
        if let Err(e) = app::run_interactive_chat(client).await {
            log_error(&format!("Error in interactive chat: {}", e));
            eprintln!("{}", format!("Interactive chat failed: {}", e).red());
        }
    } else if let Some(query) = args.query.clone() {
        if let Err(e) = app::run_single_query(query, client).await {
            log_error(&format!("Error processing query: {}", e));
        }
    } else {
        // No query and not interactive, show usage
        print_usage_instructions();
    }

    Ok(())
}
