use clap::Parser;

/// Terminal chat client for an askbox query backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The query to send to the backend
    #[arg(index = 1)] // Positional argument
    pub query: Option<String>,

    /// Enter interactive chat mode
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// URL of the query endpoint, overriding the configured one
    #[arg(long, env = "ASKBOX_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
