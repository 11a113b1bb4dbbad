// Development backend for the askbox chat client.
//
// Serves the wire contract the client speaks: a health message on GET /
// and an echo reply on POST /.

pub mod config;
pub mod http_server;

pub use config::ServerConfig;
pub use http_server::{build_router, run_server};
