// Core query functionality shared by the askbox binaries:
// - HTTP client for the query backend
// - Request/response wire types
// - Configuration loading
// - Shared error types

// Export client module - client factory, capability trait and HTTP implementation
pub mod client;
pub use client::*;

// Export types module - request/response wire types
pub mod types;
pub use types::*;

// Export config module - configuration loading
pub mod config;
pub use config::*;

// Export errors module - shared error types
pub mod errors;
pub use errors::*;
