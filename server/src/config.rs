/// Settings for the development backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Prefix prepended to every echoed query.
    pub reply_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            reply_prefix: "Echo: ".to_string(),
        }
    }
}
