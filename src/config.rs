//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Config {
    /// Default port for the greeting server
    pub const DEFAULT_GREETING_PORT: u16 = 8080;
    /// Default port for the logging server
    pub const DEFAULT_LOGGING_PORT: u16 = 8081;

    /// Load configuration from environment variables with defaults
    ///
    /// `PORT` and `HOST` override `default_port` and `0.0.0.0`.
    pub fn from_env(default_port: u16) -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(default_port),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
