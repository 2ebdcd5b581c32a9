//! Server configuration module

use serde::{Deserialize, Serialize};

/// Origin every deployment accepts, for local front-end development
pub const LOCAL_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let workers = std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or(0);

        Self { host, port, workers }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allow credentials (cookies)
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Preflight cache max age in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(LOCAL_CLIENT_ORIGIN)],
            allow_credentials: default_allow_credentials(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Local origin plus the deployed front-end from `CLIENT_URL`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(client_url) = std::env::var("CLIENT_URL") {
            let client_url = client_url.trim().trim_end_matches('/').to_string();
            if !client_url.is_empty() && !config.allowed_origins.contains(&client_url) {
                config.allowed_origins.push(client_url);
            }
        }
        config
    }

    /// Check whether an origin is allowed
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn default_allow_credentials() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_bind_address() {
        let config = ServerConfig::new("0.0.0.0", 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_cors_defaults() {
        let config = CorsConfig::default();
        assert!(config.allow_credentials);
        assert!(config.is_origin_allowed("http://localhost:3000"));
        assert!(!config.is_origin_allowed("https://evil.example"));
    }
}
