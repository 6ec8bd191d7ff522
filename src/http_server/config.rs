//! Listener and CORS settings for the client API.
//!
//! Browsers on any origin may call the API unless `cors_origins` narrows it
//! to an explicit list.

use serde::{Deserialize, Serialize};

/// Where the client API listens and which browser origins it answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Bind address (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origins. Empty, the default, allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Default settings on another port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when no origin list narrows CORS
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}
