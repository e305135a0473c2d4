//! Process-wide settings, read once at startup.

use clap::Parser;

/// Application settings, populated from CLI flags and environment variables.
///
/// Absence of any variable is not an error; every field has a default.
#[derive(Parser, Debug, Clone)]
#[command(name = "echo-service")]
#[command(about = "Minimal HTTP service with health, version, and echo endpoints")]
pub struct Settings {
    /// Human-readable application name, reported by /version
    #[arg(long, default_value = "Echo Service", env = "APP_NAME")]
    pub app_name: String,

    /// Application version, reported by /health and /version
    #[arg(long, default_value = "1.0.0", env = "APP_VERSION")]
    pub app_version: String,

    /// Enable debug mode
    #[arg(long, default_value = "false", env = "DEBUG")]
    pub debug: bool,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value = "8000", env = "PORT")]
    pub port: u16,

    /// Allowed CORS origins, comma-delimited ("*" allows any origin)
    #[arg(long, value_delimiter = ',', default_value = "*", env = "ALLOWED_ORIGINS")]
    pub allowed_origins: Vec<String>,

    /// Allowed host headers, comma-delimited
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "localhost,127.0.0.1",
        env = "ALLOWED_HOSTS"
    )]
    pub allowed_hosts: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}
