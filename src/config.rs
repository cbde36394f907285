//! Configuration for Stockroom
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;

/// Stockroom - fixed asset management backend
#[derive(Parser, Debug, Clone)]
#[command(name = "stockroom")]
#[command(about = "HTTP backend for organizational fixed-asset tracking")]
pub struct Args {
    /// MongoDB connection string
    #[arg(long, env = "DATABASE_URL", default_value = "mongodb://localhost:27017")]
    pub database_url: String,

    /// MongoDB database name
    #[arg(long, env = "DATABASE_NAME", default_value = "fixed_assets")]
    pub database_name: String,

    /// Port to listen on (binds 0.0.0.0)
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Socket address the server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.database_url.starts_with("mongodb://")
            && !self.database_url.starts_with("mongodb+srv://")
        {
            return Err(format!(
                "DATABASE_URL must be a mongodb:// or mongodb+srv:// URI, got '{}'",
                self.database_url
            ));
        }
        Ok(())
    }
}
