// ⚙️ Configuration - Server command line + environment

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    #[default]
    Pretty,
    /// One JSON object per line (production)
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points-server", version, about = "Receipt points HTTP service")]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "RECEIPT_POINTS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log output format
    #[arg(long, env = "RECEIPT_POINTS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_format: LogFormat::default(),
        }
    }
}
