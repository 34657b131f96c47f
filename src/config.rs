//! Server configuration.
//!
//! Every option can be given as a command-line flag or through its
//! environment variable.

use crate::board::adapters::realtime::DEFAULT_CHANNEL_CAPACITY;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration of the taskboard server.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard-server", about = "Task board HTTP and realtime server")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL; in-memory stores are used when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// HMAC secret used to verify bearer tokens.
    #[arg(long, env = "JWT_ACCESS_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Events buffered per board channel for a slow subscriber.
    #[arg(long, env = "TASKBOARD_CHANNEL_CAPACITY", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: usize,

    /// Log output format.
    #[arg(long, env = "TASKBOARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
