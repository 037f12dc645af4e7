//! Command-line flags.
//!
//! Every flag is optional; an absent flag leaves the value from the
//! environment (or the built-in default) in place. See [`crate::config`].

use clap::Parser;

/// URL shortener HTTP service backed by Redis.
#[derive(Debug, Default, Clone, Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on [env: PORT] [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Public host used in short links and as the identity namespace [env: HOST] [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Full Redis URL; takes precedence over the individual Redis flags [env: REDIS_URL]
    #[arg(long)]
    pub redis_url: Option<String>,

    /// Redis host [env: REDIS_HOST] [default: localhost]
    #[arg(long)]
    pub redis_host: Option<String>,

    /// Redis port [env: REDIS_PORT] [default: 6379]
    #[arg(long)]
    pub redis_port: Option<u16>,

    /// Redis password [env: REDIS_PASSWORD]
    #[arg(long)]
    pub redis_password: Option<String>,

    /// Redis database index [env: REDIS_DB] [default: 0]
    #[arg(long)]
    pub redis_db: Option<u32>,

    /// Lifetime of a short link in minutes [env: CACHE_DURATION] [default: 1440]
    #[arg(long)]
    pub cache_duration: Option<u64>,

    /// Verbose logging and configuration dump at startup [env: DEBUG]
    #[arg(short, long)]
    pub debug: bool,

    /// Log output format: text or json [env: LOG_FORMAT] [default: text]
    #[arg(long)]
    pub log_format: Option<String>,

    /// Timeout for each Redis command in milliseconds [env: BACKEND_TIMEOUT_MS] [default: 2000]
    #[arg(long)]
    pub backend_timeout_ms: Option<u64>,

    /// Redis connection attempts at startup before giving up [env: CONNECT_RETRIES] [default: 5]
    #[arg(long)]
    pub connect_retries: Option<usize>,
}
