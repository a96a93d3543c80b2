use clap::Parser;

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "mindscope-server")]
#[command(
    author,
    version,
    about = "REST API server for mental health statement analytics"
)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value = "5")]
    pub db_acquire_timeout_secs: u64,

    /// Allowed CORS origins: "*" or a comma-separated list
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Milliseconds for one rate-limit token to replenish, per client IP
    #[arg(long, env = "RATE_LIMIT_REPLENISH_MS", default_value = "100")]
    pub rate_limit_replenish_ms: u64,

    /// Requests a client IP may burst before being rate limited
    #[arg(long, env = "RATE_LIMIT_BURST", default_value = "50")]
    pub rate_limit_burst: u32,
}
