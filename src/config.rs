//! Service configuration.
//!
//! None of these knobs change core semantics (the core itself needs no
//! configuration) — they are deployment-only, read the way the rest of
//! this codebase reads environment-driven config: env vars with
//! hard-coded fallbacks, additionally exposed as `clap` flags.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "rankboard", about = "Concurrent ranking leaderboard service")]
pub struct Config {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of shards in the Customer Store.
    #[arg(long, env = "SHARD_COUNT", default_value_t = 16)]
    pub shard_count: usize,

    /// Per-request timeout, in seconds, enforced at the HTTP layer.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
