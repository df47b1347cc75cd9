use std::env;

/// Local fallback store when no `DATABASE_URL` is configured
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/catalog.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL or SQLite connection string
    pub database_url: String,
    pub port: u16,
    /// Sustained requests per second allowed per client IP (0 disables limiting)
    pub rate_limit_per_second: u64,
    /// Burst size for the per-IP rate limiter
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: parse_var("PORT", 3000),
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", 10),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 20),
        }
    }

    /// Check if per-IP rate limiting is configured
    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_per_second > 0 && self.rate_limit_burst > 0
    }

    /// Interval in milliseconds after which one request of quota is restored
    pub fn rate_limit_replenish_ms(&self) -> u64 {
        (1000 / self.rate_limit_per_second.max(1)).max(1)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
