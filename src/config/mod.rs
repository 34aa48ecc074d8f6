pub mod database;

use std::env;
use std::time::Duration;

use anyhow::Result;

pub use database::DatabaseConfig;

pub const DEFAULT_JWT_AUDIENCE: &str = "authenticated";
pub const DEFAULT_NEWSLETTER_CONFIRMATION_SECS: u64 = 3;
pub const DEFAULT_FORM_RATE_LIMIT_PER_MINUTE: u32 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    /// How long the newsletter signup stays in its confirmed phase.
    pub newsletter_confirmation: Duration,
    pub form_rate_limit_per_minute: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let newsletter_secs = env::var("NEWSLETTER_CONFIRMATION_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NEWSLETTER_CONFIRMATION_SECS);

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            cors_origins,
            newsletter_confirmation: Duration::from_secs(newsletter_secs),
            form_rate_limit_per_minute: env::var("FORM_RATE_LIMIT_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FORM_RATE_LIMIT_PER_MINUTE),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Settings for tests and local runs that never touch the environment.
    pub fn for_tests(jwt_secret: &str) -> Self {
        Self {
            database: DatabaseConfig::default(),
            jwt_secret: jwt_secret.to_string(),
            jwt_audience: DEFAULT_JWT_AUDIENCE.to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
            newsletter_confirmation: Duration::from_secs(DEFAULT_NEWSLETTER_CONFIRMATION_SECS),
            form_rate_limit_per_minute: DEFAULT_FORM_RATE_LIMIT_PER_MINUTE,
            run_migrations: false,
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
