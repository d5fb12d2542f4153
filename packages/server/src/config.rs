use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Deployment environment name; anything but "development" enforces the
    /// sync endpoint's bearer check.
    pub environment: String,
    /// Shared secret the external scheduler presents when triggering a sync.
    pub cron_secret: Option<String>,
    /// API token for the logo service; logo enrichment is skipped without it.
    pub logo_dev_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("APP_ENV")
                .unwrap_or_else(|_| "development".to_string()),
            cron_secret: env::var("CRON_SECRET").ok(),
            logo_dev_token: env::var("LOGO_DEV_TOKEN").ok(),
        })
    }

    /// The bearer check on the sync endpoint only applies outside development.
    pub fn require_sync_auth(&self) -> bool {
        self.environment != "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> Config {
        Config {
            database_url: "postgres://localhost/launchboard".to_string(),
            port: 8080,
            environment: environment.to_string(),
            cron_secret: Some("secret".to_string()),
            logo_dev_token: None,
        }
    }

    #[test]
    fn sync_auth_is_skipped_in_development() {
        assert!(!config("development").require_sync_auth());
        assert!(config("production").require_sync_auth());
        assert!(config("staging").require_sync_auth());
    }
}
