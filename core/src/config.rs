//! Environment-driven application configuration
//!
//! The service is configured entirely through environment variables:
//! `GROQ_API_KEY`, `PORT`, `APP_ENV` and `ALLOW_MISSING_API_KEY`.

use std::env;

/// Default listen port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret credential for the Groq API, if configured
    pub groq_api_key: Option<String>,
    /// Port to listen on
    pub port: u16,
    /// True when `APP_ENV=production`
    pub production: bool,
    /// Deployment override: tolerate a missing API key even in production
    pub allow_missing_api_key: bool,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let groq_api_key = env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let production = env::var("APP_ENV")
            .map(|e| e.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let allow_missing_api_key = env::var("ALLOW_MISSING_API_KEY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        AppConfig {
            groq_api_key,
            port,
            production,
            allow_missing_api_key,
        }
    }

    /// Whether the external provider credential is present
    pub fn api_key_configured(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// A missing key is fatal only in production without the override
    pub fn missing_key_is_fatal(&self) -> bool {
        !self.api_key_configured() && self.production && !self.allow_missing_api_key
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            groq_api_key: None,
            port: DEFAULT_PORT,
            production: false,
            allow_missing_api_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fatality() {
        let mut config = AppConfig::default();
        assert!(!config.missing_key_is_fatal());

        config.production = true;
        assert!(config.missing_key_is_fatal());

        config.allow_missing_api_key = true;
        assert!(!config.missing_key_is_fatal());

        config.allow_missing_api_key = false;
        config.groq_api_key = Some("gsk_test".to_string());
        assert!(!config.missing_key_is_fatal());
    }
}
