use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the server starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub reports_dir: String,
    pub environment: String,
    pub openai_api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origin: env_or("CORS_ORIGIN", "http://localhost:3000"),
            reports_dir: env_or("REPORTS_DIR", "./reports"),
            environment: env_or("APP_ENV", "development"),
            openai_api_url: env_or("OPENAI_API_URL", "https://api.openai.com/v1"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Production switches shareable links from localhost to the request host.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(environment: &str) -> Config {
        Config {
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            reports_dir: "./reports".to_string(),
            environment: environment.to_string(),
            openai_api_url: "https://api.openai.com/v1".to_string(),
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_production_flag() {
        assert!(config_in("production").is_production());
        assert!(!config_in("development").is_production());
        assert!(!config_in("Production").is_production());
    }
}
