use serde::Deserialize;
use spinner_catalog::BudgetConfig;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub resiliency: ResiliencyConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Saved destinations and history fall back to in-memory storage when unset.
    pub database: Option<DatabaseConfig>,
    /// Rate limiting is disabled when unset.
    pub redis: Option<RedisConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret shared with the identity provider.
    pub jwt_secret: String,
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
}

fn default_audience() -> String {
    "authenticated".to_string()
}

/// Longest session lifetime accepted from configuration: one week.
pub const MAX_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub ttl_seconds: i64,
    pub cleanup_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 1800,
            cleanup_interval_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 6 * 60 * 60 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProvidersConfig {
    pub open_meteo_url: String,
    pub unsplash_url: String,
    pub unsplash_access_key: Option<String>,
    pub rest_countries_url: String,
    pub timeout_ms: u64,
    pub photo_count: u8,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            open_meteo_url: "https://archive-api.open-meteo.com/v1/archive".to_string(),
            unsplash_url: "https://api.unsplash.com".to_string(),
            unsplash_access_key: None,
            rest_countries_url: "https://restcountries.com/v3.1".to_string(),
            timeout_ms: 5000,
            photo_count: 6,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ResiliencyConfig {
    pub failure_threshold: usize,
    pub reset_timeout_seconds: u64,
}

impl Default for ResiliencyConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            reset_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitConfig {
    pub requests: i64,
    pub window_seconds: i64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests: 100,
            window_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SPINNER__AUTH__JWT_SECRET=...`
            .add_source(config::Environment::with_prefix("SPINNER").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let ttl = self.session.ttl_seconds;
        if !(1..=MAX_SESSION_TTL_SECONDS).contains(&ttl) {
            return Err(config::ConfigError::Message(format!(
                "session.ttl_seconds must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECONDS, ttl
            )));
        }
        Ok(())
    }

    /// Everything on defaults except the required fields. Used by tests and
    /// local runs without a config directory.
    pub fn with_secret(port: u16, jwt_secret: impl Into<String>) -> Self {
        Self {
            server: ServerConfig { port },
            auth: AuthConfig {
                jwt_secret: jwt_secret.into(),
                jwt_audience: default_audience(),
            },
            session: SessionConfig::default(),
            cache: CacheConfig::default(),
            providers: ProvidersConfig::default(),
            resiliency: ResiliencyConfig::default(),
            rate_limit: RateLimitConfig::default(),
            budget: BudgetConfig::default(),
            database: None,
            redis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_when_missing() {
        let source = r#"
            [server]
            port = 8080

            [auth]
            jwt_secret = "dev-secret"

            [session]
            ttl_seconds = 600
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.auth.jwt_audience, "authenticated");
        assert_eq!(config.session.ttl_seconds, 600);
        assert_eq!(config.session.cleanup_interval_seconds, 60);
        assert_eq!(config.rate_limit.requests, 100);
        assert!(config.providers.unsplash_access_key.is_none());
        assert!(config.database.is_none());
        assert!(config.redis.is_none());
        assert_eq!(config.budget.max_multiplier, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_session_ttl_out_of_range_rejected() {
        for ttl in [0, -60, i64::MAX] {
            let mut config = Config::with_secret(8080, "dev-secret");
            config.session.ttl_seconds = ttl;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("session.ttl_seconds"));
        }

        let mut config = Config::with_secret(8080, "dev-secret");
        config.session.ttl_seconds = MAX_SESSION_TTL_SECONDS;
        assert!(config.validate().is_ok());
    }
}
