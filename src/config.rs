use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub auth: AuthConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    pub cookie_max_age_secs: u64,
}

/// Artificial response delays (zero disables them) and the report size cap.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    pub latency_ms: u64,
    pub enterprise_latency_ms: u64,
    /// Longest report, in rows, a single request may ask for.
    pub max_periods: usize,
}

impl MockConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn enterprise_latency(&self) -> Duration {
        Duration::from_millis(self.enterprise_latency_ms)
    }
}

fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let builder = config::Config::builder()
        .set_default("service.host", "0.0.0.0")?
        .set_default("service.port", 5320_i64)?
        .set_default("service.log_level", "info")?
        .set_default("auth.access_token_secret", "microgrid-mock-access-secret")?
        .set_default("auth.refresh_token_secret", "microgrid-mock-refresh-secret")?
        .set_default("auth.access_token_ttl_secs", 7 * 24 * 60 * 60_i64)?
        .set_default("auth.refresh_token_ttl_secs", 30 * 24 * 60 * 60_i64)?
        .set_default("auth.cookie_max_age_secs", 24 * 60 * 60_i64)?
        .set_default("mock.latency_ms", 300_i64)?
        .set_default("mock.enterprise_latency_ms", 200_i64)?
        .set_default("mock.max_periods", 366_i64)?;
    Ok(builder)
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_builder = with_defaults()?
            // Optional local overrides
            .add_source(config::File::with_name("config").required(false))
            // Environment variables like MOCK_SERVICE__PORT=8080
            .add_source(
                config::Environment::with_prefix("MOCK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config_builder.try_deserialize()?;
        Ok(config)
    }

    /// Built-in defaults only, ignoring files and environment.
    pub fn defaults() -> Result<Self> {
        let config: Config = with_defaults()?.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_key() {
        let config = Config::defaults().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:5320");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.auth.access_token_ttl_secs, 604_800);
        assert_eq!(config.auth.refresh_token_ttl_secs, 2_592_000);
        assert_eq!(config.auth.cookie_max_age_secs, 86_400);
        assert_eq!(config.mock.latency(), Duration::from_millis(300));
        assert_eq!(config.mock.enterprise_latency(), Duration::from_millis(200));
        assert_eq!(config.mock.max_periods, 366);
    }

    #[test]
    fn secrets_differ() {
        let config = Config::defaults().unwrap();
        assert_ne!(config.auth.access_token_secret, config.auth.refresh_token_secret);
    }
}
