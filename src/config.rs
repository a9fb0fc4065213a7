//! Configuration module

use std::env;
use std::time::Duration;

const DEFAULT_IA_SERVICE_URL: &str = "http://ia-service:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL of the IA prediction service (no trailing slash)
    pub ia_service_url: String,

    /// Origins allowed by CORS (credentials are allowed for these)
    pub cors_origins: Vec<String>,

    /// Timeout for `GET /health` on the IA service
    pub health_timeout: Duration,

    /// Timeout for `POST /predict` on the IA service
    pub predict_timeout: Duration,

    /// Environment (development, production)
    pub environment: String,

    /// Emit JSON log lines instead of the human-readable format
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // IA_SERVER_URL is the name older deployments used.
        let ia_service_url = lookup("IA_SERVICE_URL")
            .or_else(|| lookup("IA_SERVER_URL"))
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IA_SERVICE_URL.to_string());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        // LOG_FORMAT wins; otherwise production logs JSON.
        let json_logs = match lookup("LOG_FORMAT") {
            Some(format) => format.trim().eq_ignore_ascii_case("json"),
            None => environment == "production",
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            ia_service_url,

            cors_origins: if cors_origins.is_empty() {
                vec![DEFAULT_CORS_ORIGIN.to_string()]
            } else {
                cors_origins
            },

            health_timeout: Duration::from_secs(
                lookup("HEALTH_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),

            predict_timeout: Duration::from_secs(
                lookup("PREDICT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),

            environment,

            json_logs,
        }
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ia_service_url, "http://ia-service:8080");
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.health_timeout, Duration::from_secs(5));
        assert_eq!(config.predict_timeout, Duration::from_secs(30));
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.environment, "development");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("IA_SERVICE_URL", "http://localhost:9000/"),
            ("CORS_ORIGINS", "https://app.example.com, http://localhost:5173"),
            ("PORT", "9001"),
            ("PREDICT_TIMEOUT_SECS", "12"),
            ("ENVIRONMENT", "production"),
        ]));

        assert_eq!(config.ia_service_url, "http://localhost:9000");
        assert_eq!(
            config.cors_origins,
            vec!["https://app.example.com", "http://localhost:5173"]
        );
        assert_eq!(config.port, 9001);
        assert_eq!(config.predict_timeout, Duration::from_secs(12));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_log_format() {
        let config = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "JSON")]));
        assert!(config.json_logs);

        let config = Config::from_lookup(lookup_from(&[("ENVIRONMENT", "production")]));
        assert!(config.json_logs);

        let config = Config::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("LOG_FORMAT", "text"),
        ]));
        assert!(!config.json_logs);
    }

    #[test]
    fn test_legacy_server_url_name() {
        let config = Config::from_lookup(lookup_from(&[("IA_SERVER_URL", "http://legacy:8080")]));
        assert_eq!(config.ia_service_url, "http://legacy:8080");

        let config = Config::from_lookup(lookup_from(&[
            ("IA_SERVER_URL", "http://legacy:8080"),
            ("IA_SERVICE_URL", "http://current:8080"),
        ]));
        assert_eq!(config.ia_service_url, "http://current:8080");
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("HEALTH_TIMEOUT_SECS", "-1"),
            ("CORS_ORIGINS", " , "),
        ]));
        assert_eq!(config.port, 8000);
        assert_eq!(config.health_timeout, Duration::from_secs(5));
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
    }
}
