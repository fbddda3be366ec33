//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream authentication service the server is
    /// expected to proxy `/api/auth/*` requests to.
    /// Example: https://auth.internal:8443
    pub auth_api_url: Option<String>,

    /// Secret key for signing cookies and similar server-side needs.
    /// Should be a long random string in production.
    pub secret_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_api_url: std::env::var("AUTH_API_URL").ok(),
            secret_key: std::env::var("SECRET_KEY").ok(),
        }
    }

    /// Check if an upstream auth service is configured
    pub fn has_auth_api(&self) -> bool {
        self.auth_api_url.is_some()
    }

    /// Check if secret key is configured
    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            auth_api_url: Some("https://auth.internal:8443".to_string()),
            secret_key: Some("super-secret-key-123".to_string()),
        };

        assert_eq!(
            config.auth_api_url,
            Some("https://auth.internal:8443".to_string())
        );
        assert_eq!(config.secret_key, Some("super-secret-key-123".to_string()));
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            auth_api_url: None,
            secret_key: None,
        };

        assert!(config.auth_api_url.is_none());
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn test_has_auth_api() {
        let config_with = Config {
            auth_api_url: Some("http://localhost:9000".to_string()),
            secret_key: None,
        };
        let config_without = Config {
            auth_api_url: None,
            secret_key: None,
        };

        assert!(config_with.has_auth_api());
        assert!(!config_without.has_auth_api());
    }

    #[test]
    fn test_has_secret_key() {
        let config_with = Config {
            auth_api_url: None,
            secret_key: Some("secret".to_string()),
        };
        let config_without = Config {
            auth_api_url: None,
            secret_key: None,
        };

        assert!(config_with.has_secret_key());
        assert!(!config_without.has_secret_key());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on the environment, so only verify the
        // presence helpers work on whatever from_env() produced.
        let config = Config::from_env();

        let _ = config.has_auth_api();
        let _ = config.has_secret_key();
    }

    #[test]
    fn test_config_with_empty_string_values() {
        // Empty strings are Some(""), not None, and still count as set.
        let config = Config {
            auth_api_url: Some("".to_string()),
            secret_key: Some("".to_string()),
        };

        assert!(config.has_auth_api());
        assert!(config.has_secret_key());
    }
}
