use std::env;

use anyhow::Context;
use marketplace::client::{DEFAULT_AUTH_SCHEME, DEFAULT_BASE_URL};
use url::Url;

/// Where the marketplace backend lives and how it expects the credential.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    pub base_url: Url,
    pub auth_scheme: String,
}

impl MarketplaceConfig {
    /// Environment variables:
    /// - MARKETPLACE_API_URL: backend base URL (default: "http://127.0.0.1:8000")
    /// - MARKETPLACE_AUTH_SCHEME: `Authorization` scheme (default: "Token")
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("MARKETPLACE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let auth_scheme =
            env::var("MARKETPLACE_AUTH_SCHEME").unwrap_or_else(|_| DEFAULT_AUTH_SCHEME.to_string());

        Self::new(&base_url, &auth_scheme)
    }

    fn new(base_url: &str, auth_scheme: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("MARKETPLACE_API_URL is not a valid URL: {base_url}"))?;
        let auth_scheme = match auth_scheme.trim() {
            "" => DEFAULT_AUTH_SCHEME.to_string(),
            scheme => scheme.to_string(),
        };

        Ok(Self {
            base_url,
            auth_scheme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_default_backend() {
        let config = MarketplaceConfig::new(DEFAULT_BASE_URL, "").unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(config.auth_scheme, "Token");
    }

    #[test]
    fn should_keep_custom_scheme() {
        let config = MarketplaceConfig::new("https://api.feira.app", "Bearer").unwrap();

        assert_eq!(config.auth_scheme, "Bearer");
    }

    #[test]
    fn should_reject_invalid_url() {
        assert!(MarketplaceConfig::new("not a url", "Token").is_err());
    }
}
