//! Build-time configuration for the REST backend location.
//!
//! Values come from compile-time environment variables (`option_env!`) so the
//! WASM bundle carries its backend URL without a runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:10000/api";

/// Deployment environment selected at build time via `APP_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name; anything other than `production` is development.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Resolved API configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { environment: Environment::Development, base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Load configuration from `APP_ENV` and `API_BASE_URL` captured at compile time.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("APP_ENV"), option_env!("API_BASE_URL"))
    }

    /// Development always talks to the default local backend; production
    /// honours an override when one is provided.
    pub fn resolve(env: Option<&str>, base_url: Option<&str>) -> Self {
        let environment = env.map(Environment::parse).unwrap_or_default();
        let base_url = match (environment, base_url.map(str::trim)) {
            (Environment::Production, Some(url)) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
            _ => DEFAULT_API_BASE_URL.to_owned(),
        };
        Self { environment, base_url }
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
