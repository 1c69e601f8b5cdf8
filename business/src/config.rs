use log::info;
use serde::Deserialize;
use thiserror::Error;
use vowly_states::State;

/// Default page size requested from paginated admin endpoints.
pub const DEFAULT_PER_PAGE: u32 = 15;

const ENV_PREFIX: &str = "VOWLY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
    #[error("VOWLY_PER_PAGE must be between 1 and 100, got {0}")]
    PerPage(u32),
    #[error("VOWLY_API_BASE_URL must be an absolute http(s) URL, got {0:?}")]
    BaseUrl(String),
}

/// Runtime overrides read from `VOWLY_*` environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvOverrides {
    api_base_url: Option<String>,
    per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Origin of the admin API, without the `/api` suffix and without a trailing slash.
    pub api_base_url: String,
    pub per_page: u32,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url.into()),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn api_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api".to_string()
        } else {
            format!("{}/api", self.api_base_url)
        }
    }

    /// Build-time defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let overrides: EnvOverrides = serde_env::from_iter_with_prefix(vars, ENV_PREFIX)?;
        let mut config = Self::default();

        if let Some(base_url) = overrides.api_base_url {
            let base_url = normalize_base_url(base_url);
            if !is_absolute(&base_url) {
                return Err(ConfigError::BaseUrl(base_url));
            }
            info!("Using API base URL from environment: {base_url}");
            config.api_base_url = base_url;
        }

        if let Some(per_page) = overrides.per_page {
            if !(1..=100).contains(&per_page) {
                return Err(ConfigError::PerPage(per_page));
            }
            config.per_page = per_page;
        }

        Ok(config)
    }
}

/// An empty base URL means the page's own origin on the web.
fn normalize_base_url(url: String) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        same_origin()
    } else {
        url.to_string()
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Origin of the page hosting the web build, e.g. `https://admin.vowly.id`.
#[cfg(target_arch = "wasm32")]
fn same_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Native builds have no page origin.
#[cfg(not(target_arch = "wasm32"))]
fn same_origin() -> String {
    String::new()
}

impl Default for BusinessConfig {
    fn default() -> Self {
        let api_base_url = if cfg!(target_arch = "wasm32") {
            // Served from the same origin as the API.
            same_origin()
        } else if cfg!(feature = "env_prod") {
            "https://api.vowly.id".to_string()
        } else if cfg!(feature = "env_staging") {
            "https://api-staging.vowly.id".to_string()
        } else {
            "http://localhost:8000".to_string()
        };

        Self {
            api_base_url,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_api_segment() {
        assert_eq!(
            BusinessConfig::new("http://127.0.0.1:9000/").api_url(),
            "http://127.0.0.1:9000/api"
        );
        assert_eq!(BusinessConfig::new("").api_url(), "/api");
    }

    #[test]
    fn environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_base_url, same_origin());
        } else if cfg!(feature = "env_prod") {
            assert_eq!(config.api_base_url, "https://api.vowly.id");
        } else if cfg!(feature = "env_staging") {
            assert_eq!(config.api_base_url, "https://api-staging.vowly.id");
        } else {
            assert_eq!(config.api_base_url, "http://localhost:8000");
        }
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn env_overrides_apply() {
        let config = BusinessConfig::from_vars(vec![
            ("VOWLY_API_BASE_URL", "https://admin.example.test/"),
            ("VOWLY_PER_PAGE", "25"),
            ("HOME", "/root"),
        ])
        .expect("overrides should parse");

        assert_eq!(config.api_base_url, "https://admin.example.test");
        assert_eq!(config.per_page, 25);
    }

    #[test]
    fn missing_overrides_keep_defaults() {
        let config = BusinessConfig::from_vars(Vec::<(&str, &str)>::new())
            .expect("empty environment is valid");
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn per_page_out_of_range_is_rejected() {
        let result = BusinessConfig::from_vars(vec![("VOWLY_PER_PAGE", "0")]);
        assert!(matches!(result, Err(ConfigError::PerPage(0))));

        let result = BusinessConfig::from_vars(vec![("VOWLY_PER_PAGE", "many")]);
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let result = BusinessConfig::from_vars(vec![("VOWLY_API_BASE_URL", "/backend")]);
        assert!(matches!(result, Err(ConfigError::BaseUrl(url)) if url == "/backend"));

        let result = BusinessConfig::from_vars(vec![("VOWLY_API_BASE_URL", "admin.vowly.id")]);
        assert!(matches!(result, Err(ConfigError::BaseUrl(_))));
    }
}
