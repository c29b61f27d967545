use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Catalog site root, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Referer sent when downloading poster and background images
    #[serde(default = "default_image_referer")]
    pub image_referer: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Language tag attached to search results
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            image_referer: default_image_referer(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

fn default_base_url() -> String {
    "https://data18.empirestores.co".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.2; Trident/4.0; SLCC2; .NET CLR 2.0.50727; .NET CLR 3.5.30729; .NET CLR 3.0.30729; Media Center PC 6.0)".to_string()
}

fn default_image_referer() -> String {
    "http://www.google.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_language() -> String {
    "en".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DATA18__ prefix
    /// 2. data18.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DATA18__TIMEOUT_SECS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Absolute URL for a path relative to the site root
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("data18").required(false))
        .add_source(
            Environment::with_prefix("DATA18")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = ScraperConfig::default();
        assert_eq!(config.base_url, "https://data18.empirestores.co");
        assert!(config.user_agent.starts_with("Mozilla/4.0"));
        assert_eq!(config.image_referer, "http://www.google.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = ScraperConfig {
            base_url: "http://localhost:1234/".to_string(),
            ..ScraperConfig::default()
        };
        assert_eq!(
            config.url_for("/123/some-movie.html"),
            "http://localhost:1234/123/some-movie.html"
        );
        assert_eq!(config.url_for("Search?q=x"), "http://localhost:1234/Search?q=x");
    }

    #[test]
    fn test_load_config_from_environment() {
        env::set_var("DATA18__TIMEOUT_SECS", "5");
        env::set_var("DATA18__LANGUAGE", "de");

        let config = load_config().unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.language, "de");
        assert_eq!(config.base_url, default_base_url());

        env::remove_var("DATA18__TIMEOUT_SECS");
        env::remove_var("DATA18__LANGUAGE");
    }
}
