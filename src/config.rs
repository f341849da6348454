use std::{str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api/v1";
const DEFAULT_IMAGE_BASE_URL: &str = "http://localhost:3001/uploads/";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_HOURS: i64 = 24;
const DEFAULT_OFFER_IMAGE_LIMIT: usize = 800 * 1024;
const DEFAULT_PRODUCT_IMAGE_LIMIT: usize = 5 * 1024 * 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub image_base_url: String,
    pub secret: String,
    pub bind_addr: String,
    pub session_hours: i64,
    /// Largest offer image, in bytes.
    pub offer_image_limit: usize,
    /// Largest product, category or subcategory image, in bytes.
    pub product_image_limit: usize,
    pub request_timeout: Duration,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found in environment")]
    Missing(&'static str),
    #[error("Failed to parse {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl Config {
    /// Reads the configuration from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenvy::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("SECRET")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("SECRET"))?;

        Ok(Config {
            api_base_url: lookup("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
                .trim_end_matches('/')
                .to_owned(),
            image_base_url: with_trailing_slash(
                lookup("IMAGE_BASE_URL").unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_owned()),
            ),
            secret,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            session_hours: parse_or(&lookup, "SESSION_HOURS", DEFAULT_SESSION_HOURS)?,
            offer_image_limit: parse_or(&lookup, "OFFER_IMAGE_LIMIT", DEFAULT_OFFER_IMAGE_LIMIT)?,
            product_image_limit: parse_or(
                &lookup,
                "PRODUCT_IMAGE_LIMIT",
                DEFAULT_PRODUCT_IMAGE_LIMIT,
            )?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

impl Config {
    pub fn largest_image(&self) -> usize {
        self.offer_image_limit.max(self.product_image_limit)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
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
    fn defaults_match_local_backend() {
        let config = Config::from_lookup(lookup_from(&[("SECRET", "s3cr3t")])).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3001/api/v1");
        assert_eq!(config.image_base_url, "http://localhost:3001/uploads/");
        assert_eq!(config.session_hours, 24);
        assert_eq!(config.offer_image_limit, 800 * 1024);
        assert_eq!(config.product_image_limit, 5 * 1024 * 1024);
        assert_eq!(config.largest_image(), 5 * 1024 * 1024);
    }

    #[test]
    fn secret_is_required() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SECRET")));
    }

    #[test]
    fn urls_are_normalized() {
        let config = Config::from_lookup(lookup_from(&[
            ("SECRET", "x"),
            ("API_BASE_URL", "https://admin.example.com/api/v1/"),
            ("IMAGE_BASE_URL", "https://admin.example.com/uploads"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://admin.example.com/api/v1");
        assert_eq!(config.image_base_url, "https://admin.example.com/uploads/");
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("SECRET", "x"),
            ("OFFER_IMAGE_LIMIT", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "OFFER_IMAGE_LIMIT", .. }));
    }
}
