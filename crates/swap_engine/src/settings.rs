use std::env;
use std::time::Duration;

use swap_logging::{swap_info, swap_warn};
use thiserror::Error;
use url::Url;

pub const ENV_BACKEND_URL: &str = "SWAP_BACKEND_URL";
pub const ENV_MEILI_URL: &str = "SWAP_MEILI_URL";
pub const ENV_MEILI_KEY: &str = "SWAP_MEILI_KEY";
pub const ENV_MEILI_INDEX: &str = "SWAP_MEILI_INDEX";
pub const ENV_API_TOKEN: &str = "SWAP_API_TOKEN";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "SWAP_REQUEST_TIMEOUT_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub backend_url: String,
    pub search_url: String,
    pub search_key: String,
    pub search_index: String,
    /// Pre-loaded as the `api_token` cookie for the backend origin.
    pub api_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8080".to_string(),
            search_url: "http://localhost:7700".to_string(),
            search_key: String::new(),
            search_index: "items".to_string(),
            api_token: None,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let load = |key: &'static str, default: String| {
            lookup(key).unwrap_or_else(|| {
                swap_info!("{key} not set, using default: {default}");
                default
            })
        };

        let backend_url =
            validated_url(ENV_BACKEND_URL, load(ENV_BACKEND_URL, defaults.backend_url))?;
        let search_url = validated_url(ENV_MEILI_URL, load(ENV_MEILI_URL, defaults.search_url))?;
        let search_index = load(ENV_MEILI_INDEX, defaults.search_index);
        let search_key = lookup(ENV_MEILI_KEY).unwrap_or_else(|| {
            swap_warn!("{ENV_MEILI_KEY} not set, searching without a key");
            String::new()
        });
        let api_token = lookup(ENV_API_TOKEN).filter(|token| !token.is_empty());

        let request_timeout = match lookup(ENV_REQUEST_TIMEOUT_MS) {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|err: std::num::ParseIntError| {
                    SettingsError::Invalid {
                        key: ENV_REQUEST_TIMEOUT_MS,
                        value: raw.clone(),
                        reason: err.to_string(),
                    }
                })?;
                Duration::from_millis(millis)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            backend_url,
            search_url,
            search_key,
            search_index,
            api_token,
            connect_timeout: defaults.connect_timeout,
            request_timeout,
        })
    }
}

/// Keeps the configured text (minus a trailing slash) once it parses as http(s).
fn validated_url(key: &'static str, raw: String) -> Result<String, SettingsError> {
    let invalid = |reason: String| SettingsError::Invalid {
        key,
        value: raw.clone(),
        reason,
    };
    let parsed = Url::parse(&raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Joins a base URL and an absolute endpoint path without dropping a base path prefix.
pub(crate) fn join_url(base: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = ClientSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn values_are_read_and_normalized() {
        let settings = ClientSettings::from_lookup(lookup_from(&[
            (ENV_BACKEND_URL, "https://swap.example.com/api/"),
            (ENV_MEILI_URL, "https://search.example.com"),
            (ENV_MEILI_KEY, "public-key"),
            (ENV_MEILI_INDEX, "products"),
            (ENV_API_TOKEN, "jwt"),
            (ENV_REQUEST_TIMEOUT_MS, "2500"),
        ]))
        .unwrap();

        assert_eq!(settings.backend_url, "https://swap.example.com/api");
        assert_eq!(settings.search_key, "public-key");
        assert_eq!(settings.search_index, "products");
        assert_eq!(settings.api_token.as_deref(), Some("jwt"));
        assert_eq!(settings.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = ClientSettings::from_lookup(lookup_from(&[(ENV_BACKEND_URL, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { key: ENV_BACKEND_URL, .. }));

        let err = ClientSettings::from_lookup(lookup_from(&[(ENV_MEILI_URL, "ftp://host")]))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { key: ENV_MEILI_URL, .. }));

        let err =
            ClientSettings::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT_MS, "soon")]))
                .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                key: ENV_REQUEST_TIMEOUT_MS,
                ..
            }
        ));
    }

    #[test]
    fn join_keeps_base_path() {
        let url = join_url("https://swap.example.com/api", "/verify").unwrap();
        assert_eq!(url.as_str(), "https://swap.example.com/api/verify");
        let url = join_url("http://localhost:8080/", "/forgot").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/forgot");
    }
}
