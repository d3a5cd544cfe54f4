//! EmailJS credentials from the environment.
//!
//! `.env.local` then `.env` are loaded first; variables already set in the
//! process win. Each key is read as `EMAILJS_*`, falling back to the
//! `VITE_EMAILJS_*` names used by the web build.

use thiserror::Error;

use super::sender::EMAILJS_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0} (or VITE_{0})")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key for non-browser clients
    pub access_token: Option<String>,
    pub endpoint: String,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            access_token: None,
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    /// Load dotenv files, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        for file in [".env.local", ".env"] {
            if let Ok(path) = dotenvy::from_filename(file) {
                log::debug!("Loaded {}", path.display());
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| -> Option<String> {
            lookup(key)
                .or_else(|| lookup(&format!("VITE_{}", key)))
                .filter(|value| !value.trim().is_empty())
        };
        let require = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            public_key: require("EMAILJS_PUBLIC_KEY")?,
            access_token: read("EMAILJS_PRIVATE_KEY"),
            endpoint: read("EMAILJS_ENDPOINT").unwrap_or_else(|| EMAILJS_ENDPOINT.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_plain_names() {
        let config = EmailJsConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ]))
        .unwrap();

        assert_eq!(config, EmailJsConfig::new("svc", "tpl", "pk"));
    }

    #[test]
    fn test_falls_back_to_vite_names() {
        let config = EmailJsConfig::from_lookup(lookup(&[
            ("VITE_EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("VITE_EMAILJS_PUBLIC_KEY", "pk"),
            ("VITE_EMAILJS_PRIVATE_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.service_id, "svc");
        assert_eq!(config.public_key, "pk");
        assert_eq!(config.access_token.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, EMAILJS_ENDPOINT);
    }

    #[test]
    fn test_missing_or_blank_key_is_error() {
        let err = EmailJsConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "  "),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("EMAILJS_TEMPLATE_ID"));
    }
}
