//! Runtime configuration resolved from environment variables

use crate::error::{Result, ShellError};
use std::path::PathBuf;
use std::time::Duration;

/// Default lookup service endpoint
pub const DEFAULT_API_URL: &str = "https://edge.limoo.host/v1/domain";

/// Default prompt shown by the interactive shell
pub const DEFAULT_PROMPT: &str = "domain → ";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shell configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Explicit history file; `None` means the user config directory
    pub history_path: Option<PathBuf>,
    pub prompt: String,
    pub show_spinner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            history_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
            show_spinner: true,
        }
    }
}

impl ShellConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = var("DOMAINSHELL_API_URL") {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = var("DOMAINSHELL_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ShellError::config(format!(
                    "DOMAINSHELL_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            if secs == 0 {
                return Err(ShellError::config(
                    "DOMAINSHELL_TIMEOUT_SECS must be greater than zero",
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(path) = var("DOMAINSHELL_HISTORY_FILE") {
            config.history_path = Some(PathBuf::from(path));
        }

        if let Some(prompt) = lookup("DOMAINSHELL_PROMPT").filter(|p| !p.is_empty()) {
            config.prompt = prompt;
        }

        if var("DOMAINSHELL_NO_SPINNER").is_some() {
            config.show_spinner = false;
        }

        Ok(config)
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
    fn test_defaults_without_variables() {
        let config = ShellConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("DOMAINSHELL_API_URL", "http://localhost:8080/v1/domain/"),
            ("DOMAINSHELL_TIMEOUT_SECS", "5"),
            ("DOMAINSHELL_HISTORY_FILE", "/tmp/ds/history.txt"),
            ("DOMAINSHELL_PROMPT", "> "),
            ("DOMAINSHELL_NO_SPINNER", "1"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/v1/domain");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.history_path, Some(PathBuf::from("/tmp/ds/history.txt")));
        assert_eq!(config.prompt, "> ");
        assert!(!config.show_spinner);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let err = ShellConfig::from_lookup(lookup_from(&[("DOMAINSHELL_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ShellError::Config { .. }));

        let err = ShellConfig::from_lookup(lookup_from(&[("DOMAINSHELL_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ShellError::Config { .. }));
    }
}
