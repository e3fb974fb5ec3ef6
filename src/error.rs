//! Error handling for domainshell

use thiserror::Error;

/// Main error type for domainshell
#[derive(Error, Debug, Clone)]
pub enum ShellError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Input error: {message}")]
    Input { message: String },
}

impl ShellError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Get the one-line message shown in the shell when a command fails
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::Network {
                message,
                status_code,
                ..
            } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("Request error{}: {}", status, message)
            }
            Self::Parse { message, .. } => format!("Decode error: {}", message),
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("File error{}: {}", path_info, message)
            }
            Self::Input { message } => format!("Input error: {}", message),
        }
    }
}

impl From<reqwest::Error> for ShellError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_decode() {
            Self::parse(err.to_string(), None)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::input(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_includes_status() {
        let err = ShellError::network("service unavailable", Some(503), None);
        assert_eq!(err.user_message(), "Request error (503): service unavailable");
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = ShellError::io("permission denied", Some("/tmp/history.txt".to_string()));
        assert!(err.user_message().contains("/tmp/history.txt"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: ShellError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ShellError::Parse { .. }));
    }
}
