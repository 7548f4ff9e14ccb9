use thiserror::Error;

/// Errors raised at the edges of the crate: reading record files and
/// resolving configuration. The ranking computation itself never fails.
#[derive(Error, Debug, Clone)]
pub enum ResultsError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ResultsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ResultsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ResultsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<String> for ResultsError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ResultsError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
