use std::fmt;

/// Error types for urlformat operations
///
/// The classifier itself never fails; these cover configuration, input
/// loading and the public suffix dataset.
#[derive(Debug)]
pub enum UrlFormatError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON input parsing error
    Json(serde_json::Error),

    /// Public suffix list could not be loaded
    PublicSuffix(String),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UrlFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlFormatError::Io(err) => write!(f, "IO error: {err}"),
            UrlFormatError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlFormatError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlFormatError::Json(err) => write!(f, "JSON parsing error: {err}"),
            UrlFormatError::PublicSuffix(msg) => write!(f, "Public suffix list error: {msg}"),
            UrlFormatError::FileNotFound(path) => write!(f, "File not found: {path}"),
            UrlFormatError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlFormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlFormatError::Io(err) => Some(err),
            UrlFormatError::TomlParsing(err) => Some(err),
            UrlFormatError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlFormatError {
    fn from(err: std::io::Error) -> Self {
        UrlFormatError::Io(err)
    }
}

impl From<toml::de::Error> for UrlFormatError {
    fn from(err: toml::de::Error) -> Self {
        UrlFormatError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UrlFormatError {
    fn from(err: serde_json::Error) -> Self {
        UrlFormatError::Json(err)
    }
}

/// Type alias for Results using UrlFormatError
pub type Result<T> = std::result::Result<T, UrlFormatError>;
