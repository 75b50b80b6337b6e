//! Error types for the dev.to publishing client.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DevToError>;

/// All failures a publish invocation can surface.
///
/// There is exactly one external effect per invocation (one HTTP call),
/// so there are no partial-failure or rollback variants, and nothing is
/// ever retried.
#[derive(Debug, Error)]
pub enum DevToError {
    /// The document path does not point at an existing file.
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The document cannot be used as a post (wrong extension, no
    /// front-matter block, underivable slug).
    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    /// A required front-matter field is absent.
    #[error("Missing front-matter field: {field}")]
    MissingField { field: String },

    /// Local configuration problem.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport-level failure talking to the API.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Business error reported by the API, e.g. a rejected credential or
    /// a duplicate article title.
    #[error("dev.to API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Filesystem error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The front-matter block is not valid YAML.
    #[error("Front-matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

impl DevToError {
    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid-document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Classifies how the error should be reported at exit.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A rejected credential will fail every invocation until the
            // environment is fixed.
            Self::Api { status: 401, .. } => ErrorSeverity::Fatal,
            Self::Config { .. } => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Error,
        }
    }
}

impl From<reqwest::Error> for DevToError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Severity classification used when reporting failures at exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Failure scoped to this invocation (bad document, network hiccup,
    /// remote business error).
    Error,
    /// Misconfiguration that every invocation will hit until fixed.
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        let err = DevToError::config_error("missing site url");
        assert!(matches!(err, DevToError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: missing site url");

        let err = DevToError::invalid_document("no front-matter");
        assert!(matches!(err, DevToError::InvalidDocument { .. }));
    }

    #[test]
    fn test_severity_classification() {
        let unauthorized = DevToError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(unauthorized.severity(), ErrorSeverity::Fatal);

        let rejected = DevToError::Api {
            status: 422,
            message: "Title has already been used".to_string(),
        };
        assert_eq!(rejected.severity(), ErrorSeverity::Error);

        assert_eq!(
            DevToError::config_error("bad").severity(),
            ErrorSeverity::Fatal
        );
        assert_eq!(
            DevToError::FileNotFound {
                path: "x.md".to_string()
            }
            .severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = DevToError::Api {
            status: 422,
            message: "Canonical url has already been taken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dev.to API error (422): Canonical url has already been taken"
        );
    }
}
