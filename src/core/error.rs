//! Error types for the service logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Text or integer that does not name a level
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("LOUD");
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));

        let err = LoggerError::config("output format", "unknown format 'xml'");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("LOUD");
        assert_eq!(err.to_string(), "Invalid log level: 'LOUD'");

        let err = LoggerError::config("output format", "unknown format 'xml'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for output format: unknown format 'xml'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader went away");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("reader went away"));
    }
}
