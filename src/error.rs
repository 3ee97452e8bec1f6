use thiserror::Error;

/// Unified error type for publish-npm operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Not in a git checkout")]
    NotOnGit,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Version {0} is not valid for Release")]
    InvalidRelease(String),

    #[error("Environment variable {0} is not set")]
    MissingEnvironment(String),

    #[error("Shell command failed: {0}")]
    Shell(String),

    #[error("Artifact publishing failed: {0}")]
    Artifact(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in publish-npm
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PublishError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PublishError::Version(msg.into())
    }

    /// Create a shell error with context
    pub fn shell(msg: impl Into<String>) -> Self {
        PublishError::Shell(msg.into())
    }

    /// Create an artifact publishing error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        PublishError::Artifact(msg.into())
    }
}

impl From<toml::de::Error> for PublishError {
    fn from(err: toml::de::Error) -> Self {
        PublishError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PublishError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_release_message() {
        let err = PublishError::InvalidRelease("1.0.1".to_string());
        assert_eq!(err.to_string(), "Version 1.0.1 is not valid for Release");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PublishError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: PublishError = toml_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PublishError::config("x"), "Configuration error"),
            (PublishError::version("x"), "Version parsing error"),
            (PublishError::shell("x"), "Shell command failed"),
            (PublishError::artifact("x"), "Artifact publishing failed"),
            (
                PublishError::MissingEnvironment("CIRCLE_TAG".to_string()),
                "Environment variable CIRCLE_TAG",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
