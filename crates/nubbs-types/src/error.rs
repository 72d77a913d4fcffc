//! Error types for the NuBBS shell.
//!
//! [`NubbsError`] covers configuration problems that stop a session from
//! starting and I/O failures on the shell's input or output. Faults raised
//! by an individual app while it runs are not represented here; the shell
//! reports those and keeps reading.

use thiserror::Error;

/// Top-level error type for the NuBBS shell.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NubbsError {
    // ── Configuration ────────────────────────────────────────────────

    /// An app name cannot be used as a command word.
    #[error("invalid app name {name:?}: {reason}")]
    InvalidAppName {
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// Two registered apps (or an app and a builtin) share a name.
    #[error("duplicate app name: {name}")]
    DuplicateApp {
        /// The name registered more than once.
        name: String,
    },

    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// The path that was requested.
        path: String,
    },

    // ── Runtime ──────────────────────────────────────────────────────

    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NubbsError {
    /// Whether this error is a configuration error, i.e. one that must
    /// prevent the session from starting.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAppName { .. }
                | Self::DuplicateApp { .. }
                | Self::ConfigInvalid { .. }
                | Self::ConfigNotFound { .. }
                | Self::Json(_)
        )
    }
}

/// Convenience alias used throughout the NuBBS crates.
pub type Result<T> = std::result::Result<T, NubbsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_app_name_display() {
        let err = NubbsError::InvalidAppName {
            name: "two words".into(),
            reason: "must not contain whitespace",
        };
        assert_eq!(
            err.to_string(),
            "invalid app name \"two words\": must not contain whitespace"
        );
    }

    #[test]
    fn duplicate_app_display() {
        let err = NubbsError::DuplicateApp {
            name: "welcome".into(),
        };
        assert_eq!(err.to_string(), "duplicate app name: welcome");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: NubbsError = io.into();
        assert!(matches!(err, NubbsError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn json_error_is_config_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: NubbsError = json_err.into();
        assert!(err.is_config_error());
    }

    #[test]
    fn registration_errors_are_config_errors() {
        assert!(NubbsError::DuplicateApp { name: "x".into() }.is_config_error());
        assert!(
            NubbsError::InvalidAppName {
                name: String::new(),
                reason: "must not be empty",
            }
            .is_config_error()
        );
        assert!(
            NubbsError::ConfigNotFound {
                path: "/nope".into()
            }
            .is_config_error()
        );
    }
}
