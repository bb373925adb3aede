//! Error types for sortstep.
//!
//! Every fallible operation returns `Result<T, VizError>`. Rejected
//! playback commands are errors too, but recoverable ones: the controller
//! is left exactly as it was before the call.

use std::time::Duration;

use thiserror::Error;

use crate::playback::RunState;

/// Result type alias for sortstep operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all sortstep operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== Playback =====
    /// A command was issued in a run state that does not allow it.
    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        /// Name of the rejected command.
        operation: &'static str,
        /// Run state at the time of the call.
        state: RunState,
    },

    /// A step was requested before the previous one finished displaying.
    #[error("previous step still displaying ({}ms remaining)", remaining.as_millis())]
    Busy {
        /// Time left until the controller accepts the next step.
        remaining: Duration,
    },

    // ===== Input =====
    /// A value in a user-supplied sequence is not an integer.
    #[error("invalid value '{token}': expected an integer")]
    InvalidValue {
        /// The offending token.
        token: String,
    },

    // ===== Configuration =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing or emitting error.
    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Output =====
    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendering surface failed to draw.
    #[error("Render error: {0}")]
    Render(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a render error.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Create an invalid transition error.
    #[must_use]
    pub const fn transition(operation: &'static str, state: RunState) -> Self {
        Self::InvalidTransition { operation, state }
    }

    /// Whether the error only rejected a command and left state untouched.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. } | Self::Busy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let err = VizError::transition("advance", RunState::Idle);
        let msg = err.to_string();
        assert!(msg.contains("advance"));
        assert!(msg.contains("idle"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_busy_display() {
        let err = VizError::Busy {
            remaining: Duration::from_millis(250),
        };
        assert!(err.to_string().contains("250ms"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_config() {
        let err = VizError::config("min exceeds max");
        assert!(!err.is_recoverable());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("min exceeds max"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = VizError::InvalidValue {
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_error_render() {
        let err = VizError::render("terminal closed");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("terminal closed"));
    }

    #[test]
    fn test_error_from_io() {
        let err: VizError = std::io::Error::other("broken pipe").into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_yaml() {
        let parsed: Result<Vec<i64>, _> = serde_yaml::from_str("{{{{not yaml");
        let err: VizError = parsed.err().map(Into::into).expect("yaml must fail");
        assert!(err.to_string().contains("YAML error"));
    }
}
