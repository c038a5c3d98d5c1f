use std::path::PathBuf;

use thiserror::Error;

/// Rejected estimator input: a negative or non-finite number, or an
/// unrecognized translation method.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid input for {field}: {reason}")]
pub(crate) struct InvalidInput {
    pub(crate) field: &'static str,
    pub(crate) reason: String,
}

impl InvalidInput {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to serialize JSON output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let e = InvalidInput::new("image_count", "must be non-negative (got -3)");
        assert_eq!(
            e.to_string(),
            "Invalid input for image_count: must be non-negative (got -3)"
        );
    }

    #[test]
    fn app_error_invalid_input_is_transparent() {
        let app: AppError = InvalidInput::new("method", "unknown").into();
        assert_eq!(app.to_string(), "Invalid input for method: unknown");
    }

    #[test]
    fn app_error_display_locale() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn app_error_display_config() {
        let e = AppError::Config {
            path: PathBuf::from("/tmp/edcost.toml"),
            message: "file not found".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Failed to load config /tmp/edcost.toml: file not found"
        );
    }

    #[test]
    fn jq_error_not_found() {
        assert_eq!(
            JqError::NotFound.to_string(),
            "jq not found. Please install jq to use --jq option."
        );
    }

    #[test]
    fn app_error_from_jq_error() {
        let jq = JqError::Filter("bad filter".to_string());
        let app: AppError = jq.into();
        assert_eq!(app.to_string(), "jq error: bad filter");
    }
}
