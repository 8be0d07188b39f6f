use thiserror::Error;

/// SDK-specific errors
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("missing required parameters ({})", .0.join(", "))]
    MissingParams(Vec<String>),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_lists_every_name() {
        let err = SdkError::MissingParams(vec!["sym".to_string(), "lmt".to_string()]);
        assert_eq!(err.to_string(), "missing required parameters (sym, lmt)");
    }

    #[test]
    fn test_api_error_preserves_status_and_body() {
        let err = SdkError::Api {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: r#"{"error":3}"#.to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("400"));
        assert!(rendered.contains(r#"{"error":3}"#));
    }
}
