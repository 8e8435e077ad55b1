use thiserror::Error;

pub type RagResult<T> = Result<T, RagError>;

/// Crate-wide error type. Backend errors display as the bare detail text so
/// the widget can prefix them itself when surfacing to the user.
#[derive(Debug, Error)]
pub enum RagError {
    #[error("{message}")]
    Backend { message: String },

    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("logging error: {message}")]
    Logging { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RagError {
    pub fn backend_error(message: impl Into<String>) -> Self {
        RagError::Backend {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        RagError::Config {
            message: message.into(),
        }
    }

    pub fn logging_error(message: impl Into<String>) -> Self {
        RagError::Logging {
            message: message.into(),
        }
    }
}
