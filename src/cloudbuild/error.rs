use thiserror::Error;

/// Why an interactive answer was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Value is required")]
    Required,
}

#[derive(Error, Debug)]
pub enum CloudBuildError {
    #[error("Unknown command: {0}")]
    CommandNotFound(String),

    #[error("Flag error: {0}")]
    Flags(String),

    #[error("Invalid answer: {0}")]
    Validation(#[from] ValidationError),

    #[error("Interactive prompt aborted: {0}")]
    InteractionAborted(String),

    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),
}

impl From<reqwest::Error> for CloudBuildError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CloudBuildError::Remote {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => CloudBuildError::Http(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudBuildError>;
