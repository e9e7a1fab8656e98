use thiserror::Error;

/// Errors returned by checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("unknown checkout step: {0}")]
    UnknownStep(String),

    #[error("payment sdk is missing capability: {0}")]
    MissingCapability(String),

    #[error("payment sdk error: {0}")]
    SdkError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("http error: {0}")]
    HttpError(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
