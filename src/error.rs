use thiserror::Error as ThisError;

/// Different errors that the application can raise
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned when a required environment variable is missing or empty
    #[error("missing environment variable {0}")]
    MissingEnv(String),
    /// Error returned by the SNS API
    #[error("unexpected sns error")]
    Sns(#[from] aws_sdk_sns::Error),
    /// Error returned if a log entry cannot be serialized into a notification
    #[error("failed to serialize notification message")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a failed webhook delivery.
/// The notifier logs these instead of failing the invocation.
#[derive(Debug, ThisError)]
pub enum DeliveryError {
    /// The webhook answered with a non successful status code
    #[error("request failed: {code} {reason}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Canonical reason phrase for the status code
        reason: String,
    },
    /// The request never got a response: DNS, refused connection or timeout
    #[error("server connection failed: {0}")]
    Connection(#[from] reqwest::Error),
}
