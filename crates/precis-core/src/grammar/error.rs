use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by grammar engines.
pub enum GrammarError {
    /// The engine could not be reached or the request timed out.
    #[error("grammar engine request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The engine answered with a non-success status.
    #[error("grammar engine returned status {status}: {body}")]
    EngineStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (truncated).
        body: String,
    },

    /// The checker was built with an unusable configuration.
    #[error("invalid grammar engine configuration: {reason}")]
    InvalidConfig {
        /// Error message.
        reason: String,
    },
}
