use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by reference summary generators.
pub enum SummaryError {
    /// The upstream model/provider call failed.
    #[error("summary provider failed: {reason}")]
    ProviderFailed {
        /// Error message.
        reason: String,
    },

    /// The provider answered but produced no text.
    #[error("summary provider returned an empty summary")]
    EmptySummary,
}
