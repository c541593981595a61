use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest, ChatResponse};
use tracing::{debug, error};

use precis::{SummaryError, SummaryGenerator};

/// Instruction sent ahead of every passage.
pub const SUMMARY_INSTRUCTION: &str = "Summarize the passage provided by the user in a few \
sentences of plain prose. Reply with the summary only.";

/// Reference summaries from a chat model via `genai`, with sampling disabled.
#[derive(Clone)]
pub struct GenAiSummarizer {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenAiSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiSummarizer")
            .field("model", &self.model)
            .finish()
    }
}

impl GenAiSummarizer {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

pub fn build_summary_request(passage: &str) -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system(SUMMARY_INSTRUCTION),
        ChatMessage::user(passage),
    ])
}

pub fn summary_options() -> ChatOptions {
    ChatOptions::default().with_temperature(0.0)
}

/// Extracts the summary text; an answer without text is [`SummaryError::EmptySummary`].
pub fn summary_from_response(resp: &ChatResponse) -> Result<String, SummaryError> {
    let text = resp.first_text().unwrap_or_default().trim();
    if text.is_empty() {
        return Err(SummaryError::EmptySummary);
    }
    Ok(text.to_string())
}

#[async_trait]
impl SummaryGenerator for GenAiSummarizer {
    async fn generate_summary(&self, passage: &str) -> Result<String, SummaryError> {
        let options = summary_options();
        let resp = self
            .client
            .exec_chat(&self.model, build_summary_request(passage), Some(&options))
            .await
            .map_err(|e| {
                error!(model = %self.model, "Provider error: {}", e);
                SummaryError::ProviderFailed {
                    reason: e.to_string(),
                }
            })?;

        let summary = summary_from_response(&resp)?;
        debug!(model = %self.model, summary_len = summary.len(), "Provider summary received");
        Ok(summary)
    }

    fn mode(&self) -> &'static str {
        "genai"
    }
}
