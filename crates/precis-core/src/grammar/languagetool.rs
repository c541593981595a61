use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{GrammarChecker, GrammarError, GrammarIssue};

const CHECK_PATH: &str = "/v2/check";
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Client for a LanguageTool server (`POST /v2/check`).
#[derive(Debug, Clone)]
pub struct LanguageToolChecker {
    client: reqwest::Client,
    check_url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckMatch {
    #[serde(default)]
    pub message: String,
    pub rule: Option<CheckRule>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckRule {
    pub id: String,
}

impl CheckResponse {
    pub(crate) fn into_issues(self) -> Vec<GrammarIssue> {
        self.matches
            .into_iter()
            .map(|m| {
                let rule_id = m.rule.map(|r| r.id).unwrap_or_else(|| "UNKNOWN".to_string());
                GrammarIssue::new(rule_id, m.message)
            })
            .collect()
    }
}

impl LanguageToolChecker {
    /// Builds a client for `base_url` (e.g. `http://localhost:8081`).
    pub fn new(
        base_url: &str,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GrammarError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(GrammarError::InvalidConfig {
                reason: "LanguageTool base URL is empty".to_string(),
            });
        }

        let language = language.into();
        if language.trim().is_empty() {
            return Err(GrammarError::InvalidConfig {
                reason: "LanguageTool language is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            check_url: format!("{}{}", base_url, CHECK_PATH),
            language,
        })
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolChecker {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let response = self
            .client
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GrammarError::EngineStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let issues = response.json::<CheckResponse>().await?.into_issues();

        debug!(issues = issues.len(), "LanguageTool check complete");
        Ok(issues)
    }

    fn mode(&self) -> &'static str {
        "languagetool"
    }
}
