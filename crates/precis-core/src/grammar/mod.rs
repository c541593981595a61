//! Grammar checking.
//!
//! The penalty engine only needs a count of flagged issues. [`LanguageToolChecker`] asks
//! a LanguageTool server; [`RuleBasedChecker`] is a small deterministic local fallback
//! used when no server is configured.

pub mod error;
pub mod languagetool;
pub mod rules;


pub use error::GrammarError;
pub use languagetool::LanguageToolChecker;
pub use rules::RuleBasedChecker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One flagged writing problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    /// Engine rule identifier (e.g. `UPPERCASE_SENTENCE_START`).
    pub rule_id: String,
    /// Human readable description.
    pub message: String,
}

impl GrammarIssue {
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }
}

/// Enumerates grammar issues in a text.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Returns every issue found in `text`.
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError>;

    /// Number of issues in `text`. The engine always runs, blank text included.
    async fn count_issues(&self, text: &str) -> Result<usize, GrammarError> {
        Ok(self.check(text).await?.len())
    }

    /// Short label for readiness reporting (`"rules"`, `"languagetool"`, ...).
    fn mode(&self) -> &'static str;
}
