use async_trait::async_trait;
use tracing::debug;

use crate::text::split_sentences;

use super::{GrammarChecker, GrammarError, GrammarIssue};

pub const RULE_SENTENCE_START: &str = "UPPERCASE_SENTENCE_START";
pub const RULE_LOWERCASE_I: &str = "I_LOWERCASE";
pub const RULE_WORD_REPEAT: &str = "ENGLISH_WORD_REPEAT_RULE";
pub const RULE_SPACE_BEFORE_PUNCT: &str = "COMMA_PARENTHESIS_WHITESPACE";
pub const RULE_MISSING_END_PUNCT: &str = "PUNCTUATION_PARAGRAPH_END";

const CLOSING_PUNCT: [char; 6] = [',', '.', ';', ':', '!', '?'];
const TERMINATORS: [char; 6] = ['.', '!', '?', '"', '\'', ')'];

/// Offline grammar checker covering a handful of mechanical rules.
///
/// Rule ids follow LanguageTool naming so logs from both engines read the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedChecker;

impl RuleBasedChecker {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form of [`GrammarChecker::check`].
    pub fn find_issues(&self, text: &str) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();

        for sentence in split_sentences(text) {
            if sentence.chars().next().is_some_and(char::is_lowercase) {
                issues.push(GrammarIssue::new(
                    RULE_SENTENCE_START,
                    "This sentence does not start with an uppercase letter.",
                ));
            }
        }

        let mut previous: Option<String> = None;
        for token in text.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }

            if word == "i" {
                issues.push(GrammarIssue::new(
                    RULE_LOWERCASE_I,
                    "The pronoun 'I' is always capitalized.",
                ));
            }

            let lowered = word.to_lowercase();
            if previous.as_deref() == Some(lowered.as_str()) {
                issues.push(GrammarIssue::new(
                    RULE_WORD_REPEAT,
                    format!("Possible typo: you repeated the word '{}'.", word),
                ));
            }
            previous = Some(lowered);
        }

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c.is_whitespace() && chars.peek().is_some_and(|next| CLOSING_PUNCT.contains(next))
            {
                issues.push(GrammarIssue::new(
                    RULE_SPACE_BEFORE_PUNCT,
                    "Don't put a space before punctuation.",
                ));
            }
        }

        if let Some(last) = text.trim_end().chars().last()
            && !TERMINATORS.contains(&last)
        {
            issues.push(GrammarIssue::new(
                RULE_MISSING_END_PUNCT,
                "The text does not end with punctuation.",
            ));
        }

        debug!(issues = issues.len(), "Rule-based grammar check complete");
        issues
    }
}

#[async_trait]
impl GrammarChecker for RuleBasedChecker {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Ok(self.find_issues(text))
    }

    fn mode(&self) -> &'static str {
        "rules"
    }
}
