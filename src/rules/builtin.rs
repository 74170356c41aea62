// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::CommitMessage;
use crate::config::{CheckKind, VibeConfig};
use crate::lexicon::{self, SlangWordlist};

use super::validator::ValidationIssue;

/// A check run against every commit message.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return an issue if validation fails.
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue>;

    /// The check this rule implements.
    fn kind(&self) -> CheckKind;

    /// Get the rule name.
    fn name(&self) -> &str {
        self.kind().as_str()
    }
}

/// Build the rules for every enabled check, in configured order.
pub fn builtin_rules(config: &VibeConfig) -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();

    for kind in &config.checks.enabled {
        if rules.iter().any(|r| r.kind() == *kind) {
            continue;
        }
        match kind {
            CheckKind::Emoji => rules.push(Box::new(EmojiRule)),
            CheckKind::Slang => rules.push(Box::new(SlangRule::new(
                SlangWordlist::from_config(&config.slang),
            ))),
        }
    }

    rules
}

/// Requires at least one emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiRule;

impl Rule for EmojiRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        if let Some(found) = lexicon::find_emoji(message.text()) {
            tracing::debug!("Found emoji {:?}", found);
            return None;
        }

        Some(ValidationIssue {
            code: "emoji-missing".to_string(),
            message: "Commit message has no emoji".to_string(),
            suggestion: Some("Put an emoji in front of the subject, e.g. ✨ add parser".to_string()),
            is_error: true,
            check: CheckKind::Emoji,
        })
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Emoji
    }
}

/// Requires at least one slang term from the wordlist.
#[derive(Debug, Clone)]
pub struct SlangRule {
    wordlist: SlangWordlist,
}

impl SlangRule {
    pub fn new(wordlist: SlangWordlist) -> Self {
        Self { wordlist }
    }

    pub fn wordlist(&self) -> &SlangWordlist {
        &self.wordlist
    }
}

impl Rule for SlangRule {
    fn check(&self, message: &CommitMessage) -> Option<ValidationIssue> {
        let text = message.text();

        let Some(found) = self.wordlist.find_in(text) else {
            return Some(ValidationIssue {
                code: "slang-missing".to_string(),
                message: "Commit message has no slang".to_string(),
                suggestion: Some("Say it like you mean it, e.g. ✨ add parser, no cap".to_string()),
                is_error: true,
                check: CheckKind::Slang,
            });
        };

        tracing::debug!("Found slang {:?}", found);

        // Substring matches pass; flag the ones that only hit inside a word.
        if self.wordlist.find_word(text).is_some() {
            return None;
        }

        Some(ValidationIssue {
            code: "slang-partial".to_string(),
            message: format!("Slang '{}' only appears inside a longer word", found),
            suggestion: Some("Use the term on its own so the vibe is intentional".to_string()),
            is_error: false,
            check: CheckKind::Slang,
        })
    }

    fn kind(&self) -> CheckKind {
        CheckKind::Slang
    }
}
