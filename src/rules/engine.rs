// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::VibeConfig;
use crate::error::Result;
use std::path::Path;

use super::builtin::{builtin_rules, Rule};
use super::validator::ValidationResult;

/// Rule engine for validating commit messages.
#[derive(Debug)]
pub struct RuleEngine {
    config: VibeConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine with the checks enabled in the configuration.
    pub fn new(config: VibeConfig) -> Self {
        let rules = builtin_rules(&config);
        Self { config, rules }
    }

    /// Add a custom rule to the engine.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// The configuration the engine was built from.
    pub fn config(&self) -> &VibeConfig {
        &self.config
    }

    /// Validate a commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.subject());

        for rule in &self.rules {
            result.checks.push(rule.kind());
            if let Some(issue) = rule.check(message) {
                tracing::debug!("Rule {} raised {}", rule.name(), issue.code);
                result.push(issue);
            }
        }

        result
    }

    /// Validate a commit message string.
    pub fn validate_str(&self, text: &str) -> ValidationResult {
        self.validate(&CommitMessage::new(text, &self.config.message))
    }

    /// Read and validate the commit message file git hands to the hook.
    pub fn check_file(&self, path: &Path) -> Result<ValidationResult> {
        let message = CommitMessage::from_file(path, &self.config.message)?;
        Ok(self.validate(&message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckKind;

    fn engine(checks: &[CheckKind]) -> RuleEngine {
        let mut config = VibeConfig::default();
        config.checks.enabled = checks.to_vec();
        RuleEngine::new(config)
    }

    #[test]
    fn test_plain_message_rejected() {
        let result = engine(&[CheckKind::Emoji, CheckKind::Slang]).validate_str("Add new feature");
        assert_eq!(result.exit_code(), 1);
        assert_eq!(
            result.failed_checks(),
            vec![CheckKind::Emoji, CheckKind::Slang]
        );
    }

    #[test]
    fn test_emoji_only_variant() {
        let result = engine(&[CheckKind::Emoji]).validate_str("✨ Add new feature");
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.checks, vec![CheckKind::Emoji]);
    }

    #[test]
    fn test_extended_variant() {
        let engine = engine(&[CheckKind::Emoji, CheckKind::Slang]);

        let result = engine.validate_str("✨ Add new feature");
        assert_eq!(result.exit_code(), 1);
        assert_eq!(result.failed_checks(), vec![CheckKind::Slang]);

        let result = engine.validate_str("✨ no cap this update bussin fr fr");
        assert_eq!(result.exit_code(), 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_checks_accepts_everything() {
        let result = engine(&[]).validate_str("");
        assert!(result.is_valid());
        assert!(result.checks.is_empty());
    }

    #[test]
    fn test_same_input_same_outcome() {
        let engine = engine(&[CheckKind::Emoji, CheckKind::Slang]);
        let first = engine.validate_str("🐛 fix crash, low key");
        let second = engine.validate_str("🐛 fix crash, low key");
        assert_eq!(first.exit_code(), second.exit_code());
        assert_eq!(first.subject, "🐛 fix crash, low key");
    }

    #[test]
    fn test_check_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "🚀 ship it, no cap\n# comment\n").unwrap();

        let result = engine(&[CheckKind::Emoji, CheckKind::Slang])
            .check_file(&path)
            .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_check_missing_file() {
        let result = engine(&[CheckKind::Emoji]).check_file(Path::new("/no/such/file"));
        assert!(result.is_err());
    }
}
