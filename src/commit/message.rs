// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message loading and cleanup.

use crate::config::MessageConfig;
use crate::error::{CommitError, Result, VibeError};
use std::path::Path;

/// Marker git writes above the diff in `commit --verbose`.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// A commit message as handed to the commit-msg hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    text: String,
}

impl CommitMessage {
    /// Build a message from raw file content.
    pub fn new(raw: impl Into<String>, config: &MessageConfig) -> Self {
        let raw = raw.into();
        let text = if config.strip_comments {
            strip_comments(&raw, config.comment_char)
        } else {
            raw.clone()
        };
        Self { raw, text }
    }

    /// Read the message file git passes to the hook.
    pub fn from_file(path: &Path, config: &MessageConfig) -> Result<Self> {
        tracing::debug!("Reading commit message from: {:?}", path);

        let raw = std::fs::read_to_string(path).map_err(|e| {
            VibeError::Commit(CommitError::ReadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        Ok(Self::new(raw, config))
    }

    /// The text the checks run against.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The file content as read.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First non-blank line of the checked text.
    pub fn subject(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// Whether nothing but whitespace is left after cleanup.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Drop comment lines and everything from the scissors line down.
fn strip_comments(raw: &str, comment_char: char) -> String {
    let mut kept = Vec::new();

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix(comment_char) {
            if rest.trim() == SCISSORS {
                break;
            }
            continue;
        }
        kept.push(line);
    }

    kept.join("\n").trim().to_string()
}
