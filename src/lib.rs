// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! vibecheck - git commit-msg hook that wants emoji and slang.
//!
//! Git hands the hook the path of the draft commit message. vibecheck reads it,
//! runs the enabled checks and exits 0 to accept or 1 to reject the commit.
//!
//! # Features
//!
//! - **Emoji check**: at least one emoji somewhere in the message
//! - **Slang check**: at least one term from a curated wordlist
//! - **Guidance**: a random menu of emoji and slang on rejection
//! - **Media feedback**: best-effort clip playback through the OS player
//! - **Git Hooks**: install and remove the commit-msg hook
//!
//! # Example
//!
//! ```
//! use vibecheck::config::{CheckKind, VibeConfig};
//! use vibecheck::rules::RuleEngine;
//!
//! let mut config = VibeConfig::default();
//! config.checks.enabled = vec![CheckKind::Emoji];
//!
//! let engine = RuleEngine::new(config);
//! assert!(engine.validate_str("✨ Add new feature").is_valid());
//! assert!(!engine.validate_str("Add new feature").is_valid());
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod hooks;
pub mod lexicon;
pub mod media;
pub mod rules;

// Re-exports for convenience
pub use config::VibeConfig;
pub use error::{Result, VibeError};
