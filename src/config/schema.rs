// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from vibecheck.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main configuration structure for vibecheck.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VibeConfig {
    /// Which checks a message must pass.
    pub checks: ChecksConfig,

    /// How the commit message file is cleaned up before checking.
    pub message: MessageConfig,

    /// Slang wordlist configuration.
    pub slang: SlangConfig,

    /// Rejection menu configuration.
    pub menu: MenuConfig,

    /// Media feedback configuration.
    pub media: MediaConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl VibeConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Whether a given check is enabled.
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        self.checks.enabled.contains(&kind)
    }
}

/// A check a commit message can be required to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// At least one emoji.
    Emoji,
    /// At least one slang term.
    Slang,
}

impl CheckKind {
    /// Get the string representation of the check.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Emoji => "emoji",
            CheckKind::Slang => "slang",
        }
    }

    /// Get all checks.
    pub fn all() -> &'static [CheckKind] {
        &[CheckKind::Emoji, CheckKind::Slang]
    }
}

impl std::str::FromStr for CheckKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emoji" | "emojis" => Ok(CheckKind::Emoji),
            "slang" => Ok(CheckKind::Slang),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enabled checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Checks that must all pass. An empty list accepts everything.
    pub enabled: Vec<CheckKind>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            enabled: CheckKind::all().to_vec(),
        }
    }
}

/// Commit message cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Drop comment lines and everything below the scissors line.
    pub strip_comments: bool,

    /// Character that starts a comment line.
    pub comment_char: char,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            strip_comments: true,
            comment_char: '#',
        }
    }
}

/// Slang wordlist configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SlangConfig {
    /// Extra terms accepted on top of the built-in list.
    pub words: Vec<String>,

    /// Use only `words`, ignoring the built-in list.
    pub replace_builtin: bool,
}

/// Rejection menu configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Number of slang terms drawn, and rows printed by `vibecheck menu`.
    pub size: usize,

    /// Side of the emoji square shown on rejection (5 gives 25 emoji).
    pub emoji_grid: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            size: 5,
            emoji_grid: 5,
        }
    }
}

/// Media feedback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Whether clips are played at all.
    pub enabled: bool,

    /// Directory holding the clips, relative to the hook's working directory.
    pub dir: PathBuf,

    /// Wait for the player to exit instead of detaching it.
    pub wait: bool,

    /// Primary player command; the clip path is appended.
    pub command: Option<Vec<String>>,

    /// Command tried when the primary one fails.
    pub fallback_command: Option<Vec<String>>,

    /// Clip file names.
    pub clips: ClipsConfig,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("static/video"),
            wait: false,
            command: None,
            fallback_command: None,
            clips: ClipsConfig::default(),
        }
    }
}

/// Clip file names, relative to [`MediaConfig::dir`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipsConfig {
    /// Played when the emoji check fails.
    pub emoji: Option<PathBuf>,

    /// Played when the slang check fails.
    pub slang: Option<PathBuf>,

    /// Played when a commit is accepted.
    pub accepted: Option<PathBuf>,
}

impl ClipsConfig {
    /// Clip for a failed check.
    pub fn for_check(&self, kind: CheckKind) -> Option<&PathBuf> {
        match kind {
            CheckKind::Emoji => self.emoji.as_ref(),
            CheckKind::Slang => self.slang.as_ref(),
        }
    }
}

impl Default for ClipsConfig {
    fn default() -> Self {
        Self {
            emoji: Some(PathBuf::from("ganondorf_laugh.mp4")),
            slang: Some(PathBuf::from("no_rizz.mp4")),
            accepted: Some(PathBuf::from("wombo_combo.mp4")),
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to print example messages on rejection.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}
