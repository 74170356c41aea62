// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::CheckKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vibecheck - commit-msg hook that wants emoji and slang
///
/// Git runs `vibecheck <MESSAGE_FILE>` before finalizing a commit. Exit code 0
/// lets the commit through, 1 rejects it.
#[derive(Parser, Debug)]
#[command(name = "vibecheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Git commit-msg hook that refuses commits without emoji (and slang)", long_about = None)]
pub struct Cli {
    /// Management command; omit it to check a message file
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the commit message file (passed by git)
    #[arg(value_name = "MESSAGE_FILE")]
    pub message_file: Option<PathBuf>,

    /// Checks to run, overriding the configuration (repeatable)
    #[arg(long = "check", value_enum, global = true)]
    pub checks: Vec<CheckKind>,

    /// Never play media clips
    #[arg(
        long,
        global = true,
        env = "VIBECHECK_NO_MEDIA",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_media: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage the commit-msg hook
    Hooks(HooksArgs),

    /// Print a random emoji (or slang) menu
    Menu(MenuArgs),

    /// Initialize vibecheck configuration
    Init(InitArgs),
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook, keeping it as a backup
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the menu command.
#[derive(Parser, Debug, Clone, Default)]
pub struct MenuArgs {
    /// Show slang instead of emoji
    #[arg(long)]
    pub slang: bool,

    /// Number of entries (defaults to the configured menu size)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Only require an emoji
    Emoji,
    /// Require an emoji and slang (recommended)
    Vibes,
}
