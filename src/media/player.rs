// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Clip playback through the platform's command-line players.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{CheckKind, ClipsConfig, MediaConfig};
use crate::error::PlaybackError;

/// Placeholder replaced by the clip path in player arguments.
const FILE_PLACEHOLDER: &str = "{file}";

/// A clip the hook can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Played when the given check fails.
    Rejected(CheckKind),
    /// Played when a commit is accepted.
    Accepted,
}

impl Clip {
    pub fn as_str(&self) -> &'static str {
        match self {
            Clip::Rejected(kind) => kind.as_str(),
            Clip::Accepted => "accepted",
        }
    }

    /// Clips for a finished check: one per failed check, in order, or the
    /// accepted clip when nothing failed.
    pub fn for_outcome(failed: &[CheckKind]) -> Vec<Clip> {
        if failed.is_empty() {
            vec![Clip::Accepted]
        } else {
            failed.iter().copied().map(Clip::Rejected).collect()
        }
    }
}

impl std::fmt::Display for Clip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Something that can play a clip.
pub trait MediaPlayer {
    /// Play the clip, returning once it started (or finished, when waiting).
    fn play(&self, clip: Clip) -> Result<(), PlaybackError>;
}

/// Player used when media is turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlayer;

impl MediaPlayer for NullPlayer {
    fn play(&self, clip: Clip) -> Result<(), PlaybackError> {
        tracing::debug!("Media disabled, not playing {} clip", clip);
        Ok(())
    }
}

/// An external player invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    program: String,
    args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Build from an argv list as written in the config file.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Primary and fallback players for the current OS.
    pub fn platform_defaults() -> (Option<Self>, Option<Self>) {
        Self::defaults_for(std::env::consts::OS)
    }

    /// Primary and fallback players for an OS name as reported by
    /// `std::env::consts::OS`.
    pub fn defaults_for(os: &str) -> (Option<Self>, Option<Self>) {
        match os {
            "macos" => (
                Some(Self::new("afplay", &[])),
                Some(Self::new("open", &[])),
            ),
            // Windows Media Player handles mp3 and mp4; `start` hands the
            // file to whatever is associated with it.
            "windows" => (
                Some(Self::new(
                    "cmd",
                    &["/C", "start", "/min", "wmplayer", FILE_PLACEHOLDER],
                )),
                Some(Self::new("cmd", &["/C", "start", "", FILE_PLACEHOLDER])),
            ),
            _ => (
                Some(Self::new("ffplay", &["-autoexit", "-loglevel", "quiet"])),
                Some(Self::new("xdg-open", &[])),
            ),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the clip path substituted, or appended when no argument
    /// mentions it.
    pub fn args_for(&self, file: &Path) -> Vec<String> {
        let file = file.display().to_string();
        if self.args.iter().any(|a| a.contains(FILE_PLACEHOLDER)) {
            self.args
                .iter()
                .map(|a| a.replace(FILE_PLACEHOLDER, &file))
                .collect()
        } else {
            let mut args = self.args.clone();
            args.push(file);
            args
        }
    }

    /// Run the player. Without `wait` the child is left running and only a
    /// failure to spawn counts as an error.
    pub fn run(&self, file: &Path, wait: bool) -> Result<(), PlaybackError> {
        let failed = |message: String| PlaybackError::CommandFailed {
            program: self.program.clone(),
            message,
        };

        let mut command = Command::new(&self.program);
        command
            .args(self.args_for(file))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        tracing::debug!("Running player {:?} (wait: {})", command, wait);

        if wait {
            let status = command.status().map_err(|e| failed(e.to_string()))?;
            if status.success() {
                Ok(())
            } else {
                Err(failed(format!("exited with {}", status)))
            }
        } else {
            command
                .spawn()
                .map(|_child| ())
                .map_err(|e| failed(e.to_string()))
        }
    }
}

/// Plays clips from a directory with a primary and a fallback command.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    dir: PathBuf,
    clips: ClipsConfig,
    wait: bool,
    primary: Option<PlayerCommand>,
    fallback: Option<PlayerCommand>,
}

impl CommandPlayer {
    /// Build a player from the media configuration, filling in the platform
    /// commands where none are configured.
    pub fn from_config(config: &MediaConfig) -> Self {
        let (default_primary, default_fallback) = PlayerCommand::platform_defaults();

        let primary = match &config.command {
            Some(argv) => PlayerCommand::from_argv(argv),
            None => default_primary,
        };
        let fallback = match &config.fallback_command {
            Some(argv) => PlayerCommand::from_argv(argv),
            None => default_fallback,
        };

        Self {
            dir: config.dir.clone(),
            clips: config.clips.clone(),
            wait: config.wait,
            primary,
            fallback,
        }
    }

    /// Path of a clip, if one is configured.
    pub fn clip_path(&self, clip: Clip) -> Option<PathBuf> {
        let name = match clip {
            Clip::Rejected(kind) => self.clips.for_check(kind),
            Clip::Accepted => self.clips.accepted.as_ref(),
        }?;
        Some(self.dir.join(name))
    }
}

impl MediaPlayer for CommandPlayer {
    fn play(&self, clip: Clip) -> Result<(), PlaybackError> {
        let path = self.clip_path(clip).ok_or_else(|| PlaybackError::NotConfigured {
            clip: clip.to_string(),
        })?;

        if !path.exists() {
            return Err(PlaybackError::ClipNotFound { path });
        }

        let mut last_error = PlaybackError::NoCommand;
        for command in [&self.primary, &self.fallback].into_iter().flatten() {
            match command.run(&path, self.wait) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!("Player {} failed: {}", command.program(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Whether a playback failure is just missing media rather than a broken
/// player. Those are only logged at debug level.
fn is_missing_media(err: &PlaybackError) -> bool {
    matches!(
        err,
        PlaybackError::NotConfigured { .. } | PlaybackError::ClipNotFound { .. }
    )
}

/// Play a clip, logging instead of failing.
pub fn play_best_effort(player: &dyn MediaPlayer, clip: Clip) {
    match player.play(clip) {
        Ok(()) => {}
        Err(e) if is_missing_media(&e) => {
            tracing::debug!("Skipping {} clip: {}", clip, e);
        }
        Err(e) => tracing::warn!("Could not play {} clip: {}", clip, e),
    }
}

/// Pick the player for this run.
pub fn player_for(config: &MediaConfig, disabled: bool) -> Box<dyn MediaPlayer> {
    if disabled || !config.enabled {
        Box::new(NullPlayer)
    } else {
        Box::new(CommandPlayer::from_config(config))
    }
}
