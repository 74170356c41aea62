// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use crate::config::VibeConfig;
use crate::error::{CommitError, ConfigError, Result, ResultExt, VibeError};
use crate::hooks::HookManager;
use crate::lexicon::SlangWordlist;
use crate::media::{self, Clip};
use crate::rules::{guidance, Guidance, RuleEngine};

use super::args::{Cli, Commands, ConfigPreset, HooksAction, InitArgs, MenuArgs, OutputFormat};

/// Run the CLI with the given arguments and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let mut config = if let Some(config_path) = &cli.config {
        VibeConfig::load_from(config_path)?
    } else {
        VibeConfig::load()?
    };

    if !cli.checks.is_empty() {
        config.checks.enabled = cli.checks.clone();
    }
    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    match &cli.command {
        Some(Commands::Hooks(args)) => run_hooks(&args.action).map(|_| 0),
        Some(Commands::Menu(args)) => run_menu(&config, args).map(|_| 0),
        Some(Commands::Init(args)) => run_init(args).map(|_| 0),
        None => {
            let path = cli
                .message_file
                .as_deref()
                .ok_or(VibeError::Commit(CommitError::MissingPath))?;
            run_check(&cli, config, path)
        }
    }
}

/// Validate the commit message file: the hook entry point.
fn run_check(cli: &Cli, config: VibeConfig, path: &Path) -> Result<i32> {
    tracing::debug!(
        "Checking {:?} with checks {:?}",
        path,
        config.checks.enabled
    );

    let engine = RuleEngine::new(config);
    let result = engine.check_file(path)?;
    let config = engine.config();

    result.print(cli.format);
    if result.is_valid() {
        tracing::debug!("Commit accepted");
    } else if cli.format != Some(OutputFormat::Json) {
        Guidance::new(config).print(&result);
    }

    let player = media::player_for(&config.media, cli.no_media);
    for clip in Clip::for_outcome(&result.failed_checks()) {
        media::play_best_effort(player.as_ref(), clip);
    }

    Ok(result.exit_code())
}

/// Run the hooks command.
fn run_hooks(action: &HooksAction) -> Result<()> {
    tracing::debug!("Running hooks command: {:?}", action);

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { force } => {
            manager.install_all(*force)?;
            println!("✓ Installed commit-msg hook");
        }
        HooksAction::Uninstall => {
            manager.uninstall_all()?;
            println!("✓ Uninstalled commit-msg hook");
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status()? {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the menu command.
fn run_menu(config: &VibeConfig, args: &MenuArgs) -> Result<()> {
    let size = args.size.unwrap_or(config.menu.size);
    let mut rng = rand::rng();

    let rows = if args.slang {
        guidance::slang_menu(&SlangWordlist::from_config(&config.slang), size, &mut rng)
    } else {
        guidance::emoji_menu(size, &mut rng)
    };

    for row in rows {
        println!("{}", row);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::default::{emoji_only_config, example_config};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("vibecheck.toml");

    if config_path.exists() && !args.force {
        return Err(VibeError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Emoji) => emoji_only_config(),
        Some(ConfigPreset::Vibes) | None => example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created vibecheck.toml");

    Ok(())
}
