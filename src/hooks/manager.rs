// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the commit-msg hook.

use crate::error::{HookError, Result, VibeError};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
#[derive(Debug, Clone)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the repository containing the current directory.
    pub fn new() -> Result<Self> {
        Self::discover(Path::new("."))
    }

    /// Create a hook manager for the repository containing `path`. Honors
    /// `core.hooksPath`, resolved against the working tree when relative.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path).map_err(HookError::from)?;
        let hooks_dir = hooks_dir_for(&repo)?;
        tracing::debug!("Using hooks directory {:?}", hooks_dir);

        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                VibeError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Directory the hooks are written to.
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install(*template, force)?;
        }
        Ok(())
    }

    /// Install a hook. A foreign hook is only replaced with `force`, and is
    /// kept as `<hook>.backup`.
    pub fn install(&self, template: HookTemplate, force: bool) -> Result<()> {
        let hook = template.filename();
        let hook_path = self.hooks_dir.join(hook);
        let backup_path = self.hooks_dir.join(format!("{}.backup", hook));
        let install_failed = |message: String| {
            VibeError::Hook(HookError::InstallFailed {
                hook: hook.to_string(),
                message,
            })
        };

        if hook_path.exists() && !self.is_vibecheck_hook(&hook_path)? {
            if !force {
                return Err(VibeError::Hook(HookError::AlreadyExists {
                    hook: hook.to_string(),
                }));
            }
            if backup_path.exists() {
                return Err(VibeError::Hook(HookError::BackupExists { path: backup_path }));
            }
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
            tracing::debug!("Moved existing {} hook to {:?}", hook, backup_path);
        }

        fs::write(&hook_path, template.generate())
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&hook_path)
                .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&hook_path, perms)
                .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall(*template)?;
        }
        Ok(())
    }

    /// Remove a hook written by vibecheck and restore any backup.
    pub fn uninstall(&self, template: HookTemplate) -> Result<()> {
        let hook = template.filename();
        let hook_path = self.hooks_dir.join(hook);
        let backup_path = self.hooks_dir.join(format!("{}.backup", hook));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_vibecheck_hook(&hook_path)? {
            return Err(VibeError::Hook(HookError::RemoveFailed {
                hook: hook.to_string(),
                message: "Hook was not installed by vibecheck".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            VibeError::Hook(HookError::RemoveFailed {
                hook: hook.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                VibeError::Hook(HookError::RemoveFailed {
                    hook: hook.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Whether each hook is installed.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        let mut status = Vec::new();

        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed = hook_path.exists() && self.is_vibecheck_hook(&hook_path)?;
            status.push((template.filename().to_string(), installed));
        }

        Ok(status)
    }

    fn is_vibecheck_hook(&self, path: &Path) -> Result<bool> {
        // Foreign hooks can be binaries, so compare bytes.
        let content = fs::read(path).map_err(|e| {
            VibeError::Hook(HookError::InstallFailed {
                hook: path.display().to_string(),
                message: format!("Failed to read hook: {}", e),
            })
        })?;

        let marker = HOOK_MARKER.as_bytes();
        Ok(content.windows(marker.len()).any(|window| window == marker))
    }
}

fn hooks_dir_for(repo: &git2::Repository) -> Result<PathBuf> {
    let config = repo.config().map_err(HookError::from)?;
    let configured = match config.get_path("core.hooksPath") {
        Ok(path) => path,
        Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(repo.path().join("hooks")),
        Err(e) => return Err(HookError::from(e).into()),
    };

    if configured.is_absolute() {
        Ok(configured)
    } else {
        let base = repo.workdir().unwrap_or_else(|| repo.path());
        Ok(base.join(configured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> (tempfile::TempDir, HookManager) {
        let dir = tempfile::tempdir().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        let manager = HookManager::discover(dir.path()).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_not_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        let err = HookManager::discover(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            VibeError::Hook(HookError::NotARepository { .. })
        ));
    }

    #[test]
    fn test_install_and_status() {
        let (_dir, manager) = repo();
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), false)]);

        manager.install_all(false).unwrap();
        let script = fs::read_to_string(manager.hooks_dir().join("commit-msg")).unwrap();
        assert!(script.contains("exec vibecheck"));
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), true)]);

        // Reinstalling our own hook needs no force.
        manager.install_all(false).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_install_makes_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = repo();
        manager.install(HookTemplate::CommitMsg, false).unwrap();
        let mode = fs::metadata(manager.hooks_dir().join("commit-msg"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_foreign_hook_requires_force() {
        let (_dir, manager) = repo();
        let hook_path = manager.hooks_dir().join("commit-msg");
        fs::write(&hook_path, "#!/bin/sh\necho mine\n").unwrap();

        let err = manager.install(HookTemplate::CommitMsg, false).unwrap_err();
        assert!(matches!(err, VibeError::Hook(HookError::AlreadyExists { .. })));

        let err = manager.uninstall(HookTemplate::CommitMsg).unwrap_err();
        assert!(matches!(err, VibeError::Hook(HookError::RemoveFailed { .. })));
    }

    #[test]
    fn test_force_install_then_uninstall_restores_backup() {
        let (_dir, manager) = repo();
        let hook_path = manager.hooks_dir().join("commit-msg");
        fs::write(&hook_path, "#!/bin/sh\necho mine\n").unwrap();

        manager.install(HookTemplate::CommitMsg, true).unwrap();
        assert!(manager.hooks_dir().join("commit-msg.backup").exists());

        manager.uninstall_all().unwrap();
        assert_eq!(fs::read_to_string(&hook_path).unwrap(), "#!/bin/sh\necho mine\n");
        assert!(!manager.hooks_dir().join("commit-msg.backup").exists());
    }

    #[test]
    fn test_force_install_over_binary_hook() {
        let (_dir, manager) = repo();
        let hook_path = manager.hooks_dir().join("commit-msg");
        let binary = [0x7f, b'E', b'L', b'F', 0xff, 0xfe, 0x00, 0x80];
        fs::write(&hook_path, binary).unwrap();

        let err = manager.install(HookTemplate::CommitMsg, false).unwrap_err();
        assert!(matches!(err, VibeError::Hook(HookError::AlreadyExists { .. })));

        manager.install(HookTemplate::CommitMsg, true).unwrap();
        assert_eq!(fs::read(manager.hooks_dir().join("commit-msg.backup")).unwrap(), binary);
        assert_eq!(manager.status().unwrap(), vec![("commit-msg".to_string(), true)]);
    }

    #[test]
    fn test_force_install_keeps_existing_backup() {
        let (_dir, manager) = repo();
        let hook_path = manager.hooks_dir().join("commit-msg");
        let backup_path = manager.hooks_dir().join("commit-msg.backup");
        fs::write(&backup_path, "#!/bin/sh
echo older
").unwrap();
        fs::write(&hook_path, "#!/bin/sh
echo mine
").unwrap();

        let err = manager.install(HookTemplate::CommitMsg, true).unwrap_err();
        assert!(matches!(err, VibeError::Hook(HookError::BackupExists { .. })));
        assert_eq!(fs::read_to_string(&backup_path).unwrap(), "#!/bin/sh
echo older
");
        assert_eq!(fs::read_to_string(&hook_path).unwrap(), "#!/bin/sh
echo mine
");
    }

    #[test]
    fn test_hooks_path_config() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        repo.config()
            .unwrap()
            .set_str("core.hooksPath", "githooks")
            .unwrap();

        let manager = HookManager::discover(dir.path()).unwrap();
        assert!(manager.hooks_dir().ends_with("githooks"));
        assert!(!manager.hooks_dir().starts_with(repo.path()));

        manager.install_all(false).unwrap();
        assert!(dir.path().join("githooks").join("commit-msg").exists());
        assert!(!repo.path().join("hooks").join("commit-msg").exists());
    }

    #[test]
    fn test_uninstall_missing_is_noop() {
        let (_dir, manager) = repo();
        manager.uninstall_all().unwrap();
    }
}
