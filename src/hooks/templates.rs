// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker line identifying scripts written by vibecheck.
pub const HOOK_MARKER: &str = "# vibecheck git hook";

/// Hooks vibecheck knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    CommitMsg,
}

impl HookTemplate {
    /// All supported hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// File name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n{}\n# Generated by vibecheck v{}\n\nexec vibecheck \"$1\"\n",
                HOOK_MARKER,
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_commit_msg() {
        let script = HookTemplate::CommitMsg.generate();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.contains("exec vibecheck \"$1\""));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "commit-msg".parse::<HookTemplate>(),
            Ok(HookTemplate::CommitMsg)
        );
        assert!("pre-push".parse::<HookTemplate>().is_err());
    }
}
