// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and `init` templates.

use super::schema::VibeConfig;

/// Get the default configuration.
pub fn default_config() -> VibeConfig {
    VibeConfig::default()
}

/// Configuration that only requires an emoji.
pub fn emoji_only_config() -> &'static str {
    r#"# vibecheck configuration (emoji only)
[checks]
enabled = ["emoji"]

[media]
enabled = true
dir = "static/video"

[media.clips]
emoji = "ganondorf_laugh.mp4"
accepted = "wombo_combo.mp4"
"#
}

/// Generate an example configuration file with every option.
pub fn example_config() -> &'static str {
    r##"# vibecheck configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Checks a commit message must pass
[checks]
enabled = ["emoji", "slang"]

# Commit message cleanup, same as git's "strip" mode
[message]
strip_comments = true
comment_char = "#"

# Extra slang terms (matched case-insensitively, anywhere in the message)
[slang]
words = []
replace_builtin = false

# Suggestions shown when a commit is rejected: `size` slang terms and an
# `emoji_grid` x `emoji_grid` square of emoji
[menu]
size = 5
emoji_grid = 5

# Media feedback: one clip per failed check, or `accepted` on success
[media]
enabled = true
dir = "static/video"
wait = false
# command = ["mpv", "--really-quiet"]
# fallback_command = ["xdg-open"]

[media.clips]
emoji = "ganondorf_laugh.mp4"
slang = "no_rizz.mp4"
accepted = "wombo_combo.mp4"

# UI configuration
[ui]
color = true
hints = true
"##
}
