// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Emoji detection and the emoji suggestion table.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a single emoji grapheme start.
    ///
    /// Pictographs count with or without a variation selector, keycaps only
    /// with the combining enclosing keycap. Bare digits, `#` and `*` do not.
    static ref EMOJI_REGEX: Regex = Regex::new(
        r"\p{Extended_Pictographic}|\p{Emoji_Presentation}|[0-9#*]\x{FE0F}?\x{20E3}"
    )
    .unwrap();
}

/// An entry of the emoji suggestion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    /// The emoji itself.
    pub emoji: &'static str,
    /// Its common shortcode.
    pub code: &'static str,
    /// What the emoji usually marks in a commit.
    pub usage: &'static str,
}

const fn entry(emoji: &'static str, code: &'static str, usage: &'static str) -> EmojiEntry {
    EmojiEntry { emoji, code, usage }
}

/// Emojis suggested to authors of rejected commits.
pub const EMOJI_TABLE: &[EmojiEntry] = &[
    entry("✨", ":sparkles:", "Introduce new features"),
    entry("🐛", ":bug:", "Fix a bug"),
    entry("🔥", ":fire:", "Remove code or files"),
    entry("📝", ":memo:", "Add or update documentation"),
    entry("🚀", ":rocket:", "Deploy stuff"),
    entry("💄", ":lipstick:", "Add or update the UI and style files"),
    entry("🎉", ":tada:", "Begin a project"),
    entry("✅", ":white_check_mark:", "Add, update, or pass tests"),
    entry("🔒", ":lock:", "Fix security issues"),
    entry("🔖", ":bookmark:", "Release / version tags"),
    entry("🚨", ":rotating_light:", "Fix compiler / linter warnings"),
    entry("🚧", ":construction:", "Work in progress"),
    entry("💚", ":green_heart:", "Fix CI build"),
    entry("⬆️", ":arrow_up:", "Upgrade dependencies"),
    entry("⬇️", ":arrow_down:", "Downgrade dependencies"),
    entry("📌", ":pushpin:", "Pin dependencies to specific versions"),
    entry("👷", ":construction_worker:", "Add or update CI build system"),
    entry("♻️", ":recycle:", "Refactor code"),
    entry("➕", ":heavy_plus_sign:", "Add a dependency"),
    entry("➖", ":heavy_minus_sign:", "Remove a dependency"),
    entry("🔧", ":wrench:", "Add or update configuration files"),
    entry("🔨", ":hammer:", "Add or update development scripts"),
    entry("🌐", ":globe_with_meridians:", "Internationalization and localization"),
    entry("✏️", ":pencil2:", "Fix typos"),
    entry("💩", ":poop:", "Write bad code that needs to be improved"),
    entry("⏪", ":rewind:", "Revert changes"),
    entry("🔀", ":twisted_rightwards_arrows:", "Merge branches"),
    entry("📦", ":package:", "Add or update compiled files or packages"),
    entry("🚚", ":truck:", "Move or rename resources"),
    entry("💥", ":boom:", "Introduce breaking changes"),
    entry("🍱", ":bento:", "Add or update assets"),
    entry("♿", ":wheelchair:", "Improve accessibility"),
    entry("💡", ":bulb:", "Add or update comments in source code"),
    entry("🍻", ":beers:", "Write code drunkenly"),
    entry("🗃️", ":card_file_box:", "Perform database related changes"),
    entry("🙈", ":see_no_evil:", "Add or update a .gitignore file"),
    entry("⚡", ":zap:", "Improve performance"),
    entry("🎨", ":art:", "Improve structure / format of the code"),
    entry("🤡", ":clown_face:", "Mock things"),
    entry("💀", ":skull:", "Remove dead code"),
];

/// Check whether the text contains at least one emoji.
pub fn contains_emoji(text: &str) -> bool {
    EMOJI_REGEX.is_match(text)
}

/// Return the first emoji found in the text.
pub fn find_emoji(text: &str) -> Option<&str> {
    EMOJI_REGEX.find(text).map(|m| m.as_str())
}
