// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Guidance printed when a commit is rejected.

use console::style;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::{CheckKind, VibeConfig};
use crate::lexicon::{SlangWordlist, EMOJI_TABLE};

use super::validator::ValidationResult;

/// Draw `size` rows from the emoji table.
pub fn emoji_menu<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<String> {
    EMOJI_TABLE
        .choose_multiple(rng, size)
        .map(|e| format!("{}  {:<28} {}", e.emoji, e.code, e.usage))
        .collect()
}

/// Draw `size` rows from the slang wordlist.
pub fn slang_menu<R: Rng + ?Sized>(
    wordlist: &SlangWordlist,
    size: usize,
    rng: &mut R,
) -> Vec<String> {
    wordlist
        .entries()
        .choose_multiple(rng, size)
        .map(|term| match SlangWordlist::meaning(term) {
            Some(meaning) => format!("{:<28} {}", term, meaning),
            None => term.clone(),
        })
        .collect()
}

/// Draw a `side` x `side` square of distinct emoji, one string per row.
/// Smaller when the table runs out.
pub fn emoji_grid<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Vec<String> {
    if side == 0 {
        return Vec::new();
    }
    let picked: Vec<&str> = EMOJI_TABLE
        .choose_multiple(rng, side * side)
        .map(|e| e.emoji)
        .collect();
    picked.chunks(side).map(|row| row.join("   ")).collect()
}

/// Messages that pass both checks.
const VIBE_EXAMPLES: &[&str] = &[
    "feat: no cap this update bussin fr fr ✨",
    "fix: bruh moment in the auth service 🐛",
    "docs: fam check this documentation update 📝",
    "style: added more drip to the UI 🎨",
    "refactor: ong cleaned up that spaghetti code ♻️",
];

/// Emoji check: one failing message, then passing ones.
const EMOJI_EXAMPLES: (&str, &[&str]) = (
    "Add new feature",
    &["✨ Add new feature", "🐛 Fix bug in login", "🎨 Update styles"],
);

/// Renders the rejection report.
pub struct Guidance<'a> {
    config: &'a VibeConfig,
    wordlist: SlangWordlist,
}

impl<'a> Guidance<'a> {
    pub fn new(config: &'a VibeConfig) -> Self {
        Self {
            config,
            wordlist: SlangWordlist::from_config(&config.slang),
        }
    }

    /// Render the guidance for a failed result. Passing results render empty.
    pub fn render<R: Rng + ?Sized>(&self, result: &ValidationResult, rng: &mut R) -> String {
        let failed = result.failed_checks();
        if failed.is_empty() {
            return String::new();
        }

        let mut out = Vec::new();
        out.push(format!(
            "{} Commit rejected. This message does not pass the vibe check.",
            style("✗").red().bold()
        ));

        for check in &failed {
            match check {
                CheckKind::Emoji => {
                    if self.config.ui.hints {
                        let (bad, good) = EMOJI_EXAMPLES;
                        out.push(String::new());
                        out.push(format!("{}", style("Examples:").bold()));
                        out.push(format!("  {} '{}'", style("✗").red(), bad));
                        for example in good {
                            out.push(format!("  {} '{}'", style("✓").green(), example));
                        }
                    }
                    let grid = emoji_grid(self.config.menu.emoji_grid, rng);
                    push_section(&mut out, "Pick an emoji for your commit:", grid);
                }
                CheckKind::Slang => {
                    if self.config.ui.hints {
                        out.push(String::new());
                        out.push(format!("{}", style("Commits with the right vibe:").bold()));
                        for example in VIBE_EXAMPLES {
                            out.push(format!("  {} {}", style("✓").green(), example));
                        }
                    }
                    let terms = slang_menu(&self.wordlist, self.config.menu.size, rng);
                    push_section(&mut out, "Some rizzy terms you can use:", terms);
                }
            }
        }

        out.join("\n")
    }

    /// Print the guidance to stdout.
    pub fn print(&self, result: &ValidationResult) {
        let text = self.render(result, &mut rand::rng());
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}

fn push_section(out: &mut Vec<String>, title: &str, rows: Vec<String>) {
    if rows.is_empty() {
        return;
    }
    out.push(String::new());
    out.push(format!("{}", style(title).bold()));
    for row in rows {
        out.push(format!("  {}", row));
    }
}
