// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Slang wordlist and matching.
//!
//! Entries match as case-insensitive substrings, not whole words, so a short
//! entry such as `ate` also matches inside `update`.

use crate::config::SlangConfig;

/// Built-in slang terms with their meaning, all lowercase. Earlier entries win
/// when a message contains several.
pub const SLANG_TABLE: &[(&str, &str)] = &[
    ("fanum", "a streamer known for taking bites of friends' food"),
    ("ohio", "weird, cursed"),
    ("rizz", "charm"),
    ("rizzler", "someone with a lot of charm"),
    ("gyatt", "exclamation of surprise"),
    ("ong", "on god, honestly"),
    ("brain rot", "too much time online"),
    ("skibidi", "nonsense word, good or bad"),
    ("sigma", "lone wolf, self-made"),
    ("sus", "suspicious"),
    ("noob", "beginner"),
    ("yeet", "throw away with force"),
    ("simp", "tries too hard to impress"),
    ("og", "original, the first"),
    ("mewing", "jawline exercise"),
    ("aura", "presence, coolness"),
    ("delulu", "delusional"),
    ("savage", "ruthless in a cool way"),
    ("pookie", "sweetheart"),
    ("chad alpha", "the most dominant chad"),
    ("chad", "confident, successful guy"),
    ("alpha", "leader of the pack"),
    ("beta", "follower, not the leader"),
    ("mog", "outshine someone"),
    ("bruh", "expression of disbelief"),
    ("salty", "bitter, upset"),
    ("ate", "did it perfectly"),
    ("zang", "mind-blowing"),
    ("bet", "okay, deal"),
    ("lit", "exciting"),
    ("low key", "kind of, quietly"),
    ("bop", "a great song"),
    ("ick", "sudden turn-off"),
    ("cringe", "embarrassing"),
    ("opp", "opponent, enemy"),
    ("twin", "close friend"),
    ("sheesh", "wow"),
    ("vibe", "the feeling of something"),
    ("bussin", "really good"),
    ("glaze", "overpraise"),
    ("dog water", "really bad"),
    ("slay", "did amazingly well"),
    ("fam", "close friends"),
    ("yapping", "talking too much"),
    ("yap", "talk a lot"),
    ("skibidi ohio rizz", "peak brain rot"),
    ("skibidi rizz", "chaotic charm"),
    ("what the sigma", "what on earth"),
    ("fanum tax", "taking a share of someone's food"),
    ("negative aura", "losing coolness points"),
    ("mad lit", "extremely exciting"),
    ("just put the fries in the bag", "stop talking and do your job"),
    ("hits different", "better than usual"),
    ("cap", "a lie"),
    ("no cap", "no lie, for real"),
    ("drip", "style"),
    ("flex", "show off"),
    ("tea", "gossip"),
    ("goat", "greatest of all time"),
    ("its giving", "it resembles"),
];

/// An immutable, lowercased list of slang terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlangWordlist {
    entries: Vec<String>,
}

impl SlangWordlist {
    /// Build a wordlist from arbitrary terms. Terms are lowercased and trimmed;
    /// empty ones and duplicates are dropped, order is kept.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !entries.contains(&term) {
                entries.push(term);
            }
        }
        Self { entries }
    }

    /// The built-in wordlist.
    pub fn builtin() -> Self {
        Self::new(SLANG_TABLE.iter().map(|(term, _)| *term))
    }

    /// Build the wordlist described by the configuration.
    pub fn from_config(config: &SlangConfig) -> Self {
        if config.replace_builtin {
            Self::new(&config.words)
        } else {
            let builtin = SLANG_TABLE.iter().map(|(term, _)| term.to_string());
            Self::new(builtin.chain(config.words.iter().cloned()))
        }
    }

    /// Return the first entry, in list order, that occurs in the text.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lower.contains(entry.as_str()))
            .map(String::as_str)
    }

    /// Check whether the text contains any entry.
    pub fn contains_slang(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }

    /// Like [`find_in`](Self::find_in), but only counts occurrences that are
    /// not glued to other letters or digits.
    pub fn find_word(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| occurs_as_word(&lower, entry))
            .map(String::as_str)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Meaning of an entry, if it is a built-in term.
    pub fn meaning(term: &str) -> Option<&'static str> {
        SLANG_TABLE
            .iter()
            .find(|(t, _)| *t == term)
            .map(|(_, meaning)| *meaning)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn occurs_as_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
