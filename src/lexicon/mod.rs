// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Static emoji and slang data, and the predicates over them.

mod emoji;
mod slang;

pub use emoji::{contains_emoji, find_emoji, EmojiEntry, EMOJI_TABLE};
pub use slang::{SlangWordlist, SLANG_TABLE};
