// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Best-effort media feedback.
//!
//! The hook only ever talks to a [`MediaPlayer`]; which OS command ends up
//! playing the clip is decided here.

mod player;

pub use player::{
    play_best_effort, player_for, Clip, CommandPlayer, MediaPlayer, NullPlayer, PlayerCommand,
};
