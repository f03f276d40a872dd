//! Player commands as values
//!
//! Front-ends that queue, route or log commands build these instead of
//! calling [`PlayerState`](crate::PlayerState) methods directly.

use crate::types::Episode;
use serde::{Deserialize, Serialize};

/// Commands accepted by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Replace the playlist with a single episode and start playing it
    Play(Episode),

    /// Replace the playlist and start playing at `index`
    PlayList {
        /// New playlist, in playback order
        episodes: Vec<Episode>,
        /// Index to start from
        index: usize,
    },

    /// Flip between playing and paused
    TogglePlay,

    /// Advance to the next (or a random, when shuffling) episode
    PlayNext,

    /// Step back one episode
    PlayPrevious,

    /// Flip the loop flag
    ToggleLoop,

    /// Flip the shuffle flag
    ToggleShuffle,

    /// Empty the playlist, keeping the flags
    ClearPlayerState,

    /// Set the playing flag explicitly, as reported by the media element
    SetPlayingState(bool),
}

impl PlayerCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::Play(_) => "play",
            PlayerCommand::PlayList { .. } => "play_list",
            PlayerCommand::TogglePlay => "toggle_play",
            PlayerCommand::PlayNext => "play_next",
            PlayerCommand::PlayPrevious => "play_previous",
            PlayerCommand::ToggleLoop => "toggle_loop",
            PlayerCommand::ToggleShuffle => "toggle_shuffle",
            PlayerCommand::ClearPlayerState => "clear_player_state",
            PlayerCommand::SetPlayingState(_) => "set_playing_state",
        }
    }
}
