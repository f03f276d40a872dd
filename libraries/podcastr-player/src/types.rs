//! Core types for the episode player

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A playable podcast episode
///
/// Supplied by the caller and never modified by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Credited contributors, as a single display string
    pub members: String,

    /// Thumbnail image location
    pub thumbnail: String,

    /// Duration in seconds
    pub duration: u64,

    /// Media source location
    pub url: String,
}

impl Episode {
    /// Parse a JSON array of episodes
    pub fn parse_list(json: &str) -> Result<Vec<Episode>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON array of episodes from disk
    pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Episode>> {
        let json = std::fs::read_to_string(path)?;
        Self::parse_list(&json)
    }

    /// Duration formatted as `HH:MM:SS`
    pub fn duration_as_string(&self) -> String {
        let hours = self.duration / 3600;
        let minutes = (self.duration % 3600) / 60;
        let seconds = self.duration % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// How `play_list` treats an index outside the new playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Store the index as given; a valid index is the caller's job
    #[default]
    Trust,

    /// Clamp into the playlist (0 for an empty playlist)
    Clamp,
}

/// Initial settings for a player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start with looping enabled (default: false)
    pub looping: bool,

    /// Start with shuffle enabled (default: false)
    pub shuffling: bool,

    /// Index handling for `play_list` (default: Trust)
    pub index_policy: IndexPolicy,
}

/// Owned copy of everything a consumer may read from the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PlayerSnapshot {
    /// Episode at the current index, if there is one
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }
}
