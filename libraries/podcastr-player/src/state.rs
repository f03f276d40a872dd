//! Player state - playlist, position and playback flags
//!
//! Everything here is synchronous and infallible. Out-of-range moves are
//! silently ignored rather than reported.

use crate::{
    command::PlayerCommand,
    shuffle::random_index,
    types::{Episode, IndexPolicy, PlayerConfig, PlayerSnapshot},
};
use rand::Rng;
use tracing::{debug, warn};

/// Playlist and playback flags for one player session
///
/// `has_next` and `has_previous` are derived on every read and never stored.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Episodes in playback order
    episode_list: Vec<Episode>,

    /// Position in `episode_list` (0 when the list is empty)
    current_episode_index: usize,

    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    /// Index handling for `play_list`
    index_policy: IndexPolicy,
}

impl PlayerState {
    /// Create an empty, paused player
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, paused player with initial flags from `config`
    pub fn with_config(config: &PlayerConfig) -> Self {
        Self {
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            index_policy: config.index_policy,
            ..Self::default()
        }
    }

    // ===== Commands =====

    /// Replace the playlist with `episode` alone and start playing it
    pub fn play(&mut self, episode: Episode) {
        debug!("Playing single episode: {}", episode.title);
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the playlist with `list` and start playing at `index`
    ///
    /// Under [`IndexPolicy::Trust`] the index is stored unchecked; an index
    /// past the end leaves `current_episode` empty until the caller fixes it.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        let index = match self.index_policy {
            IndexPolicy::Trust => {
                if index >= list.len() {
                    warn!(
                        "play_list index {} is outside a playlist of {} episodes",
                        index,
                        list.len()
                    );
                }
                index
            }
            IndexPolicy::Clamp => index.min(list.len().saturating_sub(1)),
        };

        debug!("Playing list of {} episodes from index {}", list.len(), index);
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Set the playing flag, typically from media element events
    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    /// Empty the playlist and reset the index
    ///
    /// Playing, looping and shuffling flags are left as they are.
    pub fn clear_player_state(&mut self) {
        debug!("Clearing playlist of {} episodes", self.episode_list.len());
        self.episode_list.clear();
        self.current_episode_index = 0;
    }

    /// Move to the next episode
    ///
    /// When shuffling, jumps to a random episode (possibly the current one).
    /// Otherwise advances by one, or does nothing at the end of the list.
    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    /// [`play_next`](Self::play_next) with a caller-supplied random source
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            self.current_episode_index = random_index(self.episode_list.len(), rng);
            debug!("Shuffled to episode {}", self.current_episode_index);
        } else if self.has_next() {
            self.current_episode_index += 1;
        }
    }

    /// Move back one episode, or do nothing at the start of the list
    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    /// Execute a command
    ///
    /// Returns whether any readable value changed.
    pub fn apply(&mut self, command: PlayerCommand) -> bool {
        let before = self.flags();
        let list_changed = match &command {
            PlayerCommand::Play(episode) => {
                self.episode_list.as_slice() != std::slice::from_ref(episode)
            }
            PlayerCommand::PlayList { episodes, .. } => self.episode_list != *episodes,
            PlayerCommand::ClearPlayerState => !self.episode_list.is_empty(),
            _ => false,
        };

        match command {
            PlayerCommand::Play(episode) => self.play(episode),
            PlayerCommand::PlayList { episodes, index } => self.play_list(episodes, index),
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::PlayNext => self.play_next(),
            PlayerCommand::PlayPrevious => self.play_previous(),
            PlayerCommand::ToggleLoop => self.toggle_loop(),
            PlayerCommand::ToggleShuffle => self.toggle_shuffle(),
            PlayerCommand::ClearPlayerState => self.clear_player_state(),
            PlayerCommand::SetPlayingState(state) => self.set_playing_state(state),
        }

        list_changed || self.flags() != before
    }

    // ===== Reads =====

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    /// Episode at the current index, if the index points into the list
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// True when shuffling, or when an episode follows the current one
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index < self.episode_list.len().saturating_sub(1)
    }

    /// True when the current index is past the first episode
    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Owned copy of every readable value
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.episode_list.clone(),
            current_episode_index: self.current_episode_index,
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    fn flags(&self) -> (usize, bool, bool, bool) {
        (
            self.current_episode_index,
            self.is_playing,
            self.is_looping,
            self.is_shuffling,
        )
    }
}
