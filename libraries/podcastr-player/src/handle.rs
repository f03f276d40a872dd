//! Shared player handle
//!
//! One [`PlayerState`] per session, reachable from every front-end component
//! through cloned handles. Subscribers are told about each change over a
//! channel.

use crate::{
    command::PlayerCommand,
    events::PlayerEvent,
    state::PlayerState,
    types::{Episode, PlayerConfig, PlayerSnapshot},
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Cloneable handle to the session's player
///
/// Every clone shares the same state and the same subscriber list.
#[derive(Debug, Clone, Default)]
pub struct PlayerHandle {
    /// Player state (shared between clones)
    state: Arc<Mutex<PlayerState>>,

    /// Event senders, one per subscriber
    subscribers: Arc<Mutex<Vec<Sender<PlayerEvent>>>>,
}

impl PlayerHandle {
    /// Create a handle around a fresh player
    pub fn new(config: &PlayerConfig) -> Self {
        Self::from_state(PlayerState::with_config(config))
    }

    /// Create a handle around an existing player
    pub fn from_state(state: PlayerState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register for change events
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        let (tx, rx) = unbounded();
        lock(&self.subscribers).push(tx);
        rx
    }

    /// Number of live subscribers as of the last notification
    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }

    /// Execute a command and notify subscribers if anything changed
    ///
    /// The state lock is held until every subscriber has been sent the event,
    /// so events arrive in the order commands were applied. Channels are
    /// unbounded and sending never blocks.
    pub fn dispatch(&self, command: PlayerCommand) {
        let name = command.name();

        let mut state = lock(&self.state);
        if !state.apply(command) {
            trace!("Command {} left the player unchanged", name);
            return;
        }
        let snapshot = state.snapshot();

        debug!(
            "Command {} applied: index {} of {}, playing: {}",
            name,
            snapshot.current_episode_index,
            snapshot.episode_list.len(),
            snapshot.is_playing
        );

        // Lock order: state, then subscribers
        self.notify(PlayerEvent::StateChanged {
            command: name.to_string(),
            snapshot,
        });
    }

    fn notify(&self, event: PlayerEvent) {
        let mut subscribers = lock(&self.subscribers);
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // ===== Commands =====

    /// Play `episode` on its own
    pub fn play(&self, episode: Episode) {
        self.dispatch(PlayerCommand::Play(episode));
    }

    /// Play `list` starting at `index`
    pub fn play_list(&self, list: Vec<Episode>, index: usize) {
        self.dispatch(PlayerCommand::PlayList {
            episodes: list,
            index,
        });
    }

    /// Flip between playing and paused
    pub fn toggle_play(&self) {
        self.dispatch(PlayerCommand::TogglePlay);
    }

    /// Move to the next (or a random, when shuffling) episode
    pub fn play_next(&self) {
        self.dispatch(PlayerCommand::PlayNext);
    }

    /// Move back one episode
    pub fn play_previous(&self) {
        self.dispatch(PlayerCommand::PlayPrevious);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&self) {
        self.dispatch(PlayerCommand::ToggleLoop);
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&self) {
        self.dispatch(PlayerCommand::ToggleShuffle);
    }

    /// Empty the playlist, keeping the flags
    pub fn clear_player_state(&self) {
        self.dispatch(PlayerCommand::ClearPlayerState);
    }

    /// Set the playing flag
    pub fn set_playing_state(&self, state: bool) {
        self.dispatch(PlayerCommand::SetPlayingState(state));
    }

    // ===== Reads =====

    /// Owned copy of every readable value, taken under one lock
    pub fn snapshot(&self) -> PlayerSnapshot {
        lock(&self.state).snapshot()
    }

    /// Copy of the current playlist
    pub fn episode_list(&self) -> Vec<Episode> {
        lock(&self.state).episode_list().to_vec()
    }

    /// Position in the playlist
    pub fn current_episode_index(&self) -> usize {
        lock(&self.state).current_episode_index()
    }

    /// Episode at the current index, if the index points into the list
    pub fn current_episode(&self) -> Option<Episode> {
        lock(&self.state).current_episode().cloned()
    }

    /// Whether an episode is playing
    pub fn is_playing(&self) -> bool {
        lock(&self.state).is_playing()
    }

    /// Whether the current episode repeats
    pub fn is_looping(&self) -> bool {
        lock(&self.state).is_looping()
    }

    /// Whether next picks a random episode
    pub fn is_shuffling(&self) -> bool {
        lock(&self.state).is_shuffling()
    }

    /// True when shuffling, or when an episode follows the current one
    pub fn has_next(&self) -> bool {
        lock(&self.state).has_next()
    }

    /// True when the current index is past the first episode
    pub fn has_previous(&self) -> bool {
        lock(&self.state).has_previous()
    }
}

// Every command leaves the state consistent, so a panic in another holder
// doesn't invalidate it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
