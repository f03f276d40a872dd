//! Podcastr - Episode Player State
//!
//! Shared playback state for Podcastr front-ends.
//!
//! This crate provides:
//! - Playlist of episodes with a current position
//! - Play/pause, next/previous, loop and shuffle controls
//! - Derived `has_next`/`has_previous` for enabling controls
//! - A cloneable handle so every component sees the same player
//! - Change events for components that redraw on updates
//!
//! # Architecture
//!
//! `podcastr-player` holds state only:
//! - No audio decoding or streaming
//! - No persistence of playback position
//! - No network access
//!
//! The component that actually plays `Episode::url` reads the state through a
//! [`PlayerHandle`] and reports natural playback events back with
//! [`PlayerHandle::set_playing_state`] and [`PlayerHandle::play_next`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_player::{Episode, PlayerState};
//!
//! let mut player = PlayerState::new();
//!
//! let episode = Episode {
//!     title: "Episode 1".to_string(),
//!     members: "Host A, Host B".to_string(),
//!     thumbnail: "https://example.com/ep1.jpg".to_string(),
//!     duration: 3600,
//!     url: "https://example.com/ep1.mp3".to_string(),
//! };
//!
//! player.play(episode);
//! assert!(player.is_playing());
//! assert!(!player.has_next());
//!
//! player.toggle_play();
//! assert!(!player.is_playing());
//! ```
//!
//! # Example: Shared Handle
//!
//! ```rust
//! use podcastr_player::{PlayerConfig, PlayerEvent, PlayerHandle};
//!
//! let player = PlayerHandle::new(&PlayerConfig::default());
//!
//! // Hand clones to components; all of them see the same state
//! let controls = player.clone();
//! let events = player.subscribe();
//!
//! controls.toggle_shuffle();
//!
//! let PlayerEvent::StateChanged { snapshot, .. } = events.recv().unwrap();
//! assert!(snapshot.is_shuffling);
//! assert!(player.has_next());
//! ```

mod command;
mod error;
mod events;
mod handle;
mod shuffle;
mod state;
pub mod types;

// Public exports
pub use command::PlayerCommand;
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use handle::PlayerHandle;
pub use shuffle::random_index;
pub use state::PlayerState;
pub use types::{Episode, IndexPolicy, PlayerConfig, PlayerSnapshot};
