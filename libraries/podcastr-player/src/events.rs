//! Player events
//!
//! Emitted by [`PlayerHandle`](crate::PlayerHandle) to its subscribers after
//! each command that changed something a consumer can read.

use crate::types::{Episode, PlayerSnapshot};
use serde::{Deserialize, Serialize};

/// Events emitted by the shared player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Player state changed
    StateChanged {
        /// Name of the command that caused the change
        command: String,
        /// Full state after the command
        snapshot: PlayerSnapshot,
    },
}

impl PlayerEvent {
    /// State carried by the event
    pub fn snapshot(&self) -> &PlayerSnapshot {
        match self {
            PlayerEvent::StateChanged { snapshot, .. } => snapshot,
        }
    }

    /// Episode selected after the change, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.snapshot().current_episode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_exposes_snapshot() {
        let episode = Episode {
            title: "Episode".to_string(),
            members: "Host".to_string(),
            thumbnail: String::new(),
            duration: 60,
            url: "/episode.mp3".to_string(),
        };
        let event = PlayerEvent::StateChanged {
            command: "play".to_string(),
            snapshot: PlayerSnapshot {
                episode_list: vec![episode.clone()],
                is_playing: true,
                ..Default::default()
            },
        };

        assert!(event.snapshot().is_playing);
        assert_eq!(event.current_episode(), Some(&episode));
    }

    #[test]
    fn event_serializes_to_json() {
        let event = PlayerEvent::StateChanged {
            command: "toggle_loop".to_string(),
            snapshot: PlayerSnapshot {
                is_looping: true,
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["StateChanged"]["command"], "toggle_loop");
        assert_eq!(json["StateChanged"]["snapshot"]["is_looping"], true);
    }
}
