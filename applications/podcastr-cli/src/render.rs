//! Text views of the player and the episode catalogue
use podcastr_player::{Episode, PlayerSnapshot};

/// One-line "now playing" view
pub fn now_playing(snapshot: &PlayerSnapshot) -> String {
    let Some(episode) = snapshot.current_episode() else {
        return "Nothing playing. Pick an episode to listen to.".to_string();
    };

    let status = if snapshot.is_playing { ">" } else { "||" };

    let mut modes = Vec::new();
    if snapshot.is_looping {
        modes.push("loop");
    }
    if snapshot.is_shuffling {
        modes.push("shuffle");
    }

    let mut line = format!(
        "{} {} - {} [{}] ({}/{})",
        status,
        episode.title,
        episode.members,
        episode.duration_as_string(),
        snapshot.current_episode_index + 1,
        snapshot.episode_list.len()
    );

    if !modes.is_empty() {
        line.push_str(&format!(" {{{}}}", modes.join(", ")));
    }

    line
}

/// Previous/next availability, as the control bar would show it
pub fn controls(snapshot: &PlayerSnapshot) -> String {
    let previous = if snapshot.has_previous { "prev" } else { "----" };
    let next = if snapshot.has_next { "next" } else { "----" };
    format!("[{}] [{}]", previous, next)
}

/// Numbered catalogue listing, marking the episode currently selected
pub fn catalogue(episodes: &[Episode], current: Option<&Episode>) -> String {
    if episodes.is_empty() {
        return "No episodes available.".to_string();
    }

    episodes
        .iter()
        .enumerate()
        .map(|(i, episode)| {
            let marker = if current == Some(episode) { "*" } else { " " };
            format!(
                "{} {:>3}. {} - {} [{}]",
                marker,
                i + 1,
                episode.title,
                episode.members,
                episode.duration_as_string()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
