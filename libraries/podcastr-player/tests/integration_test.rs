//! Integration tests for the episode player
//!
//! Real listening scenarios: picking an episode, working through a
//! playlist, shuffling, and clearing between sessions.

use podcastr_player::{Episode, PlayerState};

// ===== Test Helpers =====

fn create_episode(title: &str, duration: u64) -> Episode {
    Episode {
        title: title.to_string(),
        members: "Diego Fernandes, Richard Fontana".to_string(),
        thumbnail: format!("https://cdn.example.com/{}.jpg", title),
        duration,
        url: format!("https://cdn.example.com/{}.m4a", title),
    }
}

fn create_playlist(count: usize) -> Vec<Episode> {
    (0..count)
        .map(|i| create_episode(&format!("episode-{}", i), 1200 + i as u64))
        .collect()
}

fn titles(player: &PlayerState) -> Vec<&str> {
    player
        .episode_list()
        .iter()
        .map(|e| e.title.as_str())
        .collect()
}

// ===== Starting Playback =====

#[test]
fn test_play_list_starts_at_requested_episode() {
    let list = create_playlist(4);

    for index in 0..list.len() {
        let mut player = PlayerState::new();
        player.play_list(list.clone(), index);

        assert_eq!(player.current_episode_index(), index);
        assert!(player.is_playing());
        assert_eq!(player.episode_list(), list.as_slice());
        assert_eq!(player.current_episode(), Some(&list[index]));
    }
}

#[test]
fn test_play_single_episode_discards_previous_playlist() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(5), 3);
    player.set_playing_state(false);

    player.play(create_episode("single", 900));

    assert_eq!(titles(&player), vec!["single"]);
    assert_eq!(player.current_episode_index(), 0);
    assert!(player.is_playing());
    assert!(!player.has_next());
    assert!(!player.has_previous());
}

#[test]
fn test_first_play_then_next_is_noop() {
    // Empty player, paused
    let mut player = PlayerState::new();
    assert!(player.episode_list().is_empty());
    assert!(!player.is_playing());

    player.play(create_episode("A", 60));
    assert_eq!(titles(&player), vec!["A"]);
    assert_eq!(player.current_episode_index(), 0);
    assert!(player.is_playing());
    assert!(!player.has_next());

    player.play_next();
    assert_eq!(titles(&player), vec!["A"]);
    assert_eq!(player.current_episode_index(), 0);
    assert!(player.is_playing());
}

// ===== Toggles =====

#[test]
fn test_toggles_are_their_own_inverse() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(2), 0);

    let playing = player.is_playing();
    player.toggle_play();
    assert_ne!(player.is_playing(), playing);
    player.toggle_play();
    assert_eq!(player.is_playing(), playing);

    let looping = player.is_looping();
    player.toggle_loop();
    assert_ne!(player.is_looping(), looping);
    player.toggle_loop();
    assert_eq!(player.is_looping(), looping);

    let shuffling = player.is_shuffling();
    player.toggle_shuffle();
    assert_ne!(player.is_shuffling(), shuffling);
    player.toggle_shuffle();
    assert_eq!(player.is_shuffling(), shuffling);
}

#[test]
fn test_set_playing_state_is_explicit() {
    let mut player = PlayerState::new();

    player.set_playing_state(true);
    player.set_playing_state(true);
    assert!(player.is_playing());

    player.set_playing_state(false);
    assert!(!player.is_playing());
}

// ===== Boundaries =====

#[test]
fn test_next_at_last_episode_is_noop() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(3), 2);

    assert!(!player.has_next());
    player.play_next();
    assert_eq!(player.current_episode_index(), 2);
}

#[test]
fn test_previous_at_first_episode_is_noop() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(3), 0);

    assert!(!player.has_previous());
    player.play_previous();
    assert_eq!(player.current_episode_index(), 0);
}

#[test]
fn test_loop_flag_does_not_affect_navigation() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(2), 1);
    player.toggle_loop();

    // Looping repeats the current episode; it does not wrap the playlist
    assert!(!player.has_next());
    player.play_next();
    assert_eq!(player.current_episode_index(), 1);
}

// ===== Shuffle =====

#[test]
fn test_shuffled_next_from_last_episode() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(5), 4);
    player.toggle_shuffle();

    for _ in 0..100 {
        assert!(player.has_next());
        player.play_next();
        assert!(player.current_episode_index() < 5);
    }
    assert!(player.has_next());
}

#[test]
fn test_shuffled_previous_still_steps_back() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(5), 3);
    player.toggle_shuffle();

    player.play_previous();
    assert_eq!(player.current_episode_index(), 2);
}

// ===== Clearing =====

#[test]
fn test_clear_keeps_flags() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(4), 2);
    player.toggle_loop();
    player.toggle_shuffle();

    player.clear_player_state();

    assert!(player.episode_list().is_empty());
    assert_eq!(player.current_episode_index(), 0);
    // Flags survive the clear
    assert!(player.is_playing());
    assert!(player.is_looping());
    assert!(player.is_shuffling());
}

#[test]
fn test_clear_on_paused_player_stays_paused() {
    let mut player = PlayerState::new();
    player.play_list(create_playlist(2), 1);
    player.toggle_play();

    player.clear_player_state();

    assert!(!player.is_playing());
    assert!(!player.is_looping());
    assert!(!player.is_shuffling());
    assert!(player.current_episode().is_none());
}

// ===== Full Session =====

#[test]
fn test_listening_session() {
    let mut player = PlayerState::new();
    let list = create_playlist(3);

    // User clicks the second episode on the home page
    player.play_list(list.clone(), 1);
    assert_eq!(player.current_episode(), Some(&list[1]));
    assert!(player.has_previous());
    assert!(player.has_next());

    // Media element pauses at the end and the front-end moves on
    player.set_playing_state(false);
    player.play_next();
    assert_eq!(player.current_episode(), Some(&list[2]));
    assert!(!player.is_playing());

    player.toggle_play();
    assert!(player.is_playing());

    player.play_previous();
    player.play_previous();
    assert_eq!(player.current_episode(), Some(&list[0]));
    assert!(!player.has_previous());

    // Closing the player
    player.clear_player_state();
    assert!(player.current_episode().is_none());
    assert!(!player.has_next());
}
