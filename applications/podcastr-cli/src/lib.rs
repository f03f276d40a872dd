//! Podcastr CLI - terminal front-end for the episode player
pub mod config;
pub mod input;
pub mod render;
pub mod session;
