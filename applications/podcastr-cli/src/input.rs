//! Command-line input parsing
//!
//! Turns one line typed at the prompt into an [`Input`]. Episode numbers are
//! 1-based as shown by `list`.

use std::str::FromStr;
use thiserror::Error;

/// A parsed prompt line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Show the episode catalogue
    List,
    /// Play one catalogue episode on its own (0-based)
    Play(usize),
    /// Play the whole catalogue, starting at an episode (0-based)
    Queue(usize),
    TogglePlay,
    Pause,
    Resume,
    Next,
    Previous,
    ToggleLoop,
    ToggleShuffle,
    Clear,
    /// The media element finished the current episode
    Ended,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0} (type 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an episode number")]
    MissingEpisode(&'static str),

    #[error("Not an episode number: {0}")]
    InvalidEpisode(String),

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(InputError::Empty)?.to_lowercase();
        let argument = words.next();

        let input = match command.as_str() {
            "play" | "p" => return Ok(Input::Play(episode_number("play", argument)?)),
            "queue" | "q" => return Ok(Input::Queue(episode_number("queue", argument)?)),
            "list" | "ls" => (Input::List, "list"),
            "toggle" | "t" => (Input::TogglePlay, "toggle"),
            "pause" => (Input::Pause, "pause"),
            "resume" => (Input::Resume, "resume"),
            "next" | "n" => (Input::Next, "next"),
            "prev" | "previous" => (Input::Previous, "prev"),
            "loop" => (Input::ToggleLoop, "loop"),
            "shuffle" => (Input::ToggleShuffle, "shuffle"),
            "clear" => (Input::Clear, "clear"),
            "ended" => (Input::Ended, "ended"),
            "status" | "s" => (Input::Status, "status"),
            "help" | "?" => (Input::Help, "help"),
            "quit" | "exit" => (Input::Quit, "quit"),
            _ => return Err(InputError::UnknownCommand(command)),
        };

        match argument {
            Some(_) => Err(InputError::UnexpectedArgument(input.1)),
            None => Ok(input.0),
        }
    }
}

// Converts a 1-based episode number to a catalogue index
fn episode_number(command: &'static str, argument: Option<&str>) -> Result<usize, InputError> {
    let argument = argument.ok_or(InputError::MissingEpisode(command))?;

    match argument.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(InputError::InvalidEpisode(argument.to_string())),
    }
}

pub const HELP: &str = "\
Commands:
  list            show episodes
  play <n>        play episode n on its own
  queue <n>       play all episodes, starting at n
  toggle          play/pause
  pause, resume   report the media element pausing or resuming
  next, prev      move through the playlist
  loop, shuffle   toggle repeat and shuffle
  ended           report the current episode finishing
  clear           close the player
  status          show the player
  quit            exit";
