//! Interactive listening session
//!
//! Plays the role of the front-end: the episode list, the control bar and
//! the media element all act on one [`PlayerHandle`], and the now-playing
//! view is redrawn from the events it publishes.

use crate::{
    input::{Input, HELP},
    render,
};
use anyhow::Result;
use crossbeam_channel::Receiver;
use podcastr_player::{Episode, PlayerEvent, PlayerHandle};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether the prompt loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    /// Episodes the user can pick from
    catalogue: Vec<Episode>,

    /// Shared player
    player: PlayerHandle,

    /// Now-playing view subscription
    events: Receiver<PlayerEvent>,
}

impl Session {
    pub fn new(catalogue: Vec<Episode>, player: PlayerHandle) -> Self {
        let events = player.subscribe();
        Self {
            catalogue,
            player,
            events,
        }
    }

    pub fn player(&self) -> &PlayerHandle {
        &self.player
    }

    /// Read and execute prompt lines until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> Result<()> {
        writeln!(out, "{} episodes loaded. Type 'help' for commands.", self.catalogue.len())?;

        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "podcastr> ")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Input>() {
                Ok(input) => {
                    if self.execute(input, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
        }

        info!("Session finished");
        Ok(())
    }

    /// Execute one input and redraw for any resulting changes
    pub fn execute<W: Write>(&mut self, input: Input, out: &mut W) -> Result<Flow> {
        debug!("Input: {:?}", input);

        match input {
            Input::List => {
                let current = self.player.current_episode();
                writeln!(out, "{}", render::catalogue(&self.catalogue, current.as_ref()))?;
            }
            Input::Play(index) => match self.catalogue.get(index) {
                Some(episode) => self.player.play(episode.clone()),
                None => self.no_such_episode(index, out)?,
            },
            Input::Queue(index) => {
                if index < self.catalogue.len() {
                    self.player.play_list(self.catalogue.clone(), index);
                } else {
                    self.no_such_episode(index, out)?;
                }
            }
            Input::TogglePlay => self.player.toggle_play(),
            Input::Pause => self.player.set_playing_state(false),
            Input::Resume => self.player.set_playing_state(true),
            Input::Next => self.player.play_next(),
            Input::Previous => self.player.play_previous(),
            Input::ToggleLoop => self.player.toggle_loop(),
            Input::ToggleShuffle => self.player.toggle_shuffle(),
            Input::Clear => self.player.clear_player_state(),
            Input::Ended => self.episode_ended(out)?,
            Input::Status => {
                let snapshot = self.player.snapshot();
                writeln!(out, "{}", render::now_playing(&snapshot))?;
                writeln!(out, "{}", render::controls(&snapshot))?;
            }
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::Quit => return Ok(Flow::Quit),
        }

        self.redraw(out)?;
        Ok(Flow::Continue)
    }

    // Media element reached the end of the current episode
    fn episode_ended<W: Write>(&self, out: &mut W) -> Result<()> {
        // Decide from one consistent view of the player
        let snapshot = self.player.snapshot();

        if snapshot.current_episode().is_none() {
            writeln!(out, "Nothing is playing.")?;
            return Ok(());
        }

        if snapshot.is_looping {
            // The media element restarts the episode itself
            writeln!(out, "Looping: starting the episode again.")?;
        } else if snapshot.has_next {
            self.player.play_next();
        } else {
            self.player.clear_player_state();
        }

        Ok(())
    }

    fn no_such_episode<W: Write>(&self, index: usize, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "No episode {} (there are {}).",
            index + 1,
            self.catalogue.len()
        )?;
        Ok(())
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        for event in self.events.try_iter() {
            writeln!(out, "{}", render::now_playing(event.snapshot()))?;
        }
        Ok(())
    }
}
