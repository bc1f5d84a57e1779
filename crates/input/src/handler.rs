//! Per-tick input sampling.
//!
//! Terminals deliver key presses (and auto-repeats while a key is held) as a
//! stream. Each tick drains everything pending and folds it into one movement
//! vector. Sampling is level based: a tick with no pending keys yields no
//! movement.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{should_quit, signal_for_key};
use crate::types::{KeySignal, Movement};

/// Non-blocking source of key events.
pub trait KeySource {
    /// Next pending key, or `None` when nothing is waiting.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads keys from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Held keys arrive as repeats; releases carry no movement.
                if key.kind != KeyEventKind::Release {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Replays scripted keys, one batch per sample, for tests and demos.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    ticks: VecDeque<VecDeque<KeyEvent>>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the keys pending at the next not-yet-scripted tick.
    pub fn push_tick(&mut self, keys: impl IntoIterator<Item = KeyEvent>) {
        self.ticks.push_back(keys.into_iter().collect());
    }

    pub fn remaining_ticks(&self) -> usize {
        self.ticks.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        let Some(batch) = self.ticks.front_mut() else {
            return Ok(None);
        };
        match batch.pop_front() {
            Some(key) => Ok(Some(key)),
            None => {
                // End of this tick's batch.
                self.ticks.pop_front();
                Ok(None)
            }
        }
    }
}

/// Folds pending key signals into one movement per tick.
#[derive(Debug)]
pub struct InputState<S> {
    source: S,
    quit: bool,
}

impl<S: KeySource> InputState<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            quit: false,
        }
    }

    /// Drain every pending key. On each axis the last signal seen wins.
    pub fn sample(&mut self) -> Result<Movement> {
        let mut movement = Movement::NONE;

        while let Some(key) = self.source.poll_key()? {
            if should_quit(key) {
                self.quit = true;
                continue;
            }
            match signal_for_key(key) {
                Some(signal @ (KeySignal::Up | KeySignal::Down)) => {
                    movement.rows = signal.movement().rows;
                }
                Some(signal @ (KeySignal::Left | KeySignal::Right)) => {
                    movement.columns = signal.movement().columns;
                }
                None => {}
            }
        }

        Ok(movement)
    }

    /// Whether a quit key has been seen by any sample so far.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
