// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Audio playback backend.
//!
//! This module provides [`AudioPlayer`], the [`MediaSource`] the playback
//! controller drives. It manages a background worker thread that interfaces
//! with the underlying audio library (MPV), so play requests return at once
//! and their outcome is reported later as an [`AppEvent`].

mod commands;

use std::sync::mpsc;

use crate::{
    engine::{EngineError, MediaSource},
    events::AppEvent,
    player::commands::AudioPlayerCommand,
};

/// A handle to the audio playback worker.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread. The
/// worker exits when the handle is dropped.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `source_url` - Location of the audio track, loaded on first play.
    /// * `event_tx` - A channel to send playback failures and title changes
    ///   back to the main event loop.
    pub(crate) fn new(source_url: &str, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(source_url.to_string(), command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<(), EngineError> {
        self.command_tx
            .send(command)
            .map_err(|_| EngineError::PlaybackRequestFailed("audio worker is not running".into()))
    }
}

impl MediaSource for AudioPlayer {
    fn request_play(&self) -> Result<(), EngineError> {
        self.send(AudioPlayerCommand::Play)
    }

    fn pause(&self) -> Result<(), EngineError> {
        self.send(AudioPlayerCommand::Pause)
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.command_tx.send(AudioPlayerCommand::Shutdown).ok();
    }
}
