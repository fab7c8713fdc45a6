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

//! MPV-backed audio worker.
//!
//! The worker owns the `libmpv` context. It drains [`AudioPlayerCommand`]s from
//! the controller and watches MPV events, sending an
//! [`AppEvent::PlaybackFailed`] whenever a play request turns out not to have
//! worked. The controller never waits on any of this.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use crate::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    Play,
    Pause,
    Shutdown,
}

/// Spawns the audio worker thread.
///
/// If the worker cannot start, the error is broadcast as a playback failure:
/// the rest of the application keeps running without sound.
pub(crate) fn spawn_player_worker(
    source_url: String,
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(&source_url, command_rx, event_tx) {
            tracing::error!(error = ?e, "audio worker stopped");
            let _ = error_tx.send(AppEvent::PlaybackFailed(format!("{:#}", e)));
        }
    });
}

fn audio_player_worker(
    source_url: &str,
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder
            .set_option("loop-file", "inf")
            .context("Failed to enable looping")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;

    tracing::debug!(source = source_url, "audio worker ready");

    let mut loaded = false;

    loop {
        if !process_commands(&mut handler, source_url, &mut loaded, &command_rx, &event_tx)? {
            tracing::debug!("audio worker shutting down");
            return Ok(());
        }
        process_mpv_events(&mut handler, &event_tx)?;
    }
}

/// Drains and executes all pending commands.
///
/// Returns `false` once the worker should exit.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    source_url: &str,
    loaded: &mut bool,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            AudioPlayerCommand::Play => {
                if let Err(reason) = play(handler, source_url, loaded) {
                    event_tx
                        .send(AppEvent::PlaybackFailed(reason))
                        .context("Failed to send playback failure")?;
                }
            }
            AudioPlayerCommand::Pause => {
                if let Err(e) = handler.set_property("pause", true) {
                    tracing::warn!(error = ?e, "failed to pause");
                }
            }
            AudioPlayerCommand::Shutdown => return Ok(false),
        }
    }
}

fn play(handler: &mut mpv::MpvHandler, source_url: &str, loaded: &mut bool) -> Result<(), String> {
    if !*loaded {
        handler
            .command(&["loadfile", source_url, "replace"])
            .map_err(|e| format!("could not load {}: {:?}", source_url, e))?;
        *loaded = true;
    }

    handler
        .set_property("pause", false)
        .map_err(|e| format!("could not unpause: {:?}", e))
}

/// Polls for MPV events for up to 50ms.
fn process_mpv_events(handler: &mut mpv::MpvHandler, event_tx: &Sender<AppEvent>) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => {
                    Some(AppEvent::TitleChanged(title.to_string()))
                }
                _ => None,
            },
            mpv::Event::EndFile(Err(e)) => {
                Some(AppEvent::PlaybackFailed(format!("playback ended: {:?}", e)))
            }
            _ => None,
        };

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}
