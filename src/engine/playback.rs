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

//! Play/pause state for a single audio source.
//!
//! The controller records what the user *intends*. A play request is handed to
//! the media source and the state flips to playing straight away, before the
//! backend has confirmed anything. If the backend later rejects the request the
//! failure is logged and the state is left alone; user intent wins over a
//! transient playback error. Pausing is treated as infallible.

use crate::engine::{EngineError, Lifecycle};

const ENGINE_NAME: &str = "playback";

const STARTUP_MESSAGE: &str = "audio controller ready, press space to play";

/// A playable audio resource.
///
/// `request_play` must not block waiting for playback to actually begin.
/// Errors it returns are the ones known immediately; anything that fails later
/// is reported back through [`PlaybackController::report_failure`].
pub(crate) trait MediaSource {
    fn request_play(&self) -> Result<(), EngineError>;
    fn pause(&self) -> Result<(), EngineError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

pub(crate) struct PlaybackController<S: MediaSource> {
    source: Option<S>,
    state: PlaybackState,
    last_failure: Option<EngineError>,
    active: bool,
}

impl<S: MediaSource> PlaybackController<S> {
    pub(crate) fn new() -> Self {
        tracing::info!("{}", STARTUP_MESSAGE);

        Self {
            source: None,
            state: PlaybackState::Paused,
            last_failure: None,
            active: true,
        }
    }

    /// Binds the controller to its media source for the rest of its life.
    pub(crate) fn attach(&mut self, source: S) -> Result<(), EngineError> {
        if !self.active {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }
        if self.source.is_some() {
            return Err(EngineError::AlreadyAttached);
        }

        self.source = Some(source);
        Ok(())
    }

    /// Flips between paused and playing, returning the new state.
    ///
    /// The new state is returned even when the play request fails
    /// immediately; the failure is logged and kept for display.
    pub(crate) fn toggle(&mut self) -> Result<PlaybackState, EngineError> {
        if !self.active {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }
        let source = self.source.as_ref().ok_or(EngineError::NotAttached)?;

        match self.state {
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                self.last_failure = None;
                if let Err(e) = source.request_play() {
                    self.report_failure(e);
                }
            }
            PlaybackState::Playing => {
                if let Err(e) = source.pause() {
                    tracing::warn!(error = %e, "pause request failed");
                }
                self.state = PlaybackState::Paused;
            }
        }

        tracing::debug!(state = ?self.state, "playback toggled");
        Ok(self.state)
    }

    /// Records a play request that failed after it was issued.
    ///
    /// The intended state is not rolled back.
    pub(crate) fn report_failure(&mut self, error: EngineError) {
        tracing::warn!(error = %error, state = ?self.state, "audio did not start");
        self.last_failure = Some(error);
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub(crate) fn last_failure(&self) -> Option<&EngineError> {
        self.last_failure.as_ref()
    }
}

impl<S: MediaSource> Lifecycle for PlaybackController<S> {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }

        if self.state == PlaybackState::Playing {
            if let Some(source) = &self.source {
                if let Err(e) = source.pause() {
                    tracing::warn!(error = %e, "pause on shutdown failed");
                }
            }
            self.state = PlaybackState::Paused;
        }
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, PartialEq)]
    enum Call {
        Play,
        Pause,
    }

    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Rc<RefCell<Vec<Call>>>,
        // Makes request_play fail the way a blocked autoplay would.
        reject_play: bool,
    }

    impl MediaSource for RecordingSource {
        fn request_play(&self) -> Result<(), EngineError> {
            self.calls.borrow_mut().push(Call::Play);
            if self.reject_play {
                return Err(EngineError::PlaybackRequestFailed("blocked".into()));
            }
            Ok(())
        }

        fn pause(&self) -> Result<(), EngineError> {
            self.calls.borrow_mut().push(Call::Pause);
            Ok(())
        }
    }

    fn attached(source: RecordingSource) -> PlaybackController<RecordingSource> {
        let mut controller = PlaybackController::new();
        controller.attach(source).unwrap();
        controller
    }

    #[test]
    fn starts_paused() {
        let controller = attached(RecordingSource::default());

        assert!(!controller.is_playing());
        assert!(controller.last_failure().is_none());
    }

    #[test]
    fn toggle_plays_then_pauses() {
        let source = RecordingSource::default();
        let mut controller = attached(source.clone());

        assert_eq!(controller.toggle().unwrap(), PlaybackState::Playing);
        assert!(controller.is_playing());

        assert_eq!(controller.toggle().unwrap(), PlaybackState::Paused);
        assert!(!controller.is_playing());

        assert_eq!(*source.calls.borrow(), vec![Call::Play, Call::Pause]);
    }

    #[test]
    fn immediate_play_failure_keeps_playing_state() {
        let source = RecordingSource {
            reject_play: true,
            ..Default::default()
        };
        let mut controller = attached(source);

        assert_eq!(controller.toggle().unwrap(), PlaybackState::Playing);
        assert!(controller.is_playing());
        assert!(matches!(
            controller.last_failure(),
            Some(EngineError::PlaybackRequestFailed(_))
        ));
    }

    #[test]
    fn late_failure_is_recorded_without_rollback() {
        let mut controller = attached(RecordingSource::default());
        controller.toggle().unwrap();

        controller.report_failure(EngineError::PlaybackRequestFailed("no device".into()));

        assert!(controller.is_playing());
        assert!(controller.last_failure().is_some());

        // Pausing and playing again clears the stale failure.
        controller.toggle().unwrap();
        controller.toggle().unwrap();
        assert!(controller.last_failure().is_none());
    }

    #[test]
    fn toggle_requires_a_source() {
        let mut controller: PlaybackController<RecordingSource> = PlaybackController::new();

        assert_eq!(controller.toggle(), Err(EngineError::NotAttached));
        assert!(!controller.is_playing());
    }

    #[test]
    fn second_attach_is_refused() {
        let mut controller = attached(RecordingSource::default());

        assert_eq!(
            controller.attach(RecordingSource::default()),
            Err(EngineError::AlreadyAttached)
        );
    }

    #[test]
    fn stop_pauses_and_disables_toggle() {
        let source = RecordingSource::default();
        let mut controller = attached(source.clone());
        controller.toggle().unwrap();

        controller.stop();
        controller.stop();

        assert!(!controller.is_playing());
        assert!(controller.toggle().is_err());
        assert_eq!(*source.calls.borrow(), vec![Call::Play, Call::Pause]);
    }
}
