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

//! Time-driven state engines.
//!
//! Each engine owns one piece of state that tracks wall-clock time, user input
//! or playback, and is updated on its own cadence:
//!
//! * [`CountdownEngine`]: remaining time until a fixed instant, refreshed by a
//!   one second ticker.
//! * [`RotationEngine`]: an index cycling through a fixed list of items.
//! * [`PlaybackController`]: the intended play/pause state of a single audio
//!   source.
//! * [`PointerParallax`]: a bounded offset derived from the pointer position.
//!
//! The engines share nothing with one another. The application owns all four,
//! reads their output on every render and tears them down together through
//! the [`Lifecycle`] trait.

pub(crate) mod clock;
pub(crate) mod countdown;
pub(crate) mod errors;
pub(crate) mod parallax;
pub(crate) mod playback;
pub(crate) mod rotation;
pub(crate) mod ticker;

pub(crate) use clock::{Clock, SystemClock};
pub(crate) use countdown::{CountdownEngine, CountdownState, TargetInstant};
pub(crate) use errors::EngineError;
pub(crate) use parallax::{ParallaxOffset, PointerParallax};
pub(crate) use playback::{MediaSource, PlaybackController};
pub(crate) use rotation::RotationEngine;
pub(crate) use ticker::Ticker;

/// Uniform start/stop surface shared by every engine.
///
/// Engines are created once and stopped exactly once. Calling [`stop`] again
/// is harmless.
///
/// [`stop`]: Lifecycle::stop
pub(crate) trait Lifecycle {
    /// Short name used in log output and teardown errors.
    fn name(&self) -> &'static str;

    /// Whether the engine is still accepting updates.
    fn is_active(&self) -> bool;

    /// Cancels the engine's timer or listener and disposes of it.
    fn stop(&mut self);
}

/// Stops every engine in the given order.
///
/// Engines that were already stopped are skipped silently.
pub(crate) fn stop_all(engines: &mut [&mut dyn Lifecycle]) {
    for engine in engines.iter_mut() {
        if engine.is_active() {
            tracing::debug!(engine = engine.name(), "stopping engine");
            engine.stop();
        }
    }
}
