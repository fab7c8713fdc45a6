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

//! Engine error taxonomy.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub(crate) enum EngineError {
    /// The rotation engine was given nothing to rotate through.
    #[error("rotation list must contain at least one item")]
    EmptyRotationList,

    /// An operation was attempted on an engine that has already been stopped.
    #[error("{engine} engine has already been stopped")]
    TeardownAfterDispose { engine: &'static str },

    /// A play request was rejected by the media backend.
    #[error("playback request failed: {0}")]
    PlaybackRequestFailed(String),

    /// The countdown target cannot be represented as a point in time.
    #[error("a countdown of {years} years is out of range")]
    TargetOutOfRange { years: u32 },

    /// A periodic timer was asked to tick with no delay between ticks.
    #[error("{name} interval must be greater than zero")]
    ZeroInterval { name: &'static str },

    /// The playback controller has no media source yet.
    #[error("playback controller is not attached to a media source")]
    NotAttached,

    /// The playback controller is already bound to a media source.
    #[error("playback controller is already attached to a media source")]
    AlreadyAttached,
}
