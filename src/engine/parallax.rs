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

//! Pointer-driven parallax offset.

use crate::engine::{EngineError, Lifecycle};

const ENGINE_NAME: &str = "parallax";

/// Offset in the range `[-strength, strength]` on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ParallaxOffset {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

/// Maps the latest pointer position to an offset relative to the viewport
/// centre. No smoothing is applied; each event replaces the previous offset.
pub(crate) struct PointerParallax {
    strength: f64,
    offset: ParallaxOffset,
    listening: bool,
}

impl PointerParallax {
    pub(crate) fn start(strength: f64) -> Self {
        Self {
            strength: strength.abs(),
            offset: ParallaxOffset::default(),
            listening: true,
        }
    }

    /// Handles one pointer-move event.
    ///
    /// # Arguments
    ///
    /// * `pointer` - Raw pointer position `(x, y)`.
    /// * `viewport` - Current viewport size `(width, height)`.
    ///
    /// Events against an empty viewport are ignored.
    pub(crate) fn on_pointer_move(
        &mut self,
        pointer: (f64, f64),
        viewport: (f64, f64),
    ) -> Result<ParallaxOffset, EngineError> {
        if !self.listening {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }

        let (px, py) = pointer;
        let (w, h) = viewport;
        if w <= 0.0 || h <= 0.0 {
            return Ok(self.offset);
        }

        let center_x = w / 2.0;
        let center_y = h / 2.0;

        self.offset = ParallaxOffset {
            x: ((px - center_x) / center_x * self.strength).clamp(-self.strength, self.strength),
            y: ((py - center_y) / center_y * self.strength).clamp(-self.strength, self.strength),
        };
        Ok(self.offset)
    }

    pub(crate) fn current_offset(&self) -> ParallaxOffset {
        self.offset
    }
}

impl Lifecycle for PointerParallax {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn is_active(&self) -> bool {
        self.listening
    }

    fn stop(&mut self) {
        self.listening = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_before_any_event() {
        let parallax = PointerParallax::start(20.0);

        assert_eq!(parallax.current_offset(), ParallaxOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn centre_maps_to_zero() {
        let mut parallax = PointerParallax::start(20.0);

        let offset = parallax.on_pointer_move((400.0, 300.0), (800.0, 600.0)).unwrap();

        assert_eq!(offset, ParallaxOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn top_left_corner_maps_to_negative_strength() {
        let mut parallax = PointerParallax::start(3.0);

        let offset = parallax.on_pointer_move((0.0, 0.0), (120.0, 40.0)).unwrap();

        assert_eq!(offset, ParallaxOffset { x: -3.0, y: -3.0 });
    }

    #[test]
    fn offset_stays_within_strength() {
        let mut parallax = PointerParallax::start(5.0);

        let offset = parallax.on_pointer_move((1_000.0, -50.0), (100.0, 100.0)).unwrap();

        assert_eq!(offset, ParallaxOffset { x: 5.0, y: -5.0 });
    }

    #[test]
    fn empty_viewport_keeps_last_offset() {
        let mut parallax = PointerParallax::start(4.0);
        parallax.on_pointer_move((0.0, 0.0), (10.0, 10.0)).unwrap();

        let offset = parallax.on_pointer_move((3.0, 3.0), (0.0, 10.0)).unwrap();

        assert_eq!(offset, ParallaxOffset { x: -4.0, y: -4.0 });
    }

    #[test]
    fn events_after_stop_are_ignored() {
        let mut parallax = PointerParallax::start(4.0);
        parallax.on_pointer_move((10.0, 5.0), (10.0, 10.0)).unwrap();
        let before = parallax.current_offset();

        parallax.stop();
        parallax.stop();

        assert!(parallax.on_pointer_move((0.0, 0.0), (10.0, 10.0)).is_err());
        assert_eq!(parallax.current_offset(), before);
    }

    #[test]
    fn stop_without_events_is_safe() {
        let mut parallax = PointerParallax::start(1.0);

        parallax.stop();

        assert!(!parallax.is_active());
    }
}
