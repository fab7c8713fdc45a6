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

//! Index rotation through a fixed list.

use std::{sync::Arc, time::Duration};

use crate::engine::{EngineError, Lifecycle, Ticker};

pub(crate) const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(7_000);

const ENGINE_NAME: &str = "rotation";

/// Cycles an index through `items`, one step per tick, wrapping to the start
/// after the last item.
pub(crate) struct RotationEngine<T> {
    items: Arc<[T]>,
    index: usize,
    interval: Duration,
    active: bool,
    ticker: Option<Ticker>,
}

impl<T> RotationEngine<T> {
    /// Starts at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyRotationList`] if `items` is empty, or
    /// [`EngineError::ZeroInterval`] if `interval` is zero; the engine is not
    /// created.
    pub(crate) fn start(items: Arc<[T]>, interval: Duration) -> Result<Self, EngineError> {
        if items.is_empty() {
            return Err(EngineError::EmptyRotationList);
        }
        if interval.is_zero() {
            return Err(EngineError::ZeroInterval {
                name: ENGINE_NAME,
            });
        }

        tracing::debug!(
            items = items.len(),
            interval_ms = interval.as_millis() as u64,
            "rotation started"
        );

        Ok(Self {
            items,
            index: 0,
            interval,
            active: true,
            ticker: None,
        })
    }

    pub(crate) fn attach_ticker(&mut self, mut ticker: Ticker) -> Result<(), EngineError> {
        if !self.active {
            ticker.cancel();
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }

        if let Some(mut previous) = self.ticker.replace(ticker) {
            previous.cancel();
        }
        Ok(())
    }

    /// Advances exactly one step.
    pub(crate) fn tick(&mut self) -> Result<usize, EngineError> {
        if !self.active {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }

        self.index = (self.current_index() + 1) % self.items.len();
        Ok(self.index)
    }

    /// Swaps the underlying list while running. The index is kept and read
    /// modulo the new length.
    #[cfg(test)]
    pub(crate) fn replace_items(&mut self, items: Arc<[T]>) -> Result<(), EngineError> {
        if !self.active {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }
        if items.is_empty() {
            return Err(EngineError::EmptyRotationList);
        }

        self.items = items;
        Ok(())
    }

    pub(crate) fn current_index(&self) -> usize {
        self.index % self.items.len()
    }

    pub(crate) fn current_item(&self) -> &T {
        &self.items[self.current_index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}

impl<T> Lifecycle for RotationEngine<T> {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.active = false;
    }
}
