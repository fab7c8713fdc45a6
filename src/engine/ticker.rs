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

//! Cancellable periodic timers.
//!
//! A [`Ticker`] runs a callback on its own thread at a fixed interval. Each
//! engine that needs a periodic update owns exactly one ticker, so there is no
//! central scheduler and no ordering between engines.
//!
//! The thread blocks on a cancellation channel with a timeout equal to the
//! interval. A timeout is a tick; anything else (the sender being dropped) is
//! a request to stop. Ticks are never caught up, so a late tick is followed by
//! a full interval rather than a burst.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::engine::EngineError;

pub(crate) struct Ticker {
    name: &'static str,
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns a ticker thread.
    ///
    /// # Arguments
    ///
    /// * `name` - Label used in log output.
    /// * `interval` - Time between ticks.
    /// * `on_tick` - Invoked once per tick. Returning `false` ends the ticker,
    ///   typically because the receiving end of an event channel has gone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ZeroInterval`] for a zero interval, which would
    /// otherwise tick as fast as the thread can spin.
    pub(crate) fn spawn<F>(
        name: &'static str,
        interval: Duration,
        mut on_tick: F,
    ) -> Result<Self, EngineError>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        if interval.is_zero() {
            return Err(EngineError::ZeroInterval { name });
        }

        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !on_tick() {
                            tracing::debug!(ticker = name, "tick receiver closed");
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        tracing::debug!(ticker = name, interval_ms = interval.as_millis() as u64, "ticker started");

        Ok(Self {
            name,
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        })
    }

    /// Stops the ticker and waits for its thread to exit.
    ///
    /// Once this returns the callback will not run again. Calling it more than
    /// once is a no-op.
    pub(crate) fn cancel(&mut self) {
        drop(self.cancel_tx.take());

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!(ticker = self.name, "ticker thread panicked");
            } else {
                tracing::debug!(ticker = self.name, "ticker cancelled");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn ticks_until_cancelled_then_stays_silent() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        let mut ticker = Ticker::spawn("test", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .unwrap();

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) < 3 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(count.load(Ordering::SeqCst) >= 3);

        ticker.cancel();
        assert!(ticker.handle.is_none());

        let after_cancel = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn cancel_is_idempotent_and_prompt() {
        let mut ticker = Ticker::spawn("slow", Duration::from_secs(3600), || true).unwrap();

        let started = std::time::Instant::now();
        ticker.cancel();
        ticker.cancel();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(ticker.handle.is_none());
    }

    #[test]
    fn ends_when_callback_reports_closed_receiver() {
        let (tx, rx) = mpsc::channel::<()>();
        drop(rx);

        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let mut ticker = Ticker::spawn("closed", Duration::from_millis(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            tx.send(()).is_ok()
        })
        .unwrap();

        // The thread exits after its first tick, so joining returns promptly.
        ticker.cancel();
        assert!(ticks.load(Ordering::SeqCst) <= 1);
    }

    #[test]
    fn zero_interval_is_refused() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();

        let result = Ticker::spawn("spin", Duration::ZERO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(matches!(
            result,
            Err(EngineError::ZeroInterval { name: "spin" })
        ));
        thread::sleep(Duration::from_millis(20));
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }
}
