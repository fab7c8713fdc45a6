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

//! Countdown to a fixed instant.
//!
//! The remaining time is broken down using a 365.25 day year rather than
//! calendar arithmetic, so the years/days split is an approximation that does
//! not account for the actual leap years between now and the target.
//!
//! Every tick recomputes the whole state from the live clock. Nothing is
//! accumulated between ticks, so a late or skipped tick cannot cause drift.

use std::time::{Duration, SystemTime};

use crate::engine::{Clock, EngineError, Lifecycle, SystemClock, Ticker};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

const DAYS_PER_YEAR: f64 = 365.25;

const ENGINE_NAME: &str = "countdown";

/// Remaining time, broken down for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CountdownState {
    pub(crate) years: u64,
    pub(crate) days: u64,
    pub(crate) hours: u64,
    pub(crate) minutes: u64,
    pub(crate) seconds: u64,
}

impl CountdownState {
    pub(crate) const ZERO: Self = Self {
        years: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Splits a remaining duration in milliseconds into display fields.
    pub(crate) fn from_remaining_ms(remaining_ms: u64) -> Self {
        if remaining_ms == 0 {
            return Self::ZERO;
        }

        let ms_per_year = MS_PER_DAY as f64 * DAYS_PER_YEAR;
        let total_days = remaining_ms / MS_PER_DAY;

        Self {
            years: (remaining_ms as f64 / ms_per_year).floor() as u64,
            days: (total_days as f64 % DAYS_PER_YEAR).floor() as u64,
            hours: (remaining_ms / MS_PER_HOUR) % 24,
            minutes: (remaining_ms / MS_PER_MINUTE) % 60,
            seconds: (remaining_ms / MS_PER_SECOND) % 60,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// The fixed point in time the countdown runs towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TargetInstant(SystemTime);

impl TargetInstant {
    #[cfg(test)]
    pub(crate) fn at(instant: SystemTime) -> Self {
        Self(instant)
    }

    /// An instant a whole number of 365.25 day years after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TargetOutOfRange`] if the instant overflows.
    pub(crate) fn years_from(now: SystemTime, years: u32) -> Result<Self, EngineError> {
        u64::from(years)
            .checked_mul(1461 * MS_PER_DAY)
            .map(|quarter_days_ms| Duration::from_millis(quarter_days_ms / 4))
            .and_then(|ahead| now.checked_add(ahead))
            .map(Self)
            .ok_or(EngineError::TargetOutOfRange { years })
    }

    /// Milliseconds left until the target, or zero once it has been reached.
    pub(crate) fn remaining_ms(&self, now: SystemTime) -> u64 {
        self.0
            .duration_since(now)
            .map(|remaining| remaining.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Recomputes a [`CountdownState`] from the clock on every tick.
pub(crate) struct CountdownEngine<C: Clock = SystemClock> {
    clock: C,
    target: TargetInstant,
    state: CountdownState,
    expired: bool,
    active: bool,
    ticker: Option<Ticker>,
}

impl<C: Clock> CountdownEngine<C> {
    /// Starts a countdown; the first state is available immediately.
    pub(crate) fn start(target: TargetInstant, clock: C) -> Self {
        let mut engine = Self {
            clock,
            target,
            state: CountdownState::ZERO,
            expired: false,
            active: true,
            ticker: None,
        };
        engine.recompute();

        tracing::debug!(state = ?engine.state, "countdown started");
        engine
    }

    /// Hands the engine the ticker that drives it, so that stopping the
    /// engine also cancels the timer.
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

    /// Recomputes the state from the current time.
    pub(crate) fn tick(&mut self) -> Result<CountdownState, EngineError> {
        if !self.active {
            return Err(EngineError::TeardownAfterDispose {
                engine: ENGINE_NAME,
            });
        }

        self.recompute();
        Ok(self.state)
    }

    pub(crate) fn current_state(&self) -> CountdownState {
        self.state
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.expired
    }

    fn recompute(&mut self) {
        if self.expired {
            return;
        }

        let remaining_ms = self.target.remaining_ms(self.clock.now());
        if remaining_ms == 0 {
            tracing::info!("countdown reached its target");
            self.expired = true;
            self.state = CountdownState::ZERO;
        } else {
            self.state = CountdownState::from_remaining_ms(remaining_ms);
        }
    }
}

impl<C: Clock> Lifecycle for CountdownEngine<C> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::test_support::ManualClock;

    fn epoch_plus(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn first_state_is_available_at_start() {
        let clock = ManualClock::new(epoch_plus(1_000_000));
        let target = TargetInstant::at(epoch_plus(1_000_000 + 90_061));

        let engine = CountdownEngine::start(target, clock);

        assert_eq!(
            engine.current_state(),
            CountdownState {
                years: 0,
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn five_years_out_after_one_tick() {
        let start = epoch_plus(1_700_000_000);
        let clock = ManualClock::new(start);
        let target = TargetInstant::years_from(start, 5).unwrap();
        let mut engine = CountdownEngine::start(target, clock.clone());

        clock.advance(Duration::from_millis(1_000));
        let state = engine.tick().unwrap();

        let remaining = target.remaining_ms(clock.now());
        let ms_per_year = MS_PER_DAY as f64 * DAYS_PER_YEAR;
        assert_eq!(state.years, (remaining as f64 / ms_per_year).floor() as u64);
        assert_eq!(
            state,
            CountdownState {
                years: 4,
                days: 365,
                hours: 5,
                minutes: 59,
                seconds: 59,
            }
        );
    }

    #[test]
    fn pins_to_zero_once_target_passes() {
        let start = epoch_plus(10_000);
        let clock = ManualClock::new(start);
        let target = TargetInstant::at(start + Duration::from_secs(2));
        let mut engine = CountdownEngine::start(target, clock.clone());

        clock.advance(Duration::from_secs(1));
        assert_eq!(engine.tick().unwrap().seconds, 1);

        clock.advance(Duration::from_secs(1));
        assert!(engine.tick().unwrap().is_zero());
        assert!(engine.is_expired());

        for _ in 0..5 {
            clock.advance(Duration::from_secs(1));
            assert_eq!(engine.tick().unwrap(), CountdownState::ZERO);
        }

        // A clock stepping backwards does not revive the countdown.
        clock.rewind(Duration::from_secs(60));
        assert_eq!(engine.tick().unwrap(), CountdownState::ZERO);
    }

    #[test]
    fn target_in_the_past_starts_at_zero() {
        let clock = ManualClock::new(epoch_plus(500));
        let engine = CountdownEngine::start(TargetInstant::at(epoch_plus(100)), clock);

        assert!(engine.current_state().is_zero());
        assert!(engine.is_expired());
    }

    #[test]
    fn each_tick_reads_the_live_clock() {
        let start = epoch_plus(0);
        let clock = ManualClock::new(start);
        let target = TargetInstant::at(start + Duration::from_secs(3_600));
        let mut engine = CountdownEngine::start(target, clock.clone());

        // A long gap between ticks is reflected in full on the next tick.
        clock.advance(Duration::from_secs(125));
        let state = engine.tick().unwrap();

        assert_eq!((state.minutes, state.seconds), (57, 55));
    }

    #[test]
    fn ticks_after_stop_change_nothing() {
        let start = epoch_plus(0);
        let clock = ManualClock::new(start);
        let target = TargetInstant::at(start + Duration::from_secs(100));
        let mut engine = CountdownEngine::start(target, clock.clone());
        let before = engine.current_state();

        engine.stop();
        engine.stop();
        clock.advance(Duration::from_secs(10));

        assert_eq!(
            engine.tick(),
            Err(EngineError::TeardownAfterDispose { engine: "countdown" })
        );
        assert_eq!(engine.current_state(), before);
        assert!(!engine.is_active());
    }

    #[test]
    fn attaching_a_ticker_after_stop_cancels_it() {
        let clock = ManualClock::new(epoch_plus(0));
        let mut engine = CountdownEngine::start(TargetInstant::at(epoch_plus(10)), clock);
        engine.stop();

        let ticker = Ticker::spawn("late", Duration::from_secs(3600), || true).unwrap();
        assert!(engine.attach_ticker(ticker).is_err());
    }

    #[test]
    fn huge_year_counts_are_refused_instead_of_overflowing() {
        let now = epoch_plus(1_700_000_000);

        assert_eq!(
            TargetInstant::years_from(now, u32::MAX),
            Err(EngineError::TargetOutOfRange { years: u32::MAX })
        );
        assert!(TargetInstant::years_from(now, 1_000).is_ok());
    }

    #[test]
    fn field_breakdown_uses_average_year() {
        let one_year_ms = (MS_PER_DAY as f64 * DAYS_PER_YEAR) as u64;
        let state = CountdownState::from_remaining_ms(one_year_ms + 2 * MS_PER_DAY);

        assert_eq!(state.years, 1);
        assert_eq!(state.days, 1);
        // The quarter day left over from the average year shows up as hours.
        assert_eq!(state.hours, 6);
    }
}
