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

//! Wall clock access.

use std::time::SystemTime;

/// Source of the current time.
pub(crate) trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Local system time, with no synchronisation or timezone handling.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{
        sync::{Arc, Mutex},
        time::{Duration, SystemTime},
    };

    use super::Clock;

    /// A clock that only moves when told to.
    #[derive(Clone)]
    pub(crate) struct ManualClock {
        now: Arc<Mutex<SystemTime>>,
    }

    impl ManualClock {
        pub(crate) fn new(start: SystemTime) -> Self {
            Self {
                now: Arc::new(Mutex::new(start)),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            let mut now = self.now.lock().expect("clock mutex poisoned");
            *now += by;
        }

        pub(crate) fn rewind(&self, by: Duration) {
            let mut now = self.now.lock().expect("clock mutex poisoned");
            *now -= by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> SystemTime {
            *self.now.lock().expect("clock mutex poisoned")
        }
    }
}
