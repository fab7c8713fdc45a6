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

use crate::engine::CountdownState;

/// Two-digit zero padded field, widening for larger values.
pub(crate) fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Compact single-line rendering, e.g. `4y 365d 05:59:59`.
pub(crate) fn format_countdown(state: &CountdownState) -> String {
    format!(
        "{}y {}d {}:{}:{}",
        state.years,
        state.days,
        pad2(state.hours),
        pad2(state.minutes),
        pad2(state.seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_countdown() {
        let state = CountdownState {
            years: 4,
            days: 365,
            hours: 5,
            minutes: 59,
            seconds: 9,
        };

        assert_eq!(format_countdown(&state), "4y 365d 05:59:09");
        assert_eq!(format_countdown(&CountdownState::ZERO), "0y 0d 00:00:00");
    }
}
