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

//! Scroll position through the page sections.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Section {
    #[default]
    Hero,
    Countdown,
    Quotes,
    Tribute,
    Credits,
}

impl Section {
    pub(crate) const ALL: [Section; 5] = [
        Section::Hero,
        Section::Countdown,
        Section::Quotes,
        Section::Tribute,
        Section::Credits,
    ];

    pub(crate) fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Welcome",
            Section::Countdown => "Countdown",
            Section::Quotes => "Quotes",
            Section::Tribute => "Tribute",
            Section::Credits => "Credits",
        }
    }
}

/// Moves through [`Section::ALL`] without wrapping, like scrolling a page.
#[derive(Default)]
pub(crate) struct SectionScroller {
    position: usize,
}

impl SectionScroller {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> Section {
        Section::ALL[self.position]
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn scroll_down(&mut self) {
        self.position = (self.position + 1).min(Section::ALL.len() - 1);
    }

    pub(crate) fn scroll_up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub(crate) fn top(&mut self) {
        self.position = 0;
    }

    pub(crate) fn bottom(&mut self) {
        self.position = Section::ALL.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_stops_at_both_ends() {
        let mut scroller = SectionScroller::new();

        scroller.scroll_up();
        assert_eq!(scroller.current(), Section::Hero);

        for _ in 0..10 {
            scroller.scroll_down();
        }
        assert_eq!(scroller.current(), Section::Credits);

        scroller.scroll_up();
        assert_eq!(scroller.current(), Section::Tribute);

        scroller.top();
        assert_eq!(scroller.position(), 0);
        scroller.bottom();
        assert_eq!(scroller.position(), Section::ALL.len() - 1);
    }
}
