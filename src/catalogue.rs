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

//! Static content shown around the engines.
//!
//! The catalogue is a fixed lookup table. It is built once at startup and
//! handed to whatever needs it; nothing mutates it afterwards.

use std::sync::Arc;

const TITLE: &str = "For Those Who Came Before";
const SUBTITLE: &str = "a small tribute, five years in the making";

const QUOTES: &[&str] = &[
    "What we have once enjoyed we can never lose. All that we love deeply becomes a part of us.",
    "The song is ended, but the melody lingers on.",
    "To live in hearts we leave behind is not to die.",
    "Those we love don't go away, they walk beside us every day.",
    "Grief is the price we pay for love.",
    "How lucky I am to have something that makes saying goodbye so hard.",
];

const PHRASES: &[(&str, &str)] = &[
    ("countdown", "Until we gather again"),
    ("quotes", "Words to carry"),
    (
        "tribute",
        "For every late night, every shared song and every quiet kindness.",
    ),
    ("credits", "Made with love by friends and family"),
    ("audio_on", "Now playing"),
    ("audio_off", "Press space to play the music"),
];

#[derive(Clone, Debug)]
pub(crate) struct Catalogue {
    pub(crate) title: String,
    pub(crate) subtitle: String,
    quotes: Arc<[String]>,
    phrases: Vec<(String, String)>,
}

impl Catalogue {
    pub(crate) fn builtin() -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            quotes: QUOTES.iter().map(|q| q.to_string()).collect(),
            phrases: PHRASES
                .iter()
                .map(|(label, text)| (label.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Shared, immutable view of the quotes, suitable for a rotation engine.
    pub(crate) fn quotes(&self) -> Arc<[String]> {
        self.quotes.clone()
    }

    /// Looks up a labelled phrase, falling back to an empty string.
    pub(crate) fn phrase(&self, label: &str) -> &str {
        self.phrases
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue_has_quotes_and_phrases() {
        let catalogue = Catalogue::builtin();

        assert_eq!(catalogue.quotes().len(), QUOTES.len());
        assert!(!catalogue.quotes().is_empty());
        assert_eq!(catalogue.phrase("countdown"), "Until we gather again");
    }

    #[test]
    fn unknown_phrase_is_empty() {
        assert_eq!(Catalogue::builtin().phrase("missing"), "");
    }

    #[test]
    fn quotes_are_shared_not_copied() {
        let catalogue = Catalogue::builtin();

        assert!(Arc::ptr_eq(&catalogue.quotes(), &catalogue.quotes()));
    }
}
