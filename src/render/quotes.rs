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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    App,
    render::{
        centred_rows,
        icons::{DOT_EMPTY, DOT_FILLED},
    },
};

pub(crate) fn draw_quotes(f: &mut Frame, area: Rect, app: &App) {
    let band = centred_rows(area, 8);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(band);

    let heading = Paragraph::new(app.catalogue.phrase("quotes"))
        .alignment(Alignment::Center)
        .fg(app.theme.text_colour)
        .bold();
    f.render_widget(heading, rows[0]);

    let quote = Paragraph::new(format!("\u{201C}{}\u{201D}", app.rotation.current_item()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(app.theme.accent_colour)
        .italic();
    f.render_widget(quote, rows[2]);

    let dots = position_dots(app.rotation.current_index(), app.rotation.len());
    let dots = Paragraph::new(Line::from(Span::styled(
        dots,
        Style::default().fg(app.theme.muted_colour),
    )))
    .alignment(Alignment::Center);
    f.render_widget(dots, rows[4]);
}

/// One dot per item, the current one filled.
fn position_dots(index: usize, len: usize) -> String {
    (0..len)
        .map(|i| if i == index { DOT_FILLED } else { DOT_EMPTY })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_current_position() {
        assert_eq!(position_dots(1, 3), "\u{25CB} \u{25CF} \u{25CB}");
        assert_eq!(position_dots(0, 1), "\u{25CF}");
    }
}
