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
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, render::centred_rows, util::format::pad2};

pub(crate) fn draw_countdown(f: &mut Frame, area: Rect, app: &App) {
    let band = centred_rows(area, 7);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(band);

    let heading = Paragraph::new(app.catalogue.phrase("countdown"))
        .alignment(Alignment::Center)
        .fg(app.theme.text_colour)
        .bold();
    f.render_widget(heading, rows[0]);

    let state = app.countdown.current_state();
    let fields = [
        (state.years.to_string(), "years"),
        (state.days.to_string(), "days"),
        (pad2(state.hours), "hours"),
        (pad2(state.minutes), "minutes"),
        (pad2(state.seconds), "seconds"),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(rows[2]);

    for ((value, label), cell) in fields.iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_colour))
            .title_bottom(*label)
            .title_alignment(Alignment::Center);

        let number = Paragraph::new(value.as_str())
            .alignment(Alignment::Center)
            .fg(app.theme.accent_colour)
            .bold()
            .block(block);
        f.render_widget(number, *cell);
    }

    if app.countdown.is_expired() {
        let arrived = Paragraph::new("The day is here.")
            .alignment(Alignment::Center)
            .fg(app.theme.accent_colour);
        f.render_widget(arrived, rows[3]);
    }
}
