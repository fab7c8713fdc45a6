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

mod countdown;
mod hero;
mod icons;
mod player;
mod quotes;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    render::{
        countdown::draw_countdown, hero::draw_hero, icons::HEART, player::draw_player,
        quotes::draw_quotes,
    },
    sections::Section,
};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer layout: header, main, player, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(2));
    let main = block.inner(outer[1]);
    f.render_widget(block, outer[1]);

    match app.sections.current() {
        Section::Hero => draw_hero(f, main, app),
        Section::Countdown => draw_countdown(f, main, app),
        Section::Quotes => draw_quotes(f, main, app),
        Section::Tribute => draw_phrase(f, main, app, "tribute"),
        Section::Credits => draw_credits(f, main, app),
    }

    draw_player(f, outer[2], app);
    draw_footer(f, outer[3], app);
}

/// Section tabs, the current one highlighted.
fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let current = app.sections.current();

    let mut spans = vec![];
    for section in Section::ALL {
        let style = if section == current {
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.muted_colour)
        };
        spans.push(Span::styled(format!(" {} ", section.title()), style));
    }
    spans.push(Span::styled(
        format!(" {}/{}", app.sections.position() + 1, Section::ALL.len()),
        Style::default().fg(app.theme.muted_colour),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_phrase(f: &mut Frame, area: Rect, app: &App, label: &str) {
    let text = Paragraph::new(app.catalogue.phrase(label))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(app.theme.text_colour);

    f.render_widget(text, centred_rows(area, 3));
}

fn draw_credits(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {} {}", HEART, app.catalogue.phrase("credits"), HEART),
            Style::default().fg(app.theme.accent_colour),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.config.audio_url.as_str(),
            Style::default().fg(app.theme.muted_colour),
        )),
    ];

    let credits = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(credits, centred_rows(area, 3));
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let help = Paragraph::new(
        "space play/pause  j/k scroll  n next quote  q quit",
    )
    .alignment(Alignment::Center)
    .fg(app.theme.muted_colour);

    f.render_widget(help, area);
}

/// A full-width band of `rows` lines, vertically centred in `area`.
pub(crate) fn centred_rows(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - rows) / 2,
        width: area.width,
        height: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_rows_fit_inside_area() {
        let area = Rect::new(2, 4, 40, 10);

        assert_eq!(centred_rows(area, 4), Rect::new(2, 7, 40, 4));
        assert_eq!(centred_rows(area, 50), area);
    }
}
