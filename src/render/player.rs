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
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    util,
};

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(chunks[0]);

    let (icon, label) = if app.playback.is_playing() {
        (ICON_PLAY, app.catalogue.phrase("audio_on"))
    } else {
        (ICON_PAUSE, app.catalogue.phrase("audio_off"))
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.text_colour),
        Span::styled(label, Style::default().fg(app.theme.accent_colour)),
    ];
    if app.playback.is_playing() {
        if let Some(title) = &app.track_title {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), info_chunks[0]);

    let state = app.countdown.current_state();
    let remaining = if state.is_zero() {
        "arrived".to_string()
    } else {
        util::format::format_countdown(&state)
    };
    let remaining = Paragraph::new(remaining)
        .alignment(Alignment::Right)
        .fg(app.theme.muted_colour);
    f.render_widget(remaining, info_chunks[1]);

    let notice = app
        .playback
        .last_failure()
        .map(|e| e.to_string())
        .or_else(|| app.playback_notice.clone())
        .or_else(|| app.status.clone());
    if let Some(notice) = notice {
        let notice = Paragraph::new(notice).fg(app.theme.warning_colour);
        f.render_widget(notice, chunks[1]);
    }
}
