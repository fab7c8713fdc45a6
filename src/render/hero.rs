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
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, engine::ParallaxOffset, render::centred_rows};

/// Title and subtitle, nudged by the parallax offset so they drift away from
/// the pointer.
pub(crate) fn draw_hero(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            app.catalogue.title.as_str(),
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.catalogue.subtitle.as_str(),
            Style::default()
                .fg(app.theme.text_colour)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let base = centred_rows(area, 3);
    let target = shifted(area, base, app.parallax.current_offset());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

/// Moves `rect` against the offset, rounded to whole cells and kept inside
/// `bounds`.
fn shifted(bounds: Rect, rect: Rect, offset: ParallaxOffset) -> Rect {
    let dx = -offset.x.round() as i32;
    let dy = -offset.y.round() as i32;

    let max_x = i32::from(bounds.x) + i32::from(bounds.width.saturating_sub(rect.width));
    let max_y = i32::from(bounds.y) + i32::from(bounds.height.saturating_sub(rect.height));

    let x = (i32::from(rect.x) + dx).clamp(i32::from(bounds.x), max_x);
    let y = (i32::from(rect.y) + dy).clamp(i32::from(bounds.y), max_y);

    Rect {
        x: x as u16,
        y: y as u16,
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_leaves_rect_alone() {
        let bounds = Rect::new(0, 0, 80, 20);
        let rect = Rect::new(10, 8, 60, 3);

        assert_eq!(shifted(bounds, rect, ParallaxOffset::default()), rect);
    }

    #[test]
    fn moves_away_from_pointer() {
        let bounds = Rect::new(0, 0, 80, 20);
        let rect = Rect::new(10, 8, 60, 3);

        let moved = shifted(bounds, rect, ParallaxOffset { x: -2.4, y: 1.6 });

        assert_eq!((moved.x, moved.y), (12, 6));
    }

    #[test]
    fn stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 80, 20);
        let rect = Rect::new(0, 17, 80, 3);

        let moved = shifted(bounds, rect, ParallaxOffset { x: 3.0, y: -3.0 });

        assert_eq!((moved.x, moved.y), (0, 17));
    }
}
