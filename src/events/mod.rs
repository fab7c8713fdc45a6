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

//! Application events and the main event loop.
//!
//! Every source of change (keyboard and mouse input, terminal resizes, the
//! engine tickers and the audio worker) feeds a single channel. The main
//! thread drains it, applies each event to the owning engine and redraws.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    CountdownTick,
    RotationTick,

    PlaybackFailed(String),
    TitleChanged(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
            AppEvent::Resize(width, height) => handle_resize(app, width, height),
            AppEvent::CountdownTick => handle_countdown_tick(app),
            AppEvent::RotationTick => handle_rotation_tick(app),
            AppEvent::PlaybackFailed(reason) => handle_playback_failed(app, reason),
            AppEvent::TitleChanged(title) => handle_title_changed(app, title),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Maps keyboard input to application actions.
///
/// * **Application Control**: `q`, `Esc` or `Ctrl+C` exit.
/// * **Audio**: space or `p` toggles playback.
/// * **Scrolling**: `j`/`k`, arrows, `PageUp`/`PageDown`, `Home`/`End` move
///   between sections.
/// * **Quotes**: `n` shows the next quote straight away.
///
/// # Errors
///
/// Returns an error if an event cannot be sent back to the main loop.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(' '), _) | (KeyCode::Char('p'), _) => handle_toggle_playback(app),

        (KeyCode::Char('j'), _) | (KeyCode::Down, _) | (KeyCode::PageDown, _) => {
            app.sections.scroll_down()
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) | (KeyCode::PageUp, _) => {
            app.sections.scroll_up()
        }
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => app.sections.top(),
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => app.sections.bottom(),

        (KeyCode::Char('n'), _) => handle_rotation_tick(app),

        _ => {}
    }

    Ok(())
}

/// Pointer movement drives the parallax offset, the wheel scrolls sections.
fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            handle_pointer_move(app, mouse.column, mouse.row)
        }
        MouseEventKind::ScrollDown => app.sections.scroll_down(),
        MouseEventKind::ScrollUp => app.sections.scroll_up(),
        _ => {}
    }
}
