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

use crate::{App, engine::EngineError};

pub(super) fn handle_countdown_tick(app: &mut App) {
    if let Err(e) = app.countdown.tick() {
        tracing::debug!(error = %e, "ignored countdown tick");
    }
}

pub(super) fn handle_rotation_tick(app: &mut App) {
    if let Err(e) = app.rotation.tick() {
        tracing::debug!(error = %e, "ignored rotation tick");
    }
}

pub(super) fn handle_toggle_playback(app: &mut App) {
    match app.playback.toggle() {
        Ok(_) => app.playback_notice = None,
        Err(e) => {
            tracing::warn!(error = %e, "could not toggle playback");
            app.playback_notice = Some(e.to_string());
        }
    }
}

pub(super) fn handle_playback_failed(app: &mut App, reason: String) {
    app.playback
        .report_failure(EngineError::PlaybackRequestFailed(reason));
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    app.track_title = Some(title);
}

pub(super) fn handle_pointer_move(app: &mut App, column: u16, row: u16) {
    let (width, height) = app.viewport;
    let pointer = (f64::from(column), f64::from(row));
    let viewport = (f64::from(width), f64::from(height));

    if let Err(e) = app.parallax.on_pointer_move(pointer, viewport) {
        tracing::debug!(error = %e, "ignored pointer event");
    }
}

pub(super) fn handle_resize(app: &mut App, width: u16, height: u16) {
    app.viewport = (width, height);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::error!("{}", message);
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalogue::Catalogue, config::AppConfig, engine::Lifecycle};

    fn app() -> App {
        App::new(AppConfig::default(), Catalogue::builtin()).unwrap()
    }

    #[test]
    fn toggling_keeps_unrelated_status() {
        let mut app = app();
        app.status = Some("Config: rotation_interval_ms must be greater than zero".to_string());

        handle_toggle_playback(&mut app);
        handle_toggle_playback(&mut app);

        assert!(app.status.is_some());
        assert!(app.playback_notice.is_none());
    }

    #[test]
    fn toggle_failure_sets_its_own_notice() {
        let mut app = app();
        app.status = Some("Config: problem".to_string());
        app.playback.stop();

        handle_toggle_playback(&mut app);

        assert!(app.playback_notice.is_some());
        assert_eq!(app.status.as_deref(), Some("Config: problem"));
    }
}
