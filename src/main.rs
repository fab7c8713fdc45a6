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

//! # Tribute.
//!
//! A terminal rendition of a single-page tribute: a live countdown, a rotating
//! quote carousel, a toggleable soundtrack and a pointer parallax effect,
//! spread across a handful of scrollable sections.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the engines and
//!   renders the UI.
//! * **Ticker Threads** drive the countdown and the quote rotation, one per
//!   engine, each on its own cadence.
//! * An **Audio Worker** plays the soundtrack through MPV and reports failures
//!   back asynchronously.
//! * An **Input Thread** forwards keyboard, mouse and resize events.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. All threads talk
//! to the main thread through a single `std::sync::mpsc` channel, and every
//! engine is stopped before the terminal is restored.

mod catalogue;
mod config;
mod engine;
mod events;
mod player;
mod render;
mod sections;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    catalogue::Catalogue,
    config::AppConfig,
    engine::{
        Clock, CountdownEngine, Lifecycle, PlaybackController, PointerParallax, RotationEngine,
        SystemClock, TargetInstant, Ticker,
    },
    events::{AppEvent, process_events},
    player::AudioPlayer,
    sections::SectionScroller,
    theme::Theme,
};

const RENDER_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub catalogue: Catalogue,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub countdown: CountdownEngine,
    pub rotation: RotationEngine<String>,
    pub playback: PlaybackController<AudioPlayer>,
    pub parallax: PointerParallax,

    pub sections: SectionScroller,
    pub viewport: (u16, u16),

    pub track_title: Option<String>,
    pub playback_notice: Option<String>,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state, starting every engine.
    ///
    /// The tickers are not running yet; see [`App::start_tickers`].
    pub fn new(config: AppConfig, catalogue: Catalogue) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let clock = SystemClock;
        let target = TargetInstant::years_from(clock.now(), config.countdown_years)
            .context("Failed to compute countdown target")?;
        let countdown = CountdownEngine::start(target, clock);

        let rotation = RotationEngine::start(catalogue.quotes(), config.rotation_interval())
            .context("Failed to start quote rotation")?;

        let mut playback = PlaybackController::new();
        playback
            .attach(AudioPlayer::new(&config.audio_url, event_tx.clone()))
            .context("Failed to attach audio player")?;

        let parallax = PointerParallax::start(config.parallax_strength);

        Ok(Self {
            config,
            theme: Theme::default(),
            catalogue,
            event_tx,
            event_rx,
            countdown,
            rotation,
            playback,
            parallax,
            sections: SectionScroller::new(),
            viewport: (0, 0),
            track_title: None,
            playback_notice: None,
            status: None,
        })
    }

    /// Gives the countdown and rotation engines their own tickers.
    pub fn start_tickers(&mut self) -> Result<()> {
        let countdown_tx = self.event_tx.clone();
        let countdown_ticker = Ticker::spawn("countdown", self.config.countdown_tick(), move || {
            countdown_tx.send(AppEvent::CountdownTick).is_ok()
        })
        .context("Failed to spawn countdown ticker")?;
        self.countdown
            .attach_ticker(countdown_ticker)
            .context("Failed to start countdown ticker")?;

        let rotation_tx = self.event_tx.clone();
        let rotation_ticker = Ticker::spawn("rotation", self.rotation.interval(), move || {
            rotation_tx.send(AppEvent::RotationTick).is_ok()
        })
        .context("Failed to spawn rotation ticker")?;
        self.rotation
            .attach_ticker(rotation_ticker)
            .context("Failed to start rotation ticker")?;

        Ok(())
    }

    /// Stops every engine, cancelling tickers and listeners.
    pub fn shutdown(&mut self) {
        let mut engines: [&mut dyn Lifecycle; 4] = [
            &mut self.countdown,
            &mut self.rotation,
            &mut self.playback,
            &mut self.parallax,
        ];
        engine::stop_all(&mut engines);
    }
}

/// The entry point of the application.
///
/// Loads configuration, installs logging, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let (config, problems) = config::load_config().sanitised();

    util::logging::init_logging(&config::log_file_path(), &config.log_level)
        .context("Failed to initialise logging")?;

    for problem in &problems {
        tracing::warn!(error = %problem, "invalid configuration value replaced by default");
    }

    let mut app = App::new(config, Catalogue::builtin()).context("Failed to initalise application")?;

    if let Some(problem) = problems.first() {
        app.event_tx.send(AppEvent::Error(format!("Config: {}", problem))).ok();
    }

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    app.shutdown();
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so pointer movement is reported.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is "best-effort"
/// and does not return a result, as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input thread and the tickers, then enters the main event loop.
///
/// # Errors
///
/// Returns an error if a ticker cannot be attached or if the event processing
/// loop encounters an unrecoverable application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    app.viewport = crossterm::terminal::size().context("Failed to read terminal size")?;

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) => continue,
                Err(e) => AppEvent::FatalError(format!("Failed to read terminal input: {}", e)),
            };
            let fatal = matches!(app_event, AppEvent::FatalError(_));
            if tx_input.send(app_event).is_err() || fatal {
                break;
            }
        }
    });

    app.start_tickers()?;

    // The render ticker is effectively the minimum "frame rate" for the TUI,
    // so the parallax and status line stay fresh between engine ticks.
    let tx_render = app.event_tx.clone();
    let _render_ticker = Ticker::spawn("render", RENDER_INTERVAL, move || {
        tx_render.send(AppEvent::Tick).is_ok()
    })
    .context("Failed to spawn render ticker")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_every_engine_in_its_initial_state() {
        let app = App::new(AppConfig::default(), Catalogue::builtin()).unwrap();

        assert!(app.countdown.is_active());
        let years = app.countdown.current_state().years;
        assert!(years == 4 || years == 5);
        assert_eq!(app.rotation.current_index(), 0);
        assert!(!app.playback.is_playing());
        assert_eq!(app.parallax.current_offset().x, 0.0);
    }

    #[test]
    fn shutdown_stops_every_engine_and_late_ticks_are_ignored() {
        let mut app = App::new(AppConfig::default(), Catalogue::builtin()).unwrap();
        app.start_tickers().unwrap();

        app.shutdown();
        app.shutdown();

        assert!(!app.countdown.is_active());
        assert!(!app.rotation.is_active());
        assert!(!app.playback.is_active());
        assert!(!app.parallax.is_active());

        let index = app.rotation.current_index();
        assert!(app.rotation.tick().is_err());
        assert_eq!(app.rotation.current_index(), index);
    }
}
