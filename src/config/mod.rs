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

//! Application configuration.
//!
//! This module manages the application configuration file. Values that would
//! break an engine (a zero tick interval, a non-positive strength) are
//! replaced by their defaults when the file is loaded.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::rotation::DEFAULT_ROTATION_INTERVAL;

const CONFIG_NAME: &str = "tribute";

const LOG_FILE_NAME: &str = "tribute.log";

const MAX_COUNTDOWN_YEARS: u32 = 1_000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    pub audio_url: String,
    pub countdown_years: u32,
    pub countdown_tick_ms: u64,
    pub rotation_interval_ms: u64,
    pub parallax_strength: f64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            audio_url: "https://example.com/tribute/theme.mp3".to_string(),
            countdown_years: 5,
            countdown_tick_ms: 1_000,
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL.as_millis() as u64,
            parallax_strength: 3.0,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("countdown_years must be at least 1")]
    NoCountdown,

    #[error("countdown_years must be at most 1000, got {0}")]
    CountdownTooLong(u32),

    #[error("parallax_strength must be a positive number, got {0}")]
    InvalidStrength(f64),

    #[error("audio_url must not be empty")]
    MissingAudioUrl,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("countdown_tick_ms"));
        }
        if self.rotation_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("rotation_interval_ms"));
        }
        if self.countdown_years == 0 {
            return Err(ConfigError::NoCountdown);
        }
        if self.countdown_years > MAX_COUNTDOWN_YEARS {
            return Err(ConfigError::CountdownTooLong(self.countdown_years));
        }
        if !self.parallax_strength.is_finite() || self.parallax_strength <= 0.0 {
            return Err(ConfigError::InvalidStrength(self.parallax_strength));
        }
        if self.audio_url.trim().is_empty() {
            return Err(ConfigError::MissingAudioUrl);
        }
        Ok(())
    }

    /// Returns a copy with every invalid field reset to its default, along
    /// with the problems that were found.
    pub fn sanitised(&self) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut cfg = self.clone();
        let mut problems = vec![];

        while let Err(e) = cfg.validate() {
            match e {
                ConfigError::ZeroInterval("countdown_tick_ms") => {
                    cfg.countdown_tick_ms = defaults.countdown_tick_ms
                }
                ConfigError::ZeroInterval(_) => {
                    cfg.rotation_interval_ms = defaults.rotation_interval_ms
                }
                ConfigError::NoCountdown | ConfigError::CountdownTooLong(_) => {
                    cfg.countdown_years = defaults.countdown_years
                }
                ConfigError::InvalidStrength(_) => {
                    cfg.parallax_strength = defaults.parallax_strength
                }
                ConfigError::MissingAudioUrl => cfg.audio_url = defaults.audio_url.clone(),
            }
            problems.push(e);
        }

        (cfg, problems)
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, next to the configuration file when possible.
pub fn log_file_path() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.join(LOG_FILE_NAME)))
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TargetInstant;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.countdown_tick(), Duration::from_secs(1));
        assert_eq!(cfg.rotation_interval(), Duration::from_secs(7));
    }

    #[test]
    fn zero_rotation_interval_is_rejected() {
        let cfg = AppConfig {
            rotation_interval_ms: 0,
            ..Default::default()
        };

        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroInterval("rotation_interval_ms"))
        );
    }

    #[test]
    fn oversized_countdown_is_reset_to_default() {
        let cfg = AppConfig {
            countdown_years: u32::MAX,
            ..Default::default()
        };

        assert_eq!(cfg.validate(), Err(ConfigError::CountdownTooLong(u32::MAX)));

        let (fixed, problems) = cfg.sanitised();

        assert_eq!(problems, vec![ConfigError::CountdownTooLong(u32::MAX)]);
        assert_eq!(fixed.countdown_years, AppConfig::default().countdown_years);

        let now = std::time::SystemTime::now();
        assert!(TargetInstant::years_from(now, MAX_COUNTDOWN_YEARS).is_ok());
    }

    #[test]
    fn sanitising_resets_every_bad_field() {
        let cfg = AppConfig {
            countdown_tick_ms: 0,
            rotation_interval_ms: 0,
            parallax_strength: f64::NAN,
            countdown_years: 0,
            audio_url: "  ".to_string(),
            ..Default::default()
        };

        let (fixed, problems) = cfg.sanitised();

        assert_eq!(fixed, AppConfig::default());
        assert_eq!(problems.len(), 5);
    }

    #[test]
    fn sanitising_keeps_good_values() {
        let cfg = AppConfig {
            rotation_interval_ms: 2_500,
            parallax_strength: 1.5,
            ..Default::default()
        };

        let (fixed, problems) = cfg.sanitised();

        assert!(problems.is_empty());
        assert_eq!(fixed, cfg);
    }
}
