//! Configuration file support for Pulse.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pulse/config.toml`.

use crate::mood::DEFAULT_HISTORY_LIMIT;
use crate::{Error, Point, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub wheel: WheelConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub mood: MoodConfig,
}

/// Mood wheel geometry, in the wheel's local coordinate units
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WheelConfig {
    /// Side of the square bounding box
    #[serde(default = "default_wheel_size")]
    pub size: f64,

    /// Ring radius the handle travels on
    #[serde(default = "default_wheel_radius")]
    pub radius: f64,

    #[serde(default = "default_handle_radius")]
    pub handle_radius: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: default_wheel_size(),
            radius: default_wheel_radius(),
            handle_radius: default_handle_radius(),
        }
    }
}

impl WheelConfig {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

/// Initial training calendar view
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default = "default_initial_year")]
    pub initial_year: i32,

    /// Zero-based month
    #[serde(default = "default_initial_month")]
    pub initial_month: u32,

    #[serde(default = "default_selected_day")]
    pub selected_day: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_year: default_initial_year(),
            initial_month: default_initial_month(),
            selected_day: default_selected_day(),
        }
    }
}

/// Mood check-in configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

// Default value functions
fn default_wheel_size() -> f64 {
    280.0
}

fn default_wheel_radius() -> f64 {
    110.0
}

fn default_handle_radius() -> f64 {
    12.0
}

fn default_initial_year() -> i32 {
    2024
}

fn default_initial_month() -> u32 {
    11
}

fn default_selected_day() -> u32 {
    22
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("pulse").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let wheel = &self.wheel;
        if !(wheel.size.is_finite() && wheel.size > 0.0) {
            return Err(Error::Config(format!(
                "wheel.size must be positive, got {}",
                wheel.size
            )));
        }
        if !(wheel.radius.is_finite() && wheel.radius > 0.0) || wheel.radius > wheel.size / 2.0 {
            return Err(Error::Config(format!(
                "wheel.radius must be in (0, {}], got {}",
                wheel.size / 2.0,
                wheel.radius
            )));
        }
        if !(wheel.handle_radius.is_finite() && wheel.handle_radius >= 0.0) {
            return Err(Error::Config(format!(
                "wheel.handle_radius must not be negative, got {}",
                wheel.handle_radius
            )));
        }

        if self.calendar.initial_month > 11 {
            return Err(Error::Config(format!(
                "calendar.initial_month must be 0-11, got {}",
                self.calendar.initial_month
            )));
        }
        if !(1..=31).contains(&self.calendar.selected_day) {
            return Err(Error::Config(format!(
                "calendar.selected_day must be 1-31, got {}",
                self.calendar.selected_day
            )));
        }

        if self.mood.history_limit == 0 {
            return Err(Error::Config("mood.history_limit must be at least 1".into()));
        }

        Ok(())
    }
}
