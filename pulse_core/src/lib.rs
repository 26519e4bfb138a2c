#![forbid(unsafe_code)]

//! Core domain model for the Pulse fitness companion.
//!
//! This crate provides:
//! - Domain types (points, markers, calendar cells, workouts)
//! - Angle selector for the mood wheel
//! - Monday-first month grid builder and date keys
//! - Workout schedule and mood check-in log
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod wheel;
pub mod calendar;
pub mod schedule;
pub mod mood;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use wheel::{
    angle_to_handle_position, nearest_marker, position_to_angle, AngleSelector, MarkerWheel,
    Selection, SnapTracker,
};
pub use calendar::{
    advance_month, build_month_grid, date_key, days_in_month, mark_cells, MarkedCell,
};
pub use schedule::{find_template, Schedule, ScheduleRow, WORKOUT_TEMPLATES};
pub use mood::{mood_wheel, Mood, MoodEntry, MoodLog};
