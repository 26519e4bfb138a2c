//! Core value types shared by the wheel, calendar and schedule modules.
//!
//! Everything here is plain data: recomputed on every input event and
//! never persisted.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Types
// ============================================================================

/// A position in the wheel's local coordinate space (y grows downwards)
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Selector Types
// ============================================================================

/// One labeled position on the selection wheel
///
/// Angle 0 is 12 o'clock; angles grow clockwise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryMarker {
    pub label: String,
    pub angle_degrees: f64,
}

impl CategoryMarker {
    pub fn new(label: impl Into<String>, angle_degrees: f64) -> Self {
        Self {
            label: label.into(),
            angle_degrees,
        }
    }
}

/// Derived wheel state for a single pointer sample
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SelectorState {
    /// Always in `[0, 360)`
    pub current_angle: f64,
    pub handle_position: Point,
}

// ============================================================================
// Calendar Types
// ============================================================================

/// One cell of a Monday-first month grid
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub day_of_month: u32,
    /// False for leading/trailing days borrowed from adjacent months
    pub belongs_to_displayed_month: bool,
}

impl CalendarCell {
    pub const fn current(day_of_month: u32) -> Self {
        Self {
            day_of_month,
            belongs_to_displayed_month: true,
        }
    }

    pub const fn adjacent(day_of_month: u32) -> Self {
        Self {
            day_of_month,
            belongs_to_displayed_month: false,
        }
    }
}

// ============================================================================
// Schedule Types
// ============================================================================

/// A workout planned for a single day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutEntry {
    pub title: String,
    /// Free-form duration hint, e.g. "25m - 30m"
    pub time: String,
}

impl WorkoutEntry {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
        }
    }
}
