//! Circular selector: pointer position -> angle -> nearest labeled marker.
//!
//! Angles are in degrees, with 0 at 12 o'clock growing clockwise in screen
//! coordinates (y down). Every function here is pure; the only state a
//! caller may want to keep between samples lives in [`SnapTracker`].

use crate::{CategoryMarker, Error, Point, Result, SelectorState};
use serde::Serialize;

/// Convert a pointer position into a wheel angle in `[0, 360)`.
///
/// A pointer exactly on the center has no direction and maps to `0.0`.
pub fn position_to_angle(pointer: Point, center: Point) -> f64 {
    let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let mut angle = dy.atan2(dx).to_degrees() + 90.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // -tiny + 360.0 can round up to exactly 360.0
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Place the wheel handle for `angle_degrees` on a ring of `radius` around `center`.
///
/// Inverse of [`position_to_angle`] for any positive radius.
pub fn angle_to_handle_position(angle_degrees: f64, center: Point, radius: f64) -> Point {
    let rad = (angle_degrees - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Shortest distance between two wheel angles, in `[0, 180]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Snap an angle to the closest marker.
///
/// Exact ties go to the marker that appears first in `markers`.
/// Returns `None` only for an empty slice.
pub fn nearest_marker(angle_degrees: f64, markers: &[CategoryMarker]) -> Option<&CategoryMarker> {
    // min_by keeps the first of equal minima
    markers.iter().min_by(|a, b| {
        circular_distance(angle_degrees, a.angle_degrees)
            .total_cmp(&circular_distance(angle_degrees, b.angle_degrees))
    })
}

impl SelectorState {
    /// Derive the full selector state from an angle alone.
    pub fn from_angle(angle_degrees: f64, center: Point, radius: f64) -> Self {
        Self {
            current_angle: angle_degrees,
            handle_position: angle_to_handle_position(angle_degrees, center, radius),
        }
    }
}

// ============================================================================
// Marker Wheel
// ============================================================================

/// A validated, ordered, non-empty set of markers with distinct angles
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerWheel {
    markers: Vec<CategoryMarker>,
}

impl MarkerWheel {
    /// Build a wheel, rejecting empty sets, angles outside `[0, 360)` and duplicates.
    pub fn new(markers: Vec<CategoryMarker>) -> Result<Self> {
        validate_markers(&markers)?;
        Ok(Self { markers })
    }

    /// Spread `labels` evenly around the circle, the first one at 12 o'clock.
    pub fn evenly_spaced<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let step = 360.0 / labels.len().max(1) as f64;
        let markers = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| CategoryMarker::new(label, i as f64 * step))
            .collect();
        Self::new(markers)
    }

    /// Only for marker sets that are known-good at compile time.
    pub(crate) fn new_unchecked(markers: Vec<CategoryMarker>) -> Self {
        debug_assert!(validate_markers(&markers).is_ok());
        Self { markers }
    }

    pub fn markers(&self) -> &[CategoryMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Look up a marker by label (case-insensitive)
    pub fn find(&self, label: &str) -> Option<&CategoryMarker> {
        self.markers
            .iter()
            .find(|m| m.label.eq_ignore_ascii_case(label))
    }

    /// Snap `angle_degrees` to the nearest marker; first in order wins ties.
    pub fn nearest(&self, angle_degrees: f64) -> &CategoryMarker {
        let mut best = &self.markers[0];
        let mut best_dist = circular_distance(angle_degrees, best.angle_degrees);

        for marker in &self.markers[1..] {
            let dist = circular_distance(angle_degrees, marker.angle_degrees);
            if dist < best_dist {
                best = marker;
                best_dist = dist;
            }
        }

        best
    }
}

fn validate_markers(markers: &[CategoryMarker]) -> Result<()> {
    if markers.is_empty() {
        return Err(Error::InvalidWheel("at least one marker is required".into()));
    }

    for (i, marker) in markers.iter().enumerate() {
        let angle = marker.angle_degrees;
        if !angle.is_finite() || !(0.0..360.0).contains(&angle) {
            return Err(Error::InvalidWheel(format!(
                "marker '{}' has angle {} outside [0, 360)",
                marker.label, angle
            )));
        }

        if let Some(other) = markers[..i].iter().find(|m| m.angle_degrees == angle) {
            return Err(Error::InvalidWheel(format!(
                "markers '{}' and '{}' share angle {}",
                other.label, marker.label, angle
            )));
        }
    }

    Ok(())
}

// ============================================================================
// Angle Selector
// ============================================================================

/// Result of resolving one pointer sample
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Selection<'a> {
    pub state: SelectorState,
    pub marker: &'a CategoryMarker,
}

impl Selection<'_> {
    pub fn label(&self) -> &str {
        &self.marker.label
    }
}

/// A marker wheel rendered as a ring of `radius` around `center`
#[derive(Clone, Debug)]
pub struct AngleSelector {
    center: Point,
    radius: f64,
    wheel: MarkerWheel,
}

impl AngleSelector {
    pub fn new(center: Point, radius: f64, wheel: MarkerWheel) -> Self {
        Self {
            center,
            radius,
            wheel,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Resolve a pointer sample. Independent of any earlier sample.
    pub fn sample(&self, pointer: Point) -> Selection<'_> {
        self.select_angle(position_to_angle(pointer, self.center))
    }

    /// Resolve a known angle, e.g. to render an initial selection.
    pub fn select_angle(&self, angle_degrees: f64) -> Selection<'_> {
        let state = SelectorState::from_angle(angle_degrees, self.center, self.radius);
        let marker = self.wheel.nearest(state.current_angle);
        tracing::trace!(
            angle = state.current_angle,
            marker = %marker.label,
            "resolved wheel sample"
        );
        Selection { state, marker }
    }

    /// Feed a gesture's pointer samples through the selector in order.
    ///
    /// `on_sample` fires once per sample, whether or not the marker changed.
    pub fn drag<I, F>(&self, samples: I, mut on_sample: F)
    where
        I: IntoIterator<Item = Point>,
        F: FnMut(&Selection<'_>),
    {
        for pointer in samples {
            let selection = self.sample(pointer);
            on_sample(&selection);
        }
    }
}

/// Caller-side filter that reports only when the snapped label changes
#[derive(Clone, Debug, Default)]
pub struct SnapTracker {
    last: Option<String>,
}

impl SnapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `marker`; returns true if it differs from the previous one.
    pub fn observe(&mut self, marker: &CategoryMarker) -> bool {
        if self.last.as_deref() == Some(marker.label.as_str()) {
            return false;
        }
        self.last = Some(marker.label.clone());
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
