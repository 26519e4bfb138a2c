//! Built-in mood wheel and the in-memory mood check-in log.

use crate::wheel::MarkerWheel;
use crate::{CategoryMarker, Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Number of check-ins kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Moods on the check-in wheel, in wheel order
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Calm,
    Peaceful,
    Happy,
    #[default]
    Content,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Calm,
        Mood::Peaceful,
        Mood::Happy,
        Mood::Content,
        Mood::Energetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Peaceful => "Peaceful",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Energetic => "Energetic",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Calm => "😌",
            Mood::Peaceful => "😇",
            Mood::Happy => "😊",
            Mood::Content => "😄",
            Mood::Energetic => "🤩",
        }
    }

    /// Accent colour as a hex string
    pub fn color(self) -> &'static str {
        match self {
            Mood::Calm => "#A1C4FD",
            Mood::Peaceful => "#C2E9FB",
            Mood::Happy => "#FFD180",
            Mood::Content => "#FAD0C4",
            Mood::Energetic => "#FF9A9E",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Mood::Calm => {
                "Great state for focused work and mindful activity. Try a light stretch or meditation."
            }
            Mood::Peaceful => {
                "Perfect mindset for recovery. A walk outside or journaling can deepen this feeling."
            }
            Mood::Happy => {
                "Excellent energy! Channel it into a workout or connect with someone you care about."
            }
            Mood::Content => "A balanced mood, ideal for steady, consistent effort today.",
            Mood::Energetic => {
                "You're fired up! Hit the gym or tackle your hardest task right now."
            }
        }
    }

    /// Position on the wheel, clockwise from 12 o'clock
    pub fn angle(self) -> f64 {
        match self {
            Mood::Calm => 0.0,
            Mood::Peaceful => 72.0,
            Mood::Happy => 144.0,
            Mood::Content => 216.0,
            Mood::Energetic => 288.0,
        }
    }

    pub fn marker(self) -> CategoryMarker {
        CategoryMarker::new(self.label(), self.angle())
    }

    /// Parse a label, ignoring case
    pub fn from_label(label: &str) -> Result<Mood> {
        Mood::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| Error::UnknownMood(label.to_string()))
    }

    pub fn from_marker(marker: &CategoryMarker) -> Result<Mood> {
        Self::from_label(&marker.label)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cached mood wheel - built once and reused for every pointer sample
static MOOD_WHEEL: Lazy<MarkerWheel> =
    Lazy::new(|| MarkerWheel::new_unchecked(Mood::ALL.iter().map(|m| m.marker()).collect()));

/// Get a reference to the cached mood wheel
pub fn mood_wheel() -> &'static MarkerWheel {
    &MOOD_WHEEL
}

// ============================================================================
// Mood Log
// ============================================================================

/// One mood check-in, stamped with local wall-clock time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub mood: Mood,
    pub recorded_at: NaiveDateTime,
}

impl MoodEntry {
    /// e.g. "09:15 AM"
    pub fn time_label(&self) -> String {
        self.recorded_at.format("%I:%M %p").to_string()
    }

    /// e.g. "Dec 21"
    pub fn date_label(&self) -> String {
        self.recorded_at.format("%b %-d").to_string()
    }
}

/// Newest-first check-in history with a fixed capacity
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoodLog {
    limit: usize,
    entries: VecDeque<MoodEntry>,
}

impl Default for MoodLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl MoodLog {
    /// The demo history: three check-ins from 19-21 December 2024.
    pub fn seeded(limit: usize) -> Self {
        let mut log = Self::with_limit(limit);
        for (mood, day, hour, minute) in [
            (Mood::Energetic, 19, 7, 45),
            (Mood::Calm, 20, 8, 0),
            (Mood::Happy, 21, 9, 15),
        ] {
            let at = NaiveDate::from_ymd_opt(2024, 12, day)
                .and_then(|d| d.and_hms_opt(hour, minute, 0));
            if let Some(at) = at {
                log.record(mood, at);
            }
        }
        log
    }

    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            entries: VecDeque::with_capacity(limit),
        }
    }

    /// Record a check-in, dropping the oldest entry once the log is full.
    pub fn record(&mut self, mood: Mood, at: NaiveDateTime) -> &MoodEntry {
        self.entries.push_front(MoodEntry {
            mood,
            recorded_at: at,
        });
        self.entries.truncate(self.limit);
        tracing::info!(%mood, entries = self.entries.len(), "recorded mood check-in");
        &self.entries[0]
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.front()
    }

    pub fn entries(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
