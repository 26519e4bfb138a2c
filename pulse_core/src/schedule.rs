//! Workout schedule keyed by `YYYY-MM-DD` date keys.
//!
//! The schedule is owned by the caller; the calendar only reads it through
//! [`Schedule::get`]. A day without an entry is a rest day.

use crate::calendar::{date_key, days_in_month, DAY_SHORT};
use crate::{Error, Result, WorkoutEntry};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A built-in workout that can be dropped onto any day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub title: &'static str,
    pub time: &'static str,
}

impl WorkoutTemplate {
    pub fn to_entry(&self) -> WorkoutEntry {
        WorkoutEntry::new(self.title, self.time)
    }
}

pub const WORKOUT_TEMPLATES: [WorkoutTemplate; 9] = [
    WorkoutTemplate {
        title: "Upper Body",
        time: "25m - 30m",
    },
    WorkoutTemplate {
        title: "Lower Body",
        time: "30m - 40m",
    },
    WorkoutTemplate {
        title: "Push Day",
        time: "35m - 45m",
    },
    WorkoutTemplate {
        title: "Pull Day",
        time: "30m - 40m",
    },
    WorkoutTemplate {
        title: "Leg Day Blitz",
        time: "40m - 45m",
    },
    WorkoutTemplate {
        title: "HIIT Cardio",
        time: "20m - 25m",
    },
    WorkoutTemplate {
        title: "Arm Blaster",
        time: "25m - 30m",
    },
    WorkoutTemplate {
        title: "Full Body Yoga",
        time: "20m",
    },
    WorkoutTemplate {
        title: "Core & Abs",
        time: "15m - 20m",
    },
];

/// Look up a template by its 1-based number or its title (case-insensitive)
pub fn find_template(query: &str) -> Option<&'static WorkoutTemplate> {
    let query = query.trim();
    if let Ok(n) = query.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| WORKOUT_TEMPLATES.get(i));
    }
    WORKOUT_TEMPLATES
        .iter()
        .find(|t| t.title.eq_ignore_ascii_case(query))
}

/// One day of a month with its optional workout
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ScheduleRow<'a> {
    pub day: u32,
    pub day_name: &'static str,
    pub key: String,
    pub workout: Option<&'a WorkoutEntry>,
}

/// Date-key -> workout map
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<String, WorkoutEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The December 2024 demo plan
    pub fn seeded() -> Self {
        let mut schedule = Self::new();
        for (day, title, time) in [
            (8, "Arm Blaster", "25m - 30m"),
            (11, "Leg Day Blitz", "25m - 30m"),
            (13, "Full Body Yoga", "20m"),
            (15, "Push Day", "35m - 45m"),
            (17, "Pull Day", "30m - 40m"),
            (19, "HIIT Cardio", "20m - 25m"),
            (22, "Upper Body", "25m - 30m"),
        ] {
            schedule.assign(date_key(2024, 11, day), WorkoutEntry::new(title, time));
        }
        schedule
    }

    pub fn get(&self, key: &str) -> Option<&WorkoutEntry> {
        self.entries.get(key)
    }

    /// Put `entry` on the day at `key`, returning whatever it replaced.
    pub fn assign(&mut self, key: impl Into<String>, entry: WorkoutEntry) -> Option<WorkoutEntry> {
        let key = key.into();
        tracing::debug!(%key, title = %entry.title, "assigning workout");
        self.entries.insert(key, entry)
    }

    pub fn remove(&mut self, key: &str) -> Option<WorkoutEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            tracing::debug!(%key, "removed workout");
        }
        removed
    }

    pub fn total_workouts(&self) -> usize {
        self.entries.len()
    }

    /// Days of the month that have a workout, ascending
    pub fn workout_days(&self, year: i32, month0: u32) -> Result<Vec<u32>> {
        let days = days_in_month(year, month0)?;
        Ok((1..=days)
            .filter(|&day| self.get(&date_key(year, month0, day)).is_some())
            .collect())
    }

    /// One row per day of the month, rest days included
    pub fn month_rows(&self, year: i32, month0: u32) -> Result<Vec<ScheduleRow<'_>>> {
        let days = days_in_month(year, month0)?;

        (1..=days)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or_else(|| {
                    Error::InvalidDate(date_key(year, month0, day))
                })?;
                let key = date_key(year, month0, day);
                Ok(ScheduleRow {
                    day,
                    day_name: DAY_SHORT[date.weekday().num_days_from_sunday() as usize],
                    workout: self.entries.get(&key),
                    key,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_schedule() {
        let schedule = Schedule::seeded();
        assert_eq!(schedule.total_workouts(), 7);
        assert_eq!(schedule.get("2024-12-08").unwrap().title, "Arm Blaster");
        assert!(schedule.get("2024-12-09").is_none());
    }

    #[test]
    fn test_assign_and_remove() {
        let mut schedule = Schedule::new();
        let key = date_key(2025, 0, 3);

        assert!(schedule
            .assign(key.clone(), WORKOUT_TEMPLATES[5].to_entry())
            .is_none());
        let replaced = schedule.assign(key.clone(), WORKOUT_TEMPLATES[0].to_entry());
        assert_eq!(replaced.unwrap().title, "HIIT Cardio");
        assert_eq!(schedule.get(&key).unwrap().title, "Upper Body");
        assert_eq!(schedule.total_workouts(), 1);

        assert!(schedule.remove(&key).is_some());
        assert!(schedule.remove(&key).is_none());
        assert_eq!(schedule.total_workouts(), 0);
    }

    #[test]
    fn test_workout_days() {
        let schedule = Schedule::seeded();
        assert_eq!(
            schedule.workout_days(2024, 11).unwrap(),
            vec![8, 11, 13, 15, 17, 19, 22]
        );
        assert!(schedule.workout_days(2024, 10).unwrap().is_empty());
        assert!(schedule.workout_days(2024, 12).is_err());
    }

    #[test]
    fn test_month_rows() {
        let schedule = Schedule::seeded();
        let rows = schedule.month_rows(2024, 11).unwrap();

        assert_eq!(rows.len(), 31);
        assert_eq!(rows[0].day_name, "Sun");
        assert_eq!(rows[7].key, "2024-12-08");
        assert_eq!(rows[7].workout.unwrap().title, "Arm Blaster");
        assert!(rows[8].workout.is_none());
        assert_eq!(rows.iter().filter(|r| r.workout.is_some()).count(), 7);
    }

    #[test]
    fn test_find_template() {
        assert_eq!(find_template("6").unwrap().title, "HIIT Cardio");
        assert_eq!(find_template("core & abs").unwrap().title, "Core & Abs");
        assert!(find_template("0").is_none());
        assert!(find_template("10").is_none());
        assert!(find_template("Zumba").is_none());
    }

    #[test]
    fn test_templates_are_distinct() {
        let titles: std::collections::HashSet<_> =
            WORKOUT_TEMPLATES.iter().map(|t| t.title).collect();
        assert_eq!(titles.len(), WORKOUT_TEMPLATES.len());
    }

    #[test]
    fn test_schedule_serializes_by_key() {
        let json = serde_json::to_string(&Schedule::seeded()).unwrap();
        assert!(json.contains("\"2024-12-22\""));
        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Schedule::seeded());
    }
}
