//! Temporal context: when a listening session happens.

use crate::error::ContextError;
use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Weekday => "weekday",
            DayKind::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Meteorological season for a calendar month (1-12).
    pub fn from_month(month: u32, hemisphere: Hemisphere) -> Self {
        let northern = match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        };
        match hemisphere {
            Hemisphere::North => northern,
            Hemisphere::South => northern.opposite(),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

/// Start hour of each period of the day.
///
/// Night runs from `night` through midnight until `morning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPeriods {
    #[serde(default = "default_morning")]
    pub morning: u32,
    #[serde(default = "default_afternoon")]
    pub afternoon: u32,
    #[serde(default = "default_evening")]
    pub evening: u32,
    #[serde(default = "default_night")]
    pub night: u32,
}

fn default_morning() -> u32 {
    5
}

fn default_afternoon() -> u32 {
    12
}

fn default_evening() -> u32 {
    17
}

fn default_night() -> u32 {
    21
}

impl Default for DayPeriods {
    fn default() -> Self {
        Self {
            morning: default_morning(),
            afternoon: default_afternoon(),
            evening: default_evening(),
            night: default_night(),
        }
    }
}

impl DayPeriods {
    /// Boundaries must be valid hours and strictly increasing.
    pub fn validate(&self) -> Result<(), ContextError> {
        let bounds = [self.morning, self.afternoon, self.evening, self.night];
        if let Some(hour) = bounds.iter().find(|h| **h > 23) {
            return Err(ContextError::InvalidPeriods(format!(
                "hour {} is out of range 0-23",
                hour
            )));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ContextError::InvalidPeriods(format!(
                "start hours must be strictly increasing (morning={}, afternoon={}, evening={}, night={})",
                self.morning, self.afternoon, self.evening, self.night
            )));
        }
        Ok(())
    }

    pub fn classify(&self, hour: u32) -> TimeOfDay {
        if hour >= self.night || hour < self.morning {
            TimeOfDay::Night
        } else if hour >= self.evening {
            TimeOfDay::Evening
        } else if hour >= self.afternoon {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Morning
        }
    }
}

/// Inputs that shape how a timestamp is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemporalSettings {
    #[serde(default)]
    pub periods: DayPeriods,
    #[serde(default)]
    pub hemisphere: Hemisphere,
}

/// Snapshot of the local time a listening session happens at.
///
/// Every field is derived from the timestamp, so a snapshot can only be built
/// through [`TemporalContext::at`] or [`TemporalContext::now`]. It serializes
/// for output but does not deserialize:
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<music_cli::context::TemporalContext>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalContext {
    timestamp: NaiveDateTime,
    weekday: Weekday,
    time_of_day: TimeOfDay,
    day_kind: DayKind,
    season: Season,
}

impl TemporalContext {
    /// Context for the current local time.
    pub fn now(settings: &TemporalSettings) -> Self {
        Self::at(Local::now().naive_local(), settings)
    }

    /// Context for an explicit local wall-clock time.
    pub fn at(timestamp: NaiveDateTime, settings: &TemporalSettings) -> Self {
        let weekday = timestamp.weekday();
        Self {
            timestamp,
            weekday,
            time_of_day: settings.periods.classify(timestamp.hour()),
            day_kind: DayKind::from_weekday(weekday),
            season: Season::from_month(timestamp.month(), settings.hemisphere),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn day_kind(&self) -> DayKind {
        self.day_kind
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn is_weekend(&self) -> bool {
        self.day_kind == DayKind::Weekend
    }

    /// Human-readable summary, e.g. `Saturday night (weekend, winter)`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} ({}, {})",
            weekday_name(self.weekday),
            self.time_of_day,
            self.day_kind,
            self.season
        )
    }
}

impl fmt::Display for TemporalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a user-supplied timestamp into local wall-clock time.
///
/// RFC 3339 input keeps the wall time of its own offset.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, ContextError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| {
            ContextError::InvalidTimestamp(format!(
                "'{}' (expected RFC 3339 or YYYY-MM-DD HH:MM[:SS])",
                input
            ))
        })
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
