use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PrayerError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: i32,
}

impl Location {
    /// Builds a location, rejecting coordinates or offsets outside their ranges.
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: i32) -> Result<Self, PrayerError> {
        let loc = Self {
            latitude,
            longitude,
            utc_offset_hours,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), PrayerError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PrayerError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PrayerError::InvalidLongitude(self.longitude));
        }
        if !(-12..=12).contains(&self.utc_offset_hours) {
            return Err(PrayerError::InvalidUtcOffset(self.utc_offset_hours));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerLabel {
    Dhuhr,
    Fajr,
    Imsak,
    Sunrise,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

/// Order in which every method table is evaluated. Dhuhr comes first because
/// all angle-based steps are measured from it.
pub const EVALUATION_ORDER: [PrayerLabel; 8] = [
    PrayerLabel::Dhuhr,
    PrayerLabel::Fajr,
    PrayerLabel::Imsak,
    PrayerLabel::Sunrise,
    PrayerLabel::Asr,
    PrayerLabel::Sunset,
    PrayerLabel::Maghrib,
    PrayerLabel::Isha,
];

impl PrayerLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PrayerLabel::Dhuhr => "dhuhr",
            PrayerLabel::Fajr => "fajr",
            PrayerLabel::Imsak => "imsak",
            PrayerLabel::Sunrise => "sunrise",
            PrayerLabel::Asr => "asr",
            PrayerLabel::Sunset => "sunset",
            PrayerLabel::Maghrib => "maghrib",
            PrayerLabel::Isha => "isha",
        }
    }

    /// Seed hour used only to pick the day fraction at which solar geometry
    /// is sampled for this slot.
    pub fn nominal_hour(self) -> f64 {
        match self {
            PrayerLabel::Dhuhr => 12.0,
            PrayerLabel::Fajr | PrayerLabel::Imsak => 5.0,
            PrayerLabel::Sunrise => 6.0,
            PrayerLabel::Asr => 13.0,
            PrayerLabel::Sunset | PrayerLabel::Maghrib | PrayerLabel::Isha => 18.0,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PrayerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    FixedDhuhr,
    Angle,
    NegativeAngle,
    Asr,
    FajrOffset,
    MaghribOffset,
}

/// One rule of a method table. `parameter` is degrees for the angle kinds,
/// the shadow factor for `Asr` and minutes for the offset kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodStep {
    pub kind: StepKind,
    pub parameter: f64,
}

impl MethodStep {
    pub const fn new(kind: StepKind, parameter: f64) -> Self {
        Self { kind, parameter }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationMethod {
    pub name: &'static str,
    /// `steps[i]` resolves `EVALUATION_ORDER[i]`.
    pub steps: [MethodStep; 8],
}

impl CalculationMethod {
    pub fn step_for(&self, label: PrayerLabel) -> MethodStep {
        self.steps[label.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Hours.
    pub equation_of_time: f64,
    /// Degrees.
    pub declination: f64,
}

/// Working slot of one computation. `hour_of_day` may lie outside `[0, 24)`
/// until finalization and is `None` when the sun never reaches the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTime {
    pub label: PrayerLabel,
    pub hour_of_day: Option<f64>,
    pub step: MethodStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrayerEntry {
    pub label: PrayerLabel,
    /// Normalized to `[0, 24)`, rounding bias included.
    pub hour_of_day: Option<f64>,
    pub clock: Option<ClockTime>,
}

impl PrayerEntry {
    pub fn is_defined(&self) -> bool {
        self.clock.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerSchedule {
    pub date: NaiveDate,
    pub location: Location,
    pub method: &'static str,
    pub entries: Vec<PrayerEntry>,
}

impl PrayerSchedule {
    pub fn get(&self, label: PrayerLabel) -> Option<&PrayerEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn clock(&self, label: PrayerLabel) -> Option<ClockTime> {
        self.get(label).and_then(|e| e.clock)
    }
}
