use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::angles::{self, DEGREES_PER_HOUR};
use crate::error::PrayerError;
use crate::methods;
use crate::types::{
    CalculationMethod, ClockTime, Location, PrayerEntry, PrayerLabel, PrayerSchedule, PrayerTime,
    StepKind, EVALUATION_ORDER,
};

/// Half a minute, added before truncating to whole minutes.
pub const ROUNDING_BIAS_HOURS: f64 = 0.5 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    BeforeDhuhr,
    AfterDhuhr,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::BeforeDhuhr => -1.0,
            Direction::AfterDhuhr => 1.0,
        }
    }
}

pub fn dhuhr_time(location: &Location, julian_day: f64) -> f64 {
    let eot = angles::sun_position(julian_day).equation_of_time;
    12.0 + location.utc_offset_hours as f64 - location.longitude / DEGREES_PER_HOUR - eot
}

/// Hour of day at which the sun sits `angle` radians below the horizon, on the
/// `direction` side of `dhuhr`.
pub fn time_angle(
    latitude: f64,
    julian_day: f64,
    dhuhr: f64,
    angle: f64,
    direction: Direction,
) -> Result<f64, PrayerError> {
    let decl = angles::deg_to_rad(angles::sun_position(julian_day).declination);
    let lat = angles::deg_to_rad(latitude);
    let cos_h = (-angle.sin() - lat.sin() * decl.sin()) / (lat.cos() * decl.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return Err(PrayerError::SunNeverReachesAngle {
            latitude,
            angle_degrees: angles::rad_to_deg(angle),
        });
    }
    let hours = angles::rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR;
    Ok(dhuhr + direction.sign() * hours)
}

pub fn asr_time(
    location: &Location,
    julian_day: f64,
    dhuhr: f64,
    shadow_factor: f64,
) -> Result<f64, PrayerError> {
    let decl = angles::sun_position(julian_day).declination;
    let zenith_at_noon = angles::deg_to_rad((location.latitude - decl).abs());
    let angle = -(1.0 / (shadow_factor + zenith_at_noon.tan())).atan();
    time_angle(location.latitude, julian_day, dhuhr, angle, Direction::AfterDhuhr)
}

/// Resolved raw hours of one computation, keyed by label.
#[derive(Debug, Default)]
struct Resolved([Option<f64>; 8]);

impl Resolved {
    fn get(&self, label: PrayerLabel) -> Option<f64> {
        self.0[label.index()]
    }

    fn set(&mut self, label: PrayerLabel, value: Option<f64>) {
        self.0[label.index()] = value;
    }
}

fn or_undefined(label: PrayerLabel, result: Result<f64, PrayerError>) -> Option<f64> {
    match result {
        Ok(t) => Some(t),
        Err(e) => {
            debug!("{} undefined: {}", label, e);
            None
        }
    }
}

/// Runs the method table in evaluation order and returns the raw,
/// unnormalized slots.
pub fn evaluate_method(
    method: &CalculationMethod,
    location: &Location,
    julian_day: f64,
) -> [PrayerTime; 8] {
    let mut resolved = Resolved::default();
    let mut slots = EVALUATION_ORDER.map(|label| PrayerTime {
        label,
        hour_of_day: None,
        step: method.step_for(label),
    });

    for slot in slots.iter_mut() {
        let label = slot.label;
        let jd = julian_day + label.nominal_hour() / 24.0;
        let dhuhr = resolved.get(PrayerLabel::Dhuhr);
        let param = slot.step.parameter;

        let value = match slot.step.kind {
            StepKind::FixedDhuhr => Some(dhuhr_time(location, jd)),
            StepKind::Angle | StepKind::NegativeAngle => {
                let direction = if slot.step.kind == StepKind::Angle {
                    Direction::AfterDhuhr
                } else {
                    Direction::BeforeDhuhr
                };
                dhuhr.and_then(|d| {
                    let angle = angles::deg_to_rad(param);
                    or_undefined(label, time_angle(location.latitude, jd, d, angle, direction))
                })
            }
            StepKind::Asr => {
                dhuhr.and_then(|d| or_undefined(label, asr_time(location, jd, d, param)))
            }
            StepKind::FajrOffset => resolved.get(PrayerLabel::Fajr).map(|t| t + param / 60.0),
            StepKind::MaghribOffset => {
                resolved.get(PrayerLabel::Maghrib).map(|t| t + param / 60.0)
            }
        };

        debug!("{} ({:?} {}): {:?}", label, slot.step.kind, param, value);
        resolved.set(label, value);
        slot.hour_of_day = value;
    }

    slots
}

pub fn hour_to_clock(hour_of_day: f64) -> ClockTime {
    let hour = hour_of_day.floor();
    let minute = ((hour_of_day - hour) * 60.0).floor();
    ClockTime {
        hour: hour as u32,
        minute: (minute as u32).min(59),
    }
}

/// Applies the rounding bias, normalizes into `[0, 24)`, splits into clock
/// time and sorts by time of day. Undefined entries go last, in slot order.
pub fn finalize(slots: &[PrayerTime]) -> Vec<PrayerEntry> {
    let mut entries: Vec<PrayerEntry> = slots
        .iter()
        .map(|slot| {
            let hour_of_day = slot
                .hour_of_day
                .map(|t| angles::normalize_hour(t + ROUNDING_BIAS_HOURS));
            PrayerEntry {
                label: slot.label,
                hour_of_day,
                clock: hour_of_day.map(hour_to_clock),
            }
        })
        .collect();

    entries.sort_by(|a, b| match (a.hour_of_day, b.hour_of_day) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    entries
}

/// Full day's schedule. Only the calendar date of `date` is used.
pub fn compute_prayer_times<D: Datelike>(
    date: &D,
    location: &Location,
    method: &CalculationMethod,
) -> Result<PrayerSchedule, PrayerError> {
    location.validate()?;
    let day = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day()).ok_or_else(|| {
        PrayerError::InvalidDate(format!("{}-{}-{}", date.year(), date.month(), date.day()))
    })?;

    let jd = angles::adjusted_julian_day(&day, location);
    debug!(
        "{} at ({}, {}) UTC{:+}, method {}, adjusted JD {}",
        day, location.latitude, location.longitude, location.utc_offset_hours, method.name, jd
    );
    let slots = evaluate_method(method, location, jd);

    Ok(PrayerSchedule {
        date: day,
        location: *location,
        method: method.name,
        entries: finalize(&slots),
    })
}

pub fn prayer_times_for<D: Datelike>(
    date: &D,
    location: &Location,
    method_name: &str,
) -> Result<PrayerSchedule, PrayerError> {
    let method = methods::method_by_name(method_name)?;
    compute_prayer_times(date, location, method)
}
