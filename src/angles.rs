use chrono::Datelike;

use crate::types::{Location, SunPosition};

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000_EPOCH: f64 = 2451545.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to exactly `period`
    if r >= period {
        0.0
    } else {
        r
    }
}

pub fn normalize_angle(angle: f64) -> f64 {
    wrap(angle, 360.0)
}

pub fn normalize_hour(hour: f64) -> f64 {
    wrap(hour, 24.0)
}

/// Julian day at 00:00 UT of a Gregorian calendar date.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Julian day of the date's midnight; any time-of-day component is ignored.
pub fn julian_day_of<D: Datelike>(date: &D) -> f64 {
    julian_day(date.year(), date.month(), date.day())
}

/// Shifts the Julian day to local apparent solar time at the location's longitude.
pub fn adjusted_julian_day<D: Datelike>(date: &D, location: &Location) -> f64 {
    julian_day_of(date) - location.longitude / (24.0 * DEGREES_PER_HOUR)
}

pub fn sun_position(julian_day: f64) -> SunPosition {
    let d = julian_day - J2000_EPOCH;
    let mean_anomaly = normalize_angle(357.529 + 0.98560028 * d);
    let mean_longitude = normalize_angle(280.459 + 0.98564736 * d);
    let g = deg_to_rad(mean_anomaly);
    let ecliptic_longitude =
        normalize_angle(mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin());
    let obliquity = deg_to_rad(23.439 - 0.00000036 * d);
    let l = deg_to_rad(ecliptic_longitude);

    let right_ascension =
        normalize_hour(rad_to_deg((obliquity.cos() * l.sin()).atan2(l.cos())) / DEGREES_PER_HOUR);
    let equation_of_time = mean_longitude / DEGREES_PER_HOUR - right_ascension;
    let declination = rad_to_deg((obliquity.sin() * l.sin()).asin());

    SunPosition {
        equation_of_time,
        declination,
    }
}
