pub mod angles;
pub mod config;
pub mod engine;
pub mod error;
pub mod methods;
pub mod query;
pub mod types;
pub mod zcta;

pub use angles::{
    adjusted_julian_day, deg_to_rad, julian_day, julian_day_of, normalize_angle, normalize_hour,
    rad_to_deg, sun_position, DEGREES_PER_HOUR, J2000_EPOCH,
};

pub use engine::{
    asr_time, compute_prayer_times, dhuhr_time, evaluate_method, finalize, hour_to_clock,
    prayer_times_for, time_angle, Direction, ROUNDING_BIAS_HOURS,
};

pub use error::PrayerError;

pub use methods::{method_by_name, method_names, methods};

pub use query::{parse_date, LocationQuery};

pub use types::{
    CalculationMethod, ClockTime, Location, MethodStep, PrayerEntry, PrayerLabel,
    PrayerSchedule, PrayerTime, StepKind, SunPosition, EVALUATION_ORDER,
};
