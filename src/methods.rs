//! The fixed registry of calculation methods.
//!
//! Every table follows `EVALUATION_ORDER`: dhuhr, fajr, imsak, sunrise, asr,
//! sunset, maghrib, isha. Conventions differ only in the fajr angle and in how
//! maghrib and isha are derived.

use std::str::FromStr;

use log::warn;

use crate::error::PrayerError;
use crate::types::{CalculationMethod, MethodStep, StepKind};

/// Apparent altitude of the sun's upper limb at rise and set, refraction included.
pub const HORIZON_ANGLE: f64 = 0.833;
pub const IMSAK_OFFSET_MINUTES: f64 = -10.0;
pub const STANDARD_ASR_FACTOR: f64 = 1.0;

const fn table(fajr_angle: f64, maghrib: MethodStep, isha: MethodStep) -> [MethodStep; 8] {
    [
        MethodStep::new(StepKind::FixedDhuhr, 0.0),
        MethodStep::new(StepKind::NegativeAngle, fajr_angle),
        MethodStep::new(StepKind::FajrOffset, IMSAK_OFFSET_MINUTES),
        MethodStep::new(StepKind::NegativeAngle, HORIZON_ANGLE),
        MethodStep::new(StepKind::Asr, STANDARD_ASR_FACTOR),
        MethodStep::new(StepKind::Angle, HORIZON_ANGLE),
        maghrib,
        isha,
    ]
}

const fn angle(deg: f64) -> MethodStep {
    MethodStep::new(StepKind::Angle, deg)
}

const AT_SUNSET: MethodStep = angle(HORIZON_ANGLE);

pub const ISNA: CalculationMethod = CalculationMethod {
    name: "ISNA",
    steps: table(15.0, AT_SUNSET, angle(15.0)),
};

pub const MWL: CalculationMethod = CalculationMethod {
    name: "MWL",
    steps: table(18.0, AT_SUNSET, angle(17.0)),
};

pub const EGAS: CalculationMethod = CalculationMethod {
    name: "EGAS",
    steps: table(19.5, AT_SUNSET, angle(17.5)),
};

/// Isha is a flat 90 minutes after maghrib.
pub const MAKKAH: CalculationMethod = CalculationMethod {
    name: "Makkah",
    steps: table(
        18.5,
        AT_SUNSET,
        MethodStep::new(StepKind::MaghribOffset, 90.0),
    ),
};

pub const KARACHI: CalculationMethod = CalculationMethod {
    name: "Karachi",
    steps: table(18.0, AT_SUNSET, angle(18.0)),
};

pub const TEHRAN: CalculationMethod = CalculationMethod {
    name: "Tehran",
    steps: table(17.7, angle(4.5), angle(14.0)),
};

pub const JAFARI: CalculationMethod = CalculationMethod {
    name: "Jafari",
    steps: table(16.0, angle(4.5), angle(14.0)),
};

static REGISTRY: [CalculationMethod; 7] = [ISNA, MWL, EGAS, MAKKAH, KARACHI, TEHRAN, JAFARI];

pub fn methods() -> &'static [CalculationMethod] {
    &REGISTRY
}

pub fn method_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|m| m.name)
}

/// Looks a method up by its exact registry name.
pub fn method_by_name(name: &str) -> Result<&'static CalculationMethod, PrayerError> {
    REGISTRY
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| {
            warn!("unknown calculation method {:?}", name);
            PrayerError::UnknownMethod(name.to_string())
        })
}

impl FromStr for CalculationMethod {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        method_by_name(s).copied()
    }
}
