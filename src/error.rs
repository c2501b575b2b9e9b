//! Error types for prayer time calculation and location resolution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrayerError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    #[error("UTC offset {0} is outside [-12, 12]")]
    InvalidUtcOffset(i32),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown calculation method: {0}")]
    UnknownMethod(String),
    /// The sun does not reach the requested altitude on this date (polar day or night).
    #[error("sun never reaches {angle_degrees:.3} degrees at latitude {latitude}")]
    SunNeverReachesAngle { latitude: f64, angle_degrees: f64 },
    #[error("no location given: supply coordinates or a zip code")]
    MissingLocation,
    #[error("latitude is missing")]
    MissingLatitude,
    #[error("longitude is missing")]
    MissingLongitude,
    #[error("conflicting location: both coordinates and zip code given")]
    ConflictingLocation,
    #[error("invalid zip code: {0}")]
    InvalidZip(String),
    #[error("zip code {0} is not available")]
    ZipNotFound(String),
    #[error("malformed ZCTA entry: {0}")]
    ZctaParse(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
