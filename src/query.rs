//! Turns loosely specified caller input into a validated `Location` and date.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::PrayerError;
use crate::types::Location;
use crate::zcta;

const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Accepts `MM/DD/YYYY`, `YYYY-MM-DD` and `YYYY/M/D`.
pub fn parse_date(s: &str) -> Result<NaiveDate, PrayerError> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| PrayerError::InvalidDate(s.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zip: Option<String>,
    pub utc_offset_hours: i32,
}

impl LocationQuery {
    /// Resolves either explicit coordinates or a zip code, never both.
    pub fn resolve<P: AsRef<Path>>(&self, zcta_path: P) -> Result<Location, PrayerError> {
        match (self.latitude, self.longitude, self.zip.as_deref()) {
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => Err(PrayerError::ConflictingLocation),
            (Some(lat), Some(long), None) => Location::new(lat, long, self.utc_offset_hours),
            (Some(_), None, None) => Err(PrayerError::MissingLongitude),
            (None, Some(_), None) => Err(PrayerError::MissingLatitude),
            (None, None, Some(zip)) => {
                let (lat, long) = zcta::coordinates_for_zip(zcta_path, zip)?;
                Location::new(lat, long, self.utc_offset_hours)
            }
            (None, None, None) => Err(PrayerError::MissingLocation),
        }
    }
}
