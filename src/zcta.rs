//! Zip code centroid lookup over the weather-util `zctas` data file.
//!
//! Each section starts with a `[NNNNN]` header; the centroid follows as a
//! parenthesized `(latitude, longitude)` pair in radians, either on the header
//! line itself or under the `centroid` key later in the same section:
//!
//! ```text
//! [15213]
//! 	centroid = (0.7037, -1.3964)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::angles::rad_to_deg;
use crate::error::PrayerError;

pub const DEFAULT_ZCTA_PATH: &str = "/usr/share/weather-util/zctas";

pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit())
}

/// Extracts the radian pair from a line and converts it to degrees.
pub fn parse_centroid(line: &str) -> Result<(f64, f64), PrayerError> {
    let malformed = || PrayerError::ZctaParse(line.trim().to_string());
    let open = line.find('(').ok_or_else(malformed)?;
    let close = line[open..].find(')').ok_or_else(malformed)? + open;
    let (lat, long) = line[open + 1..close].split_once(',').ok_or_else(malformed)?;
    let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
    let long: f64 = long.trim().parse().map_err(|_| malformed())?;
    Ok((rad_to_deg(lat), rad_to_deg(long)))
}

/// Scans for the `[zip]` section. The zip is not validated here; callers
/// going through `coordinates_for_zip` get `InvalidZip` before any I/O.
pub fn find_centroid<R: BufRead>(reader: R, zip: &str) -> Result<(f64, f64), PrayerError> {
    let header = format!("[{}]", zip);
    let mut in_section = false;

    for line in reader.lines() {
        let line = line?;
        if in_section {
            let trimmed = line.trim_start();
            if trimmed.starts_with('[') {
                break;
            }
            if trimmed.starts_with("centroid") {
                return parse_centroid(trimmed);
            }
        } else if line.contains(&header) {
            if line.contains('(') {
                return parse_centroid(&line);
            }
            in_section = true;
        }
    }

    if in_section {
        return Err(PrayerError::ZctaParse(format!("{} has no centroid", header)));
    }
    Err(PrayerError::ZipNotFound(zip.to_string()))
}

/// Latitude and longitude in degrees for a zip code.
pub fn coordinates_for_zip<P: AsRef<Path>>(path: P, zip: &str) -> Result<(f64, f64), PrayerError> {
    if !is_valid_zip(zip) {
        return Err(PrayerError::InvalidZip(zip.to_string()));
    }
    let path = path.as_ref();
    debug!("looking up zip {} in {}", zip, path.display());
    let file = File::open(path)?;
    find_centroid(BufReader::new(file), zip)
}
