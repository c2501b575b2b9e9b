use std::fs;
use std::io::Cursor;

use chrono::NaiveDate;

use prayer_times::error::PrayerError;
use prayer_times::query::{parse_date, LocationQuery};
use prayer_times::zcta::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const SAMPLE: &str = "\
[00601]
\tcentroid = (0.3185820, -1.1622375)
\tdescription = Adjuntas, PR

[15213]
\tcentroid = (0.7037168, -1.3963716)

[99999]
\tdescription = no centroid here

[10001] (0.7113050, -1.2913420)

[02139]
\tdescription = Cambridge (Middlesex County), MA
\tcentroid = (0.7427520, -1.2430720)
";

fn write_sample() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zctas");
    fs::write(&path, SAMPLE).unwrap();
    (dir, path)
}

// ── ZCTA parsing ──

#[test]
fn test_is_valid_zip() {
    assert!(is_valid_zip("15213"));
    assert!(is_valid_zip("00601"));
    assert!(!is_valid_zip("1521"));
    assert!(!is_valid_zip("152130"));
    assert!(!is_valid_zip("15a13"));
    assert!(!is_valid_zip("-1"));
}

#[test]
fn test_parse_centroid_converts_radians() {
    let (lat, long) = parse_centroid("\tcentroid = (0.7037168, -1.3963716)").unwrap();
    assert_approx!(lat, 40.32, 0.01);
    assert_approx!(long, -80.01, 0.01);
}

#[test]
fn test_parse_centroid_malformed() {
    assert!(matches!(parse_centroid("centroid = 0.7, -1.3"), Err(PrayerError::ZctaParse(_))));
    assert!(matches!(parse_centroid("(0.7 -1.3)"), Err(PrayerError::ZctaParse(_))));
    assert!(matches!(parse_centroid("(north, west)"), Err(PrayerError::ZctaParse(_))));
}

#[test]
fn test_find_centroid_on_following_line() {
    let (lat, long) = find_centroid(Cursor::new(SAMPLE), "00601").unwrap();
    assert_approx!(lat, 18.25, 0.01);
    assert_approx!(long, -66.59, 0.01);
}

#[test]
fn test_find_centroid_on_header_line() {
    let (lat, long) = find_centroid(Cursor::new(SAMPLE), "10001").unwrap();
    assert_approx!(lat, 40.75, 0.01);
    assert_approx!(long, -73.99, 0.01);
}

#[test]
fn test_find_centroid_errors() {
    assert!(matches!(
        find_centroid(Cursor::new(SAMPLE), "12345"),
        Err(PrayerError::ZipNotFound(ref z)) if z == "12345"
    ));
    assert!(matches!(
        find_centroid(Cursor::new(SAMPLE), "99999"),
        Err(PrayerError::ZctaParse(_))
    ));
}

#[test]
fn test_find_centroid_skips_parenthesized_description() {
    let (lat, long) = find_centroid(Cursor::new(SAMPLE), "02139").unwrap();
    assert_approx!(lat, 42.56, 0.01);
    assert_approx!(long, -71.22, 0.01);
}

#[test]
fn test_coordinates_for_invalid_zip_skips_file() {
    for zip in ["152", "15a13", ""] {
        assert!(
            matches!(coordinates_for_zip("/nonexistent/zctas", zip), Err(PrayerError::InvalidZip(_))),
            "{}",
            zip
        );
    }
}

#[test]
fn test_coordinates_for_zip_from_file() {
    let (_dir, path) = write_sample();
    let (lat, _) = coordinates_for_zip(&path, "15213").unwrap();
    assert_approx!(lat, 40.32, 0.01);
}

#[test]
fn test_coordinates_for_zip_missing_file() {
    let result = coordinates_for_zip("/nonexistent/zctas", "15213");
    assert!(matches!(result, Err(PrayerError::Io(_))));
}

// ── Date parsing ──

#[test]
fn test_parse_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2016, 1, 22).unwrap();
    assert_eq!(parse_date("01/22/2016").unwrap(), expected);
    assert_eq!(parse_date("2016-01-22").unwrap(), expected);
    assert_eq!(parse_date("2016/1/22").unwrap(), expected);
    assert_eq!(parse_date(" 2016-01-22 ").unwrap(), expected);
}

#[test]
fn test_parse_date_rejects_invalid() {
    for s in ["02/30/2016", "2016-13-01", "yesterday", ""] {
        assert!(matches!(parse_date(s), Err(PrayerError::InvalidDate(_))), "{}", s);
    }
}

// ── Location queries ──

#[test]
fn test_query_with_coordinates() {
    let q = LocationQuery {
        latitude: Some(40.0),
        longitude: Some(-80.0),
        zip: None,
        utc_offset_hours: -5,
    };
    let loc = q.resolve("/unused").unwrap();
    assert_eq!((loc.latitude, loc.longitude, loc.utc_offset_hours), (40.0, -80.0, -5));
}

#[test]
fn test_query_with_zip() {
    let (_dir, path) = write_sample();
    let q = LocationQuery {
        zip: Some("15213".to_string()),
        utc_offset_hours: -5,
        ..Default::default()
    };
    let loc = q.resolve(&path).unwrap();
    assert_approx!(loc.latitude, 40.32, 0.01);
    assert_approx!(loc.longitude, -80.01, 0.01);
    assert_eq!(loc.utc_offset_hours, -5);
}

#[test]
fn test_query_errors() {
    let base = LocationQuery::default();
    assert!(matches!(base.resolve("/unused"), Err(PrayerError::MissingLocation)));

    let lat_only = LocationQuery { latitude: Some(40.0), ..Default::default() };
    assert!(matches!(lat_only.resolve("/unused"), Err(PrayerError::MissingLongitude)));

    let long_only = LocationQuery { longitude: Some(-80.0), ..Default::default() };
    assert!(matches!(long_only.resolve("/unused"), Err(PrayerError::MissingLatitude)));

    let both = LocationQuery {
        latitude: Some(40.0),
        longitude: Some(-80.0),
        zip: Some("15213".to_string()),
        utc_offset_hours: 0,
    };
    assert!(matches!(both.resolve("/unused"), Err(PrayerError::ConflictingLocation)));

    let out_of_range = LocationQuery {
        latitude: Some(95.0),
        longitude: Some(-80.0),
        ..Default::default()
    };
    assert!(matches!(out_of_range.resolve("/unused"), Err(PrayerError::InvalidLatitude(_))));

    let bad_tz = LocationQuery {
        latitude: Some(40.0),
        longitude: Some(-80.0),
        zip: None,
        utc_offset_hours: 14,
    };
    assert!(matches!(bad_tz.resolve("/unused"), Err(PrayerError::InvalidUtcOffset(14))));

    let bad_zip = LocationQuery { zip: Some("abc".to_string()), ..Default::default() };
    assert!(matches!(bad_zip.resolve("/unused"), Err(PrayerError::InvalidZip(_))));
}
