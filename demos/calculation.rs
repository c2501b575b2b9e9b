use chrono::TimeZone;
use chrono_tz::America::New_York;

use prayer_times::angles::{adjusted_julian_day, sun_position};
use prayer_times::engine::compute_prayer_times;
use prayer_times::methods::{methods, ISNA};
use prayer_times::types::{Location, PrayerLabel};

fn main() {
    let location = Location::new(40.0, -80.0, -5).unwrap();
    let dt = New_York.with_ymd_and_hms(2016, 1, 22, 0, 0, 0).unwrap();

    let jd = adjusted_julian_day(&dt, &location);
    let sun = sun_position(jd + 0.5);

    println!("=== Prayer Time Calculation Example ===");
    println!(
        "Location: {:.1}°N, {:.1}°W (UTC{:+})",
        location.latitude, -location.longitude, location.utc_offset_hours
    );
    println!("Date: {}", dt.date_naive());
    println!();
    println!("--- Sun at local noon ---");
    println!("Adjusted Julian day: {:.4}", jd);
    println!("Declination: {:.2}°", sun.declination);
    println!("Equation of Time: {:.2} hours", sun.equation_of_time);
    println!();

    let schedule = compute_prayer_times(&dt, &location, &ISNA).unwrap();
    println!("--- {} ---", schedule.method);
    for entry in &schedule.entries {
        match entry.clock {
            Some(clock) => println!("{:<8} {}", entry.label, clock),
            None => println!("{:<8} --:--", entry.label),
        }
    }
    println!();

    println!("--- Fajr / Isha by method ---");
    for method in methods() {
        let s = compute_prayer_times(&dt, &location, method).unwrap();
        let show = |label| {
            s.clock(label)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "--:--".to_string())
        };
        println!(
            "{:<8} fajr {}  isha {}",
            method.name,
            show(PrayerLabel::Fajr),
            show(PrayerLabel::Isha)
        );
    }
}
