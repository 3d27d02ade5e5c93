//! Basic sunrise/sunset estimation example.

use chrono::{DateTime, FixedOffset, NaiveDate};
use noaa_sun::noaa;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: a timestamp with its own offset; only its local calendar date is used
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: the same calendar date without any time zone
    let date = NaiveDate::from_ymd_opt(2023, 6, 21).ok_or("invalid date")?;
    let latitude = 37.7749; // San Francisco
    let longitude = -122.4194;

    let events_fixed = noaa::compute_solar_events(datetime_fixed, latitude, longitude)?;
    let events_naive = noaa::compute_solar_events(date, latitude, longitude)?;

    println!("Sunrise and sunset for San Francisco on June 21, 2023:");
    println!("Using FixedOffset timestamp:");
    print_events(&events_fixed);

    println!("\nUsing NaiveDate (same calendar day):");
    print_events(&events_naive);

    println!(
        "\nBoth calculations produce identical results: {}",
        events_fixed == events_naive
    );

    // Local times, converted back for display
    if let (Some(sunrise), Some(sunset)) = (events_fixed.sunrise(), events_fixed.sunset()) {
        let offset = *datetime_fixed.offset();
        println!(
            "  Local sunrise {}, local sunset {}",
            sunrise.with_timezone(&offset).format("%H:%M"),
            sunset.with_timezone(&offset).format("%H:%M")
        );
    }

    Ok(())
}

fn print_events(events: &noaa_sun::SolarEvents<chrono::DateTime<chrono::Utc>>) {
    match (events.sunrise(), events.sunset()) {
        (Some(sunrise), Some(sunset)) => {
            println!("  Sunrise: {}", sunrise.format("%H:%M:%S UTC"));
            println!("  Sunset:  {}", sunset.format("%H:%M:%S UTC"));
        }
        _ => println!("  Polar condition: {:?}", events.polar_condition()),
    }
}
