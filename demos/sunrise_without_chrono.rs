//! Sunrise and sunset without chrono.
//!
//! The numeric API takes date components and returns hours after midnight UTC, so callers can
//! plug in whatever time library they already use.

use noaa_sun::{noaa, HoursUtc, SolarEvents, Zenith};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sunrise/sunset calculation without chrono\n");

    // Vienna on the June solstice
    let events = noaa::sunrise_sunset_utc(2024, 6, 21, 48.21, 16.37)?;
    println!("Vienna, 2024-06-21:");
    print_events(&events);

    // Twilight variants for the same day
    for (name, zenith) in [
        ("Civil", Zenith::Civil),
        ("Nautical", Zenith::Nautical),
        ("Astronomical", Zenith::Astronomical),
    ] {
        let twilight = noaa::sunrise_sunset_utc_for_zenith(2024, 6, 21, 48.21, 16.37, zenith)?;
        println!("\n{name} twilight:");
        print_events(&twilight);
    }

    // Polar day in Svalbard
    let svalbard = noaa::sunrise_sunset_utc(2024, 6, 21, 78.22, 15.65)?;
    println!("\nLongyearbyen, 2024-06-21:");
    print_events(&svalbard);

    Ok(())
}

fn print_events(events: &SolarEvents<HoursUtc>) {
    if let Some(condition) = events.polar_condition() {
        println!("  No sunrise/sunset ({condition:?})");
        return;
    }
    for (label, event) in [("Sunrise", events.sunrise()), ("Sunset", events.sunset())] {
        if let Some(hours) = event {
            let (h, m, s) = hours.hms();
            println!("  {label}: {h:02}:{m:02}:{s:04.1} UTC ({:.4} h)", hours.hours());
        }
    }
}
