//! Sunrise/sunset calculation example with different twilight types across diverse global locations.

use chrono::{DateTime, NaiveDate, Utc};
use noaa_sun::display::{format_coordinates, format_event};
use noaa_sun::{noaa, GeoCoordinate, SolarEvents, Zenith};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
        },
    ];

    // Winter solstice shows the most extreme variations
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).ok_or("invalid date")?;

    for city in &cities {
        let coordinate = GeoCoordinate::new(city.latitude, city.longitude)?;
        println!("=== {} ===", city.name);
        println!("Coordinates: {}", format_coordinates(Some(coordinate)));
        println!("Date: December 21, 2023 (Winter Solstice)");
        println!();

        calculate_and_print_times(date, city.latitude, city.longitude)?;
        println!();
    }

    Ok(())
}

fn calculate_and_print_times(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let zeniths = [
        ("Sunrise/Sunset", Zenith::Official),
        ("Civil Twilight", Zenith::Civil),
        ("Nautical Twilight", Zenith::Nautical),
        ("Astronomical Twilight", Zenith::Astronomical),
    ];

    for (name, zenith) in &zeniths {
        let events = noaa::compute_solar_events_for_zenith(date, latitude, longitude, *zenith)?;
        print_events(name, &events);
    }

    Ok(())
}

fn print_events(label: &str, events: &SolarEvents<DateTime<Utc>>) {
    println!("{label}:");
    if events.is_polar_day() {
        println!("  All day above horizon");
    } else if events.is_polar_night() {
        println!("  All night below horizon");
    } else {
        println!("  Begin: {} UTC", format_event(events.sunrise()));
        println!("  End: {} UTC", format_event(events.sunset()));
    }
    println!();
}
