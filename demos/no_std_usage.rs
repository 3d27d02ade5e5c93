//! Example demonstrating usage without std/chrono dependencies.
//!
//! Only `core` types are used on the calculation path: validated inputs go in, plain hours
//! after midnight UTC come out.

use noaa_sun::noaa::{event_hours, solar_events};
use noaa_sun::time::CalendarDay;
use noaa_sun::{EventKind, EventOutcome, GeoCoordinate, Zenith};

fn main() {
    println!("Sunrise estimation without std/chrono dependencies\n");

    let day = CalendarDay::new(2024, 12, 21).expect("valid date");
    println!("Day of year: {}\n", day.day_of_year());

    let locations = [
        ("Vienna", 48.21, 16.37),
        ("San Francisco", 37.7749, -122.4194),
        ("Sydney", -33.8688, 151.2093),
        ("Tromsø", 69.6492, 18.9553),
    ];

    for (name, lat, lon) in &locations {
        let coordinate = GeoCoordinate::new(*lat, *lon).expect("valid coordinates");

        let events = solar_events(day, coordinate, Zenith::Official);
        match (events.sunrise(), events.sunset()) {
            (Some(sunrise), Some(sunset)) => {
                println!("  {name} - Sunrise: {sunrise} UTC, Sunset: {sunset} UTC");
            }
            _ => println!("  {name} - {:?}", events.polar_condition()),
        }
    }

    // A single event, with the reason when it does not happen
    let tromso = GeoCoordinate::new(69.6492, 18.9553).expect("valid coordinates");
    match event_hours(day, tromso, EventKind::Sunrise, Zenith::Civil) {
        EventOutcome::Occurs(hours) => println!("\nTromsø civil dawn: {hours} UTC"),
        EventOutcome::Absent(condition) => println!("\nTromsø civil dawn: none ({condition:?})"),
    }
}
