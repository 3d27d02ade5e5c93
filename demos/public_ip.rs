//! Looks up the public IP address of this machine.
//!
//! Run with `RUST_LOG=debug` to see which endpoints were tried.

use noaa_sun::display::PLACEHOLDER;
use noaa_sun::net::{ip_details_url, LookupConfig, PublicIpLookup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let lookup = PublicIpLookup::new(LookupConfig::default())?;
    println!("Querying {} endpoint(s)...", lookup.endpoints().len());

    let ip = match lookup.fetch().await {
        Ok(ip) => ip,
        Err(err) => {
            eprintln!("Lookup failed: {err}");
            PLACEHOLDER.to_owned()
        }
    };

    println!("Public IP: {ip}");
    if let Some(url) = ip_details_url(&ip) {
        println!("Details: {url}");
    }

    Ok(())
}
