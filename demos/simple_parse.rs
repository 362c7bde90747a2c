//! Simple example of extracting the track points of a GPX file.

use gpx_parser::GpxReader;

fn main() -> Result<(), gpx_parser::Error> {
    // Fast path, skipping malformed track points
    let gpx = GpxReader::open("ride.gpx", false, true)?;

    println!(
        "Read {} track points ({} skipped)",
        gpx.trackpoint_count(),
        gpx.error_count()
    );

    if let Some(first) = gpx.trackpoints().first() {
        println!("Start: {} {} at {} m", first.lat, first.lon, first.ele);
    }

    Ok(())
}
