//! Geocode a location from the command line and focus a surface on it.
//!
//! Run with: cargo run --example search -- "Cologne, Germany"

use mapdraw::{Geocoder, MemorySurface, focus_result};

fn main() {
    env_logger::init();

    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let results = Geocoder::new().search(&query);
    if results.is_empty() {
        println!("no results for {query:?}");
        return;
    }

    for result in &results {
        match result.bounding_box {
            Some(bounds) => println!(
                "{} [{}] at ({:.4}, {:.4}), box N {:.4} S {:.4} E {:.4} W {:.4}",
                result.name,
                result.kind,
                result.coordinates.lat,
                result.coordinates.lng,
                bounds.north,
                bounds.south,
                bounds.east,
                bounds.west,
            ),
            None => println!(
                "{} [{}] at ({:.4}, {:.4})",
                result.name, result.kind, result.coordinates.lat, result.coordinates.lng,
            ),
        }
    }

    let mut surface = MemorySurface::new();
    focus_result(&mut surface, &results[0]);
    if let Some((center, zoom)) = surface.view() {
        println!(
            "focused view on ({:.4}, {:.4}) at zoom {zoom}",
            center.lat, center.lng
        );
    }
}
