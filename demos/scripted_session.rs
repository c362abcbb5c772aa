//! Scripted drawing session against the in-memory surface.
//!
//! Run with: cargo run --example scripted_session

use mapdraw::{
    AppConfig, Coordinate, DrawMode, DrawingEngine, MapSurface, MemorySurface, PointerEvent,
    WmsLayer,
};

fn main() {
    let config = AppConfig::load_from_default_path().unwrap_or_default();
    env_logger::Builder::from_default_env()
        .filter_level(config.log_level.to_level_filter())
        .init();

    let mut engine = DrawingEngine::new(MemorySurface::new());
    engine.set_area_callback(|area| {
        println!(
            "drawn area {}: {} with {} vertices, bounds N {:.3} S {:.3} E {:.3} W {:.3}",
            area.id,
            area.kind.name(),
            area.coordinates.len(),
            area.bounds.north,
            area.bounds.south,
            area.bounds.east,
            area.bounds.west,
        );
    });

    let mut layer = WmsLayer::mount(engine.surface_mut(), config.wms.clone());
    engine
        .surface_mut()
        .set_view(config.map.center, config.map.zoom);

    // A triangle around the configured center.
    let c = config.map.center;
    engine.set_mode(DrawMode::Polygon);
    engine.handle_event(PointerEvent::Click(c));
    engine.handle_event(PointerEvent::Click(Coordinate::new(c.lat + 0.02, c.lng)));
    engine.handle_event(PointerEvent::Click(Coordinate::new(
        c.lat + 0.02,
        c.lng + 0.03,
    )));
    engine.handle_event(PointerEvent::DoubleClick(Coordinate::new(
        c.lat + 0.02,
        c.lng + 0.03,
    )));

    // A rectangle dragged from the bottom-right corner up.
    engine.set_mode(DrawMode::Rectangle);
    engine.handle_event(PointerEvent::Down(Coordinate::new(
        c.lat - 0.01,
        c.lng + 0.05,
    )));
    engine.handle_event(PointerEvent::Move(Coordinate::new(
        c.lat - 0.04,
        c.lng + 0.01,
    )));
    engine.handle_event(PointerEvent::Up(Coordinate::new(
        c.lat - 0.04,
        c.lng + 0.01,
    )));

    println!("{} areas in the store", engine.area_count());

    engine.clear_areas();
    println!(
        "after clear: {} areas, {} tile layer(s) still mounted",
        engine.area_count(),
        engine.surface().tile_layer_count()
    );

    layer.unmount(engine.surface_mut());
}
