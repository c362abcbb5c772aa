//! mapdraw - interactive area-of-interest drawing for slippy maps
//!
//! An event-driven drawing engine that turns pointer events delivered by a
//! host map surface into finalized, geometrically valid areas. The surface
//! itself is reached through the [`MapSurface`] capability trait, so the
//! engine runs unchanged against any renderer or against the bundled
//! [`MemorySurface`].

mod config;
mod constants;
mod engine;
mod geocode;
mod model;
mod surface;
mod wms;

pub use config::{AppConfig, CONFIG_VERSION, ConfigError, LogLevel, MapConfig};
pub use constants::MIN_POLYGON_VERTICES;
pub use engine::{AreaCallback, AreaStore, DrawingEngine, PointerEvent};
pub use geocode::{DEFAULT_ENDPOINT, Geocoder, SearchResult, focus_result};
pub use model::{AreaId, AreaKind, BoundingBox, Coordinate, DrawMode, DrawnArea};
pub use surface::{MapSurface, MemorySurface, Primitive, PrimitiveHandle};
pub use wms::{WmsLayer, WmsLayerConfig};
