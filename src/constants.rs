//! Global constants for the mapdraw engine

use crate::model::Coordinate;

/// Minimum number of vertices required to finalize a polygon
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Default map center (Cologne)
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 50.935,
    lng: 6.96,
};

/// Default initial zoom level
pub const DEFAULT_ZOOM: u8 = 12;

/// Default minimum zoom level
pub const DEFAULT_MIN_ZOOM: u8 = 3;

/// Default maximum zoom level
pub const DEFAULT_MAX_ZOOM: u8 = 18;

/// Zoom level applied when focusing the view on a search result
pub const SEARCH_FOCUS_ZOOM: u8 = 13;

/// Default number of results requested from the geocoding service
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
