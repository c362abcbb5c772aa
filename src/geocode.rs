//! Location search against a Nominatim-style geocoding service.
//!
//! Failures never reach the caller: [`Geocoder::search`] degrades to an
//! empty result list and logs the reason, so the drawing engine and the
//! host UI stay oblivious to transport problems.

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_SEARCH_LIMIT, SEARCH_FOCUS_ZOOM};
use crate::model::{BoundingBox, Coordinate};
use crate::surface::MapSurface;

/// Public Nominatim search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const USER_AGENT: &str = concat!("mapdraw/", env!("CARGO_PKG_VERSION"));

/// A geocoding match, best matches first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Display name of the matched place
    pub name: String,
    /// Center coordinate of the match
    pub coordinates: Coordinate,
    /// Bounding box of the match, when the service provides one
    pub bounding_box: Option<BoundingBox>,
    /// Place type reported by the service (e.g. "city")
    pub kind: String,
}

/// Errors that can occur while querying the geocoding service.
///
/// These never cross the [`Geocoder::search`] boundary; they exist so the
/// fetch path can propagate with `?` before the degrade-and-log step.
#[derive(Debug, Error)]
enum GeocodeError {
    /// Request could not be carried out
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("invalid payload: {0}")]
    Payload(#[from] std::io::Error),
}

/// Client for a Nominatim-style search service.
#[derive(Debug, Clone)]
pub struct Geocoder {
    endpoint: String,
    limit: u32,
}

impl Geocoder {
    /// Client against the public Nominatim endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a custom endpoint (e.g. a self-hosted instance).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Search for a location, best match first.
    ///
    /// An empty or whitespace-only query returns no results without issuing
    /// a network call. Transport and payload failures also return an empty
    /// list, after logging.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        match self.fetch(query) {
            Ok(results) => {
                log::debug!("geocoding '{}' returned {} results", query, results.len());
                results
            }
            Err(e) => {
                log::warn!("geocoding '{query}' failed: {e}");
                Vec::new()
            }
        }
    }

    fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let response = ureq::get(&self.endpoint)
            .query("format", "json")
            .query("q", query)
            .query("limit", &self.limit.to_string())
            .set("User-Agent", USER_AGENT)
            .call();

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(GeocodeError::Status(code)),
            Err(e) => return Err(GeocodeError::Transport(e.to_string())),
        };

        let places: Vec<NominatimPlace> = response.into_json()?;
        Ok(places.iter().filter_map(NominatimPlace::to_result).collect())
    }
}

impl Default for Geocoder {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of a Nominatim JSON response.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
    /// Order on the wire is [south, north, west, east]
    #[serde(default)]
    boundingbox: Option<[String; 4]>,
    #[serde(default, rename = "type")]
    kind: String,
}

impl NominatimPlace {
    /// Convert to a [`SearchResult`], dropping entries with unparseable
    /// coordinates.
    fn to_result(&self) -> Option<SearchResult> {
        let lat = self.lat.parse().ok()?;
        let lng = self.lon.parse().ok()?;
        let bounding_box = self.boundingbox.as_ref().and_then(|b| {
            Some(BoundingBox {
                south: b[0].parse().ok()?,
                north: b[1].parse().ok()?,
                west: b[2].parse().ok()?,
                east: b[3].parse().ok()?,
            })
        });
        Some(SearchResult {
            name: self.display_name.clone(),
            coordinates: Coordinate::new(lat, lng),
            bounding_box,
            kind: self.kind.clone(),
        })
    }
}

/// Recenter the surface on a search result.
///
/// Sets the view to the result's coordinates, then fits the result's
/// bounding box when the service provided one.
pub fn focus_result(surface: &mut impl MapSurface, result: &SearchResult) {
    surface.set_view(result.coordinates, SEARCH_FOCUS_ZOOM);
    if let Some(bounds) = result.bounding_box {
        surface.fit_bounds(bounds);
    }
}
