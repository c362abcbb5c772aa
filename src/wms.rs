//! WMS tile-layer configuration and mount lifecycle.
//!
//! The tile layer is an external collaborator: it is mounted and unmounted
//! as a unit and holds no drawing logic. Clearing drawn areas never touches
//! a mounted layer.

use serde::{Deserialize, Serialize};

use crate::surface::{MapSurface, PrimitiveHandle};

/// Declarative configuration for a WMS tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WmsLayerConfig {
    /// WMS service endpoint
    pub url: String,
    /// Comma-separated layer names to request
    pub layers: String,
    /// Tile image format
    #[serde(default = "default_format")]
    pub format: String,
    /// Whether tiles are requested with transparency
    #[serde(default = "default_transparent")]
    pub transparent: bool,
    /// WMS protocol version
    #[serde(default = "default_version")]
    pub version: String,
    /// Attribution markup shown by the surface
    #[serde(default)]
    pub attribution: String,
}

fn default_format() -> String {
    "image/png".to_string()
}

fn default_transparent() -> bool {
    true
}

fn default_version() -> String {
    "1.1.1".to_string()
}

impl WmsLayerConfig {
    /// OpenStreetMap rendering served by terrestris.
    pub fn openstreetmap() -> Self {
        Self {
            url: "https://ows.terrestris.de/osm/service".to_string(),
            layers: "OSM-WMS".to_string(),
            format: default_format(),
            transparent: true,
            version: "1.1.1".to_string(),
            attribution:
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>"
                    .to_string(),
        }
    }

    /// Sentinel Hub true-color imagery.
    pub fn sentinel() -> Self {
        Self {
            url: "https://services.sentinel-hub.com/ogc/wms".to_string(),
            layers: "TRUE_COLOR".to_string(),
            format: default_format(),
            transparent: false,
            version: "1.3.0".to_string(),
            attribution: "&copy; <a href=\"https://sentinel-hub.com/\">Sentinel Hub</a>"
                .to_string(),
        }
    }
}

/// A WMS layer mounted on a map surface.
///
/// Replacing the configuration remounts the layer as a unit; dropping the
/// struct does not unmount (the surface is not owned), use
/// [`WmsLayer::unmount`] on teardown.
#[derive(Debug)]
pub struct WmsLayer {
    config: WmsLayerConfig,
    handle: Option<PrimitiveHandle>,
}

impl WmsLayer {
    /// Mount a layer with the given configuration.
    pub fn mount(surface: &mut impl MapSurface, config: WmsLayerConfig) -> Self {
        let handle = surface.add_tile_layer(&config);
        log::info!("mounted WMS layer '{}' from {}", config.layers, config.url);
        Self {
            config,
            handle: Some(handle),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &WmsLayerConfig {
        &self.config
    }

    /// Handle of the mounted tile layer, if currently mounted.
    pub fn handle(&self) -> Option<PrimitiveHandle> {
        self.handle
    }

    /// Replace the configuration, remounting only when it actually changed.
    pub fn set_config(&mut self, surface: &mut impl MapSurface, config: WmsLayerConfig) {
        if self.config == config && self.handle.is_some() {
            return;
        }
        if let Some(handle) = self.handle.take() {
            surface.remove(handle);
        }
        let handle = surface.add_tile_layer(&config);
        log::info!("remounted WMS layer '{}' from {}", config.layers, config.url);
        self.config = config;
        self.handle = Some(handle);
    }

    /// Unmount the layer. Safe to call repeatedly.
    pub fn unmount(&mut self, surface: &mut impl MapSurface) {
        if let Some(handle) = self.handle.take() {
            surface.remove(handle);
            log::info!("unmounted WMS layer '{}'", self.config.layers);
        }
    }
}
