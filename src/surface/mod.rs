//! Map-surface capability interface.
//!
//! The drawing engine talks to whatever renders the map exclusively through
//! the [`MapSurface`] trait, so it carries no compile-time dependency on a
//! concrete rendering stack. [`MemorySurface`] is an in-memory
//! implementation for tests and headless hosts.

mod memory;

pub use memory::{MemorySurface, Primitive};

use crate::model::{BoundingBox, Coordinate};
use crate::wms::WmsLayerConfig;

/// Opaque handle to a primitive created on a map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveHandle(pub(crate) u64);

/// Capability interface offered by a host map surface.
///
/// Every creation method returns a handle the caller is responsible for
/// releasing with [`MapSurface::remove`]. Implementations must treat removal
/// of an unknown or already-removed handle as a no-op, so teardown paths can
/// be repeated safely.
pub trait MapSurface {
    /// Create a point marker at a coordinate.
    fn add_marker(&mut self, at: Coordinate) -> PrimitiveHandle;

    /// Create a line between two points.
    fn add_line(&mut self, from: Coordinate, to: Coordinate) -> PrimitiveHandle;

    /// Create a polygon overlay from an ordered vertex sequence.
    fn add_polygon(&mut self, vertices: &[Coordinate]) -> PrimitiveHandle;

    /// Create a rectangle overlay from bounds.
    fn add_rectangle(&mut self, bounds: BoundingBox) -> PrimitiveHandle;

    /// Mount a WMS tile layer described by a declarative config.
    fn add_tile_layer(&mut self, config: &WmsLayerConfig) -> PrimitiveHandle;

    /// Update the bounds of an existing rectangle overlay.
    fn set_rectangle_bounds(&mut self, handle: PrimitiveHandle, bounds: BoundingBox);

    /// Remove a primitive. Removing an unknown handle is a no-op.
    fn remove(&mut self, handle: PrimitiveHandle);

    /// Query the bounds of an existing overlay, if it has any.
    fn bounds_of(&self, handle: PrimitiveHandle) -> Option<BoundingBox>;

    /// Center the view on a coordinate at a zoom level.
    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Fit the view to the given bounds.
    fn fit_bounds(&mut self, bounds: BoundingBox);
}

impl<S: MapSurface + ?Sized> MapSurface for &mut S {
    fn add_marker(&mut self, at: Coordinate) -> PrimitiveHandle {
        (**self).add_marker(at)
    }

    fn add_line(&mut self, from: Coordinate, to: Coordinate) -> PrimitiveHandle {
        (**self).add_line(from, to)
    }

    fn add_polygon(&mut self, vertices: &[Coordinate]) -> PrimitiveHandle {
        (**self).add_polygon(vertices)
    }

    fn add_rectangle(&mut self, bounds: BoundingBox) -> PrimitiveHandle {
        (**self).add_rectangle(bounds)
    }

    fn add_tile_layer(&mut self, config: &WmsLayerConfig) -> PrimitiveHandle {
        (**self).add_tile_layer(config)
    }

    fn set_rectangle_bounds(&mut self, handle: PrimitiveHandle, bounds: BoundingBox) {
        (**self).set_rectangle_bounds(handle, bounds);
    }

    fn remove(&mut self, handle: PrimitiveHandle) {
        (**self).remove(handle);
    }

    fn bounds_of(&self, handle: PrimitiveHandle) -> Option<BoundingBox> {
        (**self).bounds_of(handle)
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        (**self).set_view(center, zoom);
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        (**self).fit_bounds(bounds);
    }
}
