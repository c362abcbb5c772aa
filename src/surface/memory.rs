//! In-memory map surface for tests and headless hosts.

use std::collections::HashMap;

use crate::model::{BoundingBox, Coordinate};
use crate::wms::WmsLayerConfig;

use super::{MapSurface, PrimitiveHandle};

/// A primitive recorded by [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Point marker
    Marker(Coordinate),
    /// Line between two points
    Line(Coordinate, Coordinate),
    /// Polygon overlay
    Polygon(Vec<Coordinate>),
    /// Rectangle overlay
    Rectangle(BoundingBox),
    /// Mounted WMS tile layer
    TileLayer(WmsLayerConfig),
}

/// Map surface that records every primitive instead of rendering it.
///
/// Handles are never reused, so a removed primitive stays removed even if
/// another one is created afterwards.
#[derive(Debug, Default)]
pub struct MemorySurface {
    next_handle: u64,
    primitives: HashMap<PrimitiveHandle, Primitive>,
    view: Option<(Coordinate, u8)>,
    fitted: Option<BoundingBox>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, primitive: Primitive) -> PrimitiveHandle {
        self.next_handle += 1;
        let handle = PrimitiveHandle(self.next_handle);
        self.primitives.insert(handle, primitive);
        handle
    }

    /// Look up a primitive by handle.
    pub fn get(&self, handle: PrimitiveHandle) -> Option<&Primitive> {
        self.primitives.get(&handle)
    }

    /// Total number of primitives currently on the surface.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check whether the surface is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Count markers currently on the surface.
    pub fn marker_count(&self) -> usize {
        self.count(|p| matches!(p, Primitive::Marker(_)))
    }

    /// Count lines currently on the surface.
    pub fn line_count(&self) -> usize {
        self.count(|p| matches!(p, Primitive::Line(..)))
    }

    /// Count polygon overlays currently on the surface.
    pub fn polygon_count(&self) -> usize {
        self.count(|p| matches!(p, Primitive::Polygon(_)))
    }

    /// Count rectangle overlays currently on the surface.
    pub fn rectangle_count(&self) -> usize {
        self.count(|p| matches!(p, Primitive::Rectangle(_)))
    }

    /// Count mounted tile layers.
    pub fn tile_layer_count(&self) -> usize {
        self.count(|p| matches!(p, Primitive::TileLayer(_)))
    }

    /// The last view set through [`MapSurface::set_view`].
    pub fn view(&self) -> Option<(Coordinate, u8)> {
        self.view
    }

    /// The last bounds passed to [`MapSurface::fit_bounds`].
    pub fn fitted_bounds(&self) -> Option<BoundingBox> {
        self.fitted
    }

    fn count(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.values().filter(|p| pred(p)).count()
    }
}

impl MapSurface for MemorySurface {
    fn add_marker(&mut self, at: Coordinate) -> PrimitiveHandle {
        self.insert(Primitive::Marker(at))
    }

    fn add_line(&mut self, from: Coordinate, to: Coordinate) -> PrimitiveHandle {
        self.insert(Primitive::Line(from, to))
    }

    fn add_polygon(&mut self, vertices: &[Coordinate]) -> PrimitiveHandle {
        self.insert(Primitive::Polygon(vertices.to_vec()))
    }

    fn add_rectangle(&mut self, bounds: BoundingBox) -> PrimitiveHandle {
        self.insert(Primitive::Rectangle(bounds))
    }

    fn add_tile_layer(&mut self, config: &WmsLayerConfig) -> PrimitiveHandle {
        self.insert(Primitive::TileLayer(config.clone()))
    }

    fn set_rectangle_bounds(&mut self, handle: PrimitiveHandle, bounds: BoundingBox) {
        if let Some(Primitive::Rectangle(current)) = self.primitives.get_mut(&handle) {
            *current = bounds;
        } else {
            log::warn!("set_rectangle_bounds on non-rectangle handle {handle:?}");
        }
    }

    fn remove(&mut self, handle: PrimitiveHandle) {
        self.primitives.remove(&handle);
    }

    fn bounds_of(&self, handle: PrimitiveHandle) -> Option<BoundingBox> {
        match self.primitives.get(&handle)? {
            Primitive::Marker(at) => Some(BoundingBox::spanning(*at, *at)),
            Primitive::Line(from, to) => Some(BoundingBox::spanning(*from, *to)),
            Primitive::Polygon(vertices) => BoundingBox::of(vertices),
            Primitive::Rectangle(bounds) => Some(*bounds),
            Primitive::TileLayer(_) => None,
        }
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn fit_bounds(&mut self, bounds: BoundingBox) {
        self.fitted = Some(bounds);
    }
}
