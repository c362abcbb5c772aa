//! Data models for the mapdraw engine.

mod area;
mod geometry;

pub use area::{AreaId, AreaKind, DrawMode, DrawnArea};
pub use geometry::{BoundingBox, Coordinate};
