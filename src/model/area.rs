//! Drawn-area types and draw-mode selection.

use serde::{Deserialize, Serialize};
use web_time::SystemTime;

use super::geometry::{BoundingBox, Coordinate};

/// Unique identifier for a drawn area.
///
/// Minted from a monotonic counter owned by the engine, so two areas
/// finalized back to back can never collide.
pub type AreaId = u64;

/// Draw modes available to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// No tool selected; pointer events are ignored
    #[default]
    None,
    /// Freehand polygon: click to add vertices, double-click to finalize
    Polygon,
    /// Rectangle: press, drag and release
    Rectangle,
}

impl DrawMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            DrawMode::None => "None",
            DrawMode::Polygon => "Polygon",
            DrawMode::Rectangle => "Rectangle",
        }
    }

    /// Check if this mode is a drawing mode (not None).
    pub fn is_drawing_mode(&self) -> bool {
        !matches!(self, DrawMode::None)
    }
}

/// Kind of a finalized area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    /// Freehand polygon from clicked vertices
    Polygon,
    /// Axis-aligned rectangle from a drag span
    Rectangle,
    /// Reserved; never produced by the drawing engine
    Circle,
}

impl AreaKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            AreaKind::Polygon => "polygon",
            AreaKind::Rectangle => "rectangle",
            AreaKind::Circle => "circle",
        }
    }
}

/// A finalized area of interest.
///
/// Created exactly once when a capture session finalizes and never mutated
/// afterwards. For `Polygon` the coordinates are the clicked vertices in
/// capture order (at least three); for `Rectangle` they are exactly the four
/// corners in NW, NE, SE, SW order.
#[derive(Debug, Clone)]
pub struct DrawnArea {
    /// Unique identifier, stable for the lifetime of the area
    pub id: AreaId,
    /// Shape kind
    pub kind: AreaKind,
    /// Ordered vertex coordinates
    pub coordinates: Vec<Coordinate>,
    /// Bounding box enclosing all coordinates
    pub bounds: BoundingBox,
    /// Time of finalization
    pub created_at: SystemTime,
}

impl DrawnArea {
    /// Create a new area stamped with the current time.
    pub fn new(id: AreaId, kind: AreaKind, coordinates: Vec<Coordinate>, bounds: BoundingBox) -> Self {
        Self {
            id,
            kind,
            coordinates,
            bounds,
            created_at: SystemTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_none() {
        assert_eq!(DrawMode::default(), DrawMode::None);
        assert!(!DrawMode::default().is_drawing_mode());
    }

    #[test]
    fn test_drawing_modes() {
        assert!(DrawMode::Polygon.is_drawing_mode());
        assert!(DrawMode::Rectangle.is_drawing_mode());
        assert_eq!(DrawMode::Polygon.name(), "Polygon");
    }

    #[test]
    fn test_area_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AreaKind::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
        let kind: AreaKind = serde_json::from_str("\"polygon\"").unwrap();
        assert_eq!(kind, AreaKind::Polygon);
    }
}
