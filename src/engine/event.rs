//! Pointer events delivered by the host map surface.

use crate::model::Coordinate;

/// A discrete pointer event at a geographic point.
///
/// The engine imposes no ordering or debouncing of its own; events are
/// handled in whatever order the host surface delivers them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button click
    Click(Coordinate),
    /// Primary button double-click
    DoubleClick(Coordinate),
    /// Primary button pressed
    Down(Coordinate),
    /// Pointer moved
    Move(Coordinate),
    /// Primary button released
    Up(Coordinate),
}

impl PointerEvent {
    /// The geographic point the event was delivered at.
    pub fn point(&self) -> Coordinate {
        match self {
            PointerEvent::Click(point)
            | PointerEvent::DoubleClick(point)
            | PointerEvent::Down(point)
            | PointerEvent::Move(point)
            | PointerEvent::Up(point) => *point,
        }
    }
}
