//! Capture-session state machine.
//!
//! The session is advanced exclusively through [`step`], a pure
//! `(state, mode, event) -> (state, effects)` transition. Side effects
//! (preview primitives, finalization) are returned as data and applied by
//! the engine adapter, which keeps the machine testable without any map
//! surface.

use crate::constants::MIN_POLYGON_VERTICES;
use crate::model::{BoundingBox, Coordinate, DrawMode};

use super::event::PointerEvent;

/// Phase of the transient capture session.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum SessionState {
    /// No capture in progress
    #[default]
    Idle,
    /// Polygon capture: vertices clicked so far, in capture order
    Capturing { points: Vec<Coordinate> },
    /// Rectangle drag: anchor from pointer-down and the latest pointer position
    Dragging { anchor: Coordinate, cursor: Coordinate },
}

impl SessionState {
    /// Check whether a capture is in progress.
    pub(crate) fn is_active(&self) -> bool {
        !matches!(self, SessionState::Idle)
    }
}

/// A completed capture, ready to be minted into a `DrawnArea`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    /// Clicked vertices in capture order, at least `MIN_POLYGON_VERTICES`
    Polygon(Vec<Coordinate>),
    /// Normalized drag span
    Rectangle(BoundingBox),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Effect {
    /// Create a preview vertex marker
    VertexMarker(Coordinate),
    /// Create a preview guide line between the previous and the new vertex
    GuideLine(Coordinate, Coordinate),
    /// Create the live rubber-band rectangle
    ShowRubberBand(BoundingBox),
    /// Move the live rubber-band rectangle
    MoveRubberBand(BoundingBox),
    /// Release every preview primitive
    ClearPreview,
    /// Mint and emit the captured shape
    Finalize(Shape),
}

/// Advance the session by one event.
///
/// Events that do not apply to the current mode and phase leave the state
/// untouched and request no effects; invalid input is rejected silently.
pub(crate) fn step(
    state: SessionState,
    mode: DrawMode,
    event: PointerEvent,
) -> (SessionState, Vec<Effect>) {
    match mode {
        DrawMode::None => (state, Vec::new()),
        DrawMode::Polygon => step_polygon(state, event),
        DrawMode::Rectangle => step_rectangle(state, event),
    }
}

fn step_polygon(state: SessionState, event: PointerEvent) -> (SessionState, Vec<Effect>) {
    match (state, event) {
        (SessionState::Idle, PointerEvent::Click(point)) => {
            log::info!("polygon capture started at ({:.5}, {:.5})", point.lat, point.lng);
            (
                SessionState::Capturing {
                    points: vec![point],
                },
                vec![Effect::VertexMarker(point)],
            )
        }
        (SessionState::Capturing { mut points }, PointerEvent::Click(point)) => {
            let mut effects = vec![Effect::VertexMarker(point)];
            if let Some(prev) = points.last().copied() {
                effects.push(Effect::GuideLine(prev, point));
            }
            points.push(point);
            log::debug!(
                "polygon vertex {} at ({:.5}, {:.5})",
                points.len(),
                point.lat,
                point.lng
            );
            (SessionState::Capturing { points }, effects)
        }
        (SessionState::Capturing { points }, PointerEvent::DoubleClick(_)) => {
            // The terminal double-click's point is not a vertex.
            if points.len() >= MIN_POLYGON_VERTICES {
                log::info!("polygon finalized with {} vertices", points.len());
                (
                    SessionState::Idle,
                    vec![Effect::ClearPreview, Effect::Finalize(Shape::Polygon(points))],
                )
            } else {
                log::warn!(
                    "ignoring double-click: polygon has {} of {} required vertices",
                    points.len(),
                    MIN_POLYGON_VERTICES
                );
                (SessionState::Capturing { points }, Vec::new())
            }
        }
        (state, _) => (state, Vec::new()),
    }
}

fn step_rectangle(state: SessionState, event: PointerEvent) -> (SessionState, Vec<Effect>) {
    match (state, event) {
        (SessionState::Idle, PointerEvent::Down(point)) => {
            log::info!("rectangle drag started at ({:.5}, {:.5})", point.lat, point.lng);
            (
                SessionState::Dragging {
                    anchor: point,
                    cursor: point,
                },
                vec![Effect::ShowRubberBand(BoundingBox::spanning(point, point))],
            )
        }
        (SessionState::Dragging { anchor, .. }, PointerEvent::Move(point)) => (
            SessionState::Dragging {
                anchor,
                cursor: point,
            },
            vec![Effect::MoveRubberBand(BoundingBox::spanning(anchor, point))],
        ),
        (SessionState::Dragging { anchor, .. }, PointerEvent::Up(point)) => {
            let bounds = BoundingBox::spanning(anchor, point);
            log::info!(
                "rectangle finalized spanning ({:.5}, {:.5})..({:.5}, {:.5})",
                bounds.south,
                bounds.west,
                bounds.north,
                bounds.east
            );
            (
                SessionState::Idle,
                vec![
                    Effect::ClearPreview,
                    Effect::Finalize(Shape::Rectangle(bounds)),
                ],
            )
        }
        (state, _) => (state, Vec::new()),
    }
}
