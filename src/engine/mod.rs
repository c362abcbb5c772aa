//! The interactive drawing-session engine.
//!
//! [`DrawingEngine`] owns the current draw mode, the transient capture
//! session and the log of finalized areas. The host forwards pointer events
//! with [`DrawingEngine::handle_event`] and switches tools with
//! [`DrawingEngine::set_mode`]; the engine advances the session through the
//! pure transition in [`session`] and applies the requested effects to the
//! injected map surface.

mod event;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use event::PointerEvent;
pub use store::AreaStore;

use crate::model::{AreaId, AreaKind, BoundingBox, DrawMode, DrawnArea};
use crate::surface::{MapSurface, PrimitiveHandle};

use session::{Effect, SessionState, Shape};

/// Host callback invoked once per finalized area.
pub type AreaCallback = Box<dyn FnMut(&DrawnArea)>;

/// Preview primitives owned by the active session.
///
/// Whenever no session is active this is empty; release is idempotent.
#[derive(Debug, Default)]
struct PreviewHandles {
    handles: Vec<PrimitiveHandle>,
    rubber_band: Option<PrimitiveHandle>,
}

impl PreviewHandles {
    fn track(&mut self, handle: PrimitiveHandle) {
        self.handles.push(handle);
    }

    fn release_all(&mut self, surface: &mut impl MapSurface) {
        for handle in self.handles.drain(..) {
            surface.remove(handle);
        }
        self.rubber_band = None;
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Event-driven engine turning pointer events into finalized areas.
pub struct DrawingEngine<S: MapSurface> {
    surface: S,
    mode: DrawMode,
    session: SessionState,
    preview: PreviewHandles,
    store: AreaStore,
    last_area_id: AreaId,
    on_area_drawn: Option<AreaCallback>,
}

impl<S: MapSurface> DrawingEngine<S> {
    /// Create an engine over the given map surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            mode: DrawMode::None,
            session: SessionState::Idle,
            preview: PreviewHandles::default(),
            store: AreaStore::new(),
            last_area_id: 0,
            on_area_drawn: None,
        }
    }

    /// Register the callback invoked once per finalized area.
    pub fn set_area_callback(&mut self, callback: impl FnMut(&DrawnArea) + 'static) {
        self.on_area_drawn = Some(Box::new(callback));
    }

    /// The currently selected draw mode.
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Switch the draw mode, cancelling any in-progress session first.
    ///
    /// The switch is synchronous and total: after it returns no preview
    /// primitive of the old session remains on the surface and no area was
    /// emitted for it.
    pub fn set_mode(&mut self, next: DrawMode) {
        if self.session.is_active() {
            self.cancel_session();
        }
        if self.mode != next {
            log::info!("draw mode: {} -> {}", self.mode.name(), next.name());
        }
        self.mode = next;
    }

    /// Handle a pointer event delivered by the host surface.
    pub fn handle_event(&mut self, event: PointerEvent) {
        let state = std::mem::take(&mut self.session);
        let (next, effects) = session::step(state, self.mode, event);
        self.session = next;
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Cancel any in-progress session, releasing every preview primitive.
    ///
    /// No area is emitted for the cancelled session. Safe to call when no
    /// session is active.
    pub fn cancel(&mut self) {
        if self.session.is_active() {
            self.cancel_session();
        }
    }

    /// Finalized areas in finalize order.
    pub fn areas(&self) -> impl Iterator<Item = &DrawnArea> {
        self.store.areas()
    }

    /// Number of finalized areas.
    pub fn area_count(&self) -> usize {
        self.store.len()
    }

    /// Remove every finalized area and exactly the overlays this engine
    /// created for them. Overlays owned by other collaborators (such as a
    /// mounted tile layer) are untouched.
    pub fn clear_areas(&mut self) {
        let handles = self.store.clear();
        let count = handles.len();
        for handle in handles {
            self.surface.remove(handle);
        }
        if count > 0 {
            log::info!("cleared {count} drawn areas");
        }
    }

    /// Borrow the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the underlying surface, e.g. to mount a tile layer.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::VertexMarker(at) => {
                let handle = self.surface.add_marker(at);
                self.preview.track(handle);
            }
            Effect::GuideLine(from, to) => {
                let handle = self.surface.add_line(from, to);
                self.preview.track(handle);
            }
            Effect::ShowRubberBand(bounds) => {
                let handle = self.surface.add_rectangle(bounds);
                self.preview.track(handle);
                self.preview.rubber_band = Some(handle);
            }
            Effect::MoveRubberBand(bounds) => {
                if let Some(handle) = self.preview.rubber_band {
                    self.surface.set_rectangle_bounds(handle, bounds);
                } else {
                    log::warn!("rubber-band move without a live rubber band");
                }
            }
            Effect::ClearPreview => {
                self.preview.release_all(&mut self.surface);
            }
            Effect::Finalize(shape) => {
                self.finalize_shape(shape);
            }
        }
    }

    /// Mint a `DrawnArea` from a completed capture and hand it to the store
    /// and the host.
    ///
    /// Preview primitives are already released at this point (the machine
    /// orders `ClearPreview` before `Finalize`), so a panicking host
    /// callback cannot strand them on the surface.
    fn finalize_shape(&mut self, shape: Shape) {
        let (kind, coordinates, bounds) = match shape {
            Shape::Polygon(points) => {
                let Some(bounds) = BoundingBox::of(&points) else {
                    log::warn!("discarding polygon with no vertices");
                    return;
                };
                (AreaKind::Polygon, points, bounds)
            }
            Shape::Rectangle(bounds) => {
                (AreaKind::Rectangle, bounds.corners().to_vec(), bounds)
            }
        };

        let overlay = match kind {
            AreaKind::Polygon => self.surface.add_polygon(&coordinates),
            _ => self.surface.add_rectangle(bounds),
        };

        self.last_area_id += 1;
        let area = DrawnArea::new(self.last_area_id, kind, coordinates, bounds);
        log::info!("area {} finalized ({})", area.id, area.kind.name());
        self.store.push(area.clone(), overlay);

        // Drawing is single-shot per activation, for both machines.
        self.mode = DrawMode::None;

        if let Some(callback) = &mut self.on_area_drawn {
            callback(&area);
        }
    }

    fn cancel_session(&mut self) {
        log::info!("cancelling in-progress {} session", self.mode.name());
        self.session = SessionState::Idle;
        self.preview.release_all(&mut self.surface);
    }

    #[cfg(test)]
    fn preview_is_empty(&self) -> bool {
        self.preview.is_empty()
    }
}

impl<S: MapSurface> Drop for DrawingEngine<S> {
    /// Teardown path: cancel any active session so no preview primitive
    /// outlives the engine on a shared surface.
    fn drop(&mut self) {
        if self.session.is_active() {
            self.cancel_session();
        }
    }
}
