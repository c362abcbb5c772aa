//! Append-only log of finalized areas.

use crate::model::DrawnArea;
use crate::surface::PrimitiveHandle;

/// Ordered log of finalized areas and the overlay each one owns.
///
/// Insertion order is finalize order. The store never mutates an area after
/// it has been appended.
#[derive(Debug, Default)]
pub struct AreaStore {
    entries: Vec<(DrawnArea, PrimitiveHandle)>,
}

impl AreaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized area together with its overlay handle.
    pub(crate) fn push(&mut self, area: DrawnArea, overlay: PrimitiveHandle) {
        self.entries.push((area, overlay));
    }

    /// Iterate over the areas in finalize order.
    pub fn areas(&self) -> impl Iterator<Item = &DrawnArea> {
        self.entries.iter().map(|(area, _)| area)
    }

    /// Number of stored areas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the log, returning the overlay handles this store owned so the
    /// caller can remove them from the surface. Overlays the store does not
    /// own are never included.
    pub(crate) fn clear(&mut self) -> Vec<PrimitiveHandle> {
        self.entries
            .drain(..)
            .map(|(_, overlay)| overlay)
            .collect()
    }
}
