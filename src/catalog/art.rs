//! Art index allocation.
//!
//! An edition can print the same card several times with different art
//! (basic lands are the usual case). Each printing gets an art index, counted
//! per (edition, card) from `DEFAULT_ART_INDEX` in listing order.

use rustc_hash::FxHashMap;

use crate::cards::{NameKey, DEFAULT_ART_INDEX};

/// Hands out sequential art indices per (edition, card name).
///
/// State lives for one full rebuild and is cleared at its start.
#[derive(Clone, Debug, Default)]
pub struct ArtIndexAllocator {
    last: FxHashMap<(NameKey, NameKey), u32>,
}

impl ArtIndexAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next art index for the pair: the default index on first sight, then
    /// one more than the previous allocation.
    pub fn allocate(&mut self, edition: &str, name: &str) -> u32 {
        let slot = self
            .last
            .entry((NameKey::new(edition), NameKey::new(name)))
            .and_modify(|idx| *idx += 1)
            .or_insert(DEFAULT_ART_INDEX);
        *slot
    }

    /// Forget every allocation.
    pub fn reset(&mut self) {
        self.last.clear();
    }
}
