//! Thread-safe catalog handle.
//!
//! `Catalog` puts a `CatalogState` behind a reader/writer lock. Queries take
//! the read lock and run concurrently; rebuilds, edits and preference
//! changes take the write lock. Wrap it in an `Arc` to share it.

use chrono::NaiveDate;
use im::Vector;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::editor::CatalogBatch;
use super::predicate::{EditionMembership, RarityMembership};
use super::preference::ArtPreference;
use super::state::{CatalogState, RebuildReport};
use crate::cards::{Editions, Printing, Rarity, RuleDefinition, RuleRef};
use crate::core::CatalogConfig;

/// A card catalog shared between threads.
#[derive(Debug)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// Wrap an existing state as is.
    pub fn new(state: CatalogState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Create a catalog and run the initial rebuild.
    pub fn build(
        rules: impl IntoIterator<Item = RuleDefinition>,
        editions: Editions,
        config: CatalogConfig,
    ) -> Self {
        let mut state = CatalogState::new(rules, editions, config);
        state.rebuild();
        Self::new(state)
    }

    /// Take the state back out.
    pub fn into_inner(self) -> CatalogState {
        self.state.into_inner()
    }

    /// Read guard for several lookups against one consistent view.
    pub fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read()
    }

    // === Writers ===

    pub fn rebuild(&self) -> RebuildReport {
        self.state.write().rebuild()
    }

    pub fn reindex(&self) {
        self.state.write().reindex();
    }

    pub fn put_card(
        &self,
        rules: RuleDefinition,
        printed: Option<&[(&str, Rarity)]>,
    ) -> Option<RuleRef> {
        self.state.write().put_card(rules, printed)
    }

    /// Start a batch. The write lock is held until the batch is committed
    /// or dropped.
    pub fn batch(&self) -> CatalogBatch<RwLockWriteGuard<'_, CatalogState>> {
        CatalogBatch::new(self.state.write())
    }

    pub fn set_art_preference(&self, text: &str) -> ArtPreference {
        self.state.write().set_art_preference(text)
    }

    pub fn set_preferred_art(&self, name: &str, selector: &str) -> bool {
        self.state.write().set_preferred_art(name, selector)
    }

    pub fn clear_preferred_art(&self, name: &str) -> bool {
        self.state.write().clear_preferred_art(name)
    }

    // === Readers ===

    pub fn art_preference(&self) -> ArtPreference {
        self.state.read().art_preference()
    }

    pub fn get_card(&self, request: &str) -> Option<Printing> {
        self.state.read().get_card(request)
    }

    pub fn get_card_in(&self, name: &str, edition: &str) -> Option<Printing> {
        self.state.read().get_card_in(name, edition)
    }

    pub fn get_card_art(&self, name: &str, edition: &str, art_index: u32) -> Option<Printing> {
        self.state.read().get_card_art(name, edition, art_index)
    }

    pub fn get_card_numbered(
        &self,
        name: &str,
        edition: &str,
        collector_number: &str,
    ) -> Option<Printing> {
        self.state
            .read()
            .get_card_numbered(name, edition, collector_number)
    }

    pub fn get_card_exact(
        &self,
        name: &str,
        edition: &str,
        art_index: u32,
        collector_number: &str,
    ) -> Option<Printing> {
        self.state
            .read()
            .get_card_exact(name, edition, art_index, collector_number)
    }

    pub fn get_card_from_edition(
        &self,
        name: &str,
        edition: &str,
        art_index: Option<u32>,
        collector_number: Option<&str>,
        foil: bool,
    ) -> Option<Printing> {
        self.state
            .read()
            .get_card_from_edition(name, edition, art_index, collector_number, foil)
    }

    pub fn get_card_from_editions(
        &self,
        name: &str,
        policy: Option<ArtPreference>,
        art_index: Option<u32>,
        printed_before: Option<NaiveDate>,
    ) -> Option<Printing> {
        self.state
            .read()
            .get_card_from_editions(name, policy, art_index, printed_before)
    }

    pub fn get_card_or_placeholder(&self, request: &str) -> Option<Printing> {
        self.state.read().get_card_or_placeholder(request)
    }

    /// Snapshot of a card's printings; stays valid after later writes.
    pub fn all_printings(&self, name: &str) -> Vector<Printing> {
        self.state.read().all_printings(name)
    }

    pub fn unique_printings(&self) -> Vec<Printing> {
        self.state.read().unique_printings()
    }

    pub fn unique_by_name(&self, name: &str) -> Option<Printing> {
        self.state.read().unique_by_name(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.state.read().contains(name)
    }

    pub fn max_art_index(&self, name: &str) -> Option<u32> {
        self.state.read().max_art_index(name)
    }

    pub fn art_count(&self, name: &str, edition: &str) -> usize {
        self.state.read().art_count(name, edition)
    }

    pub fn printed_in_editions(&self, codes: &[&str]) -> EditionMembership {
        self.state.read().printed_in_editions(codes)
    }

    pub fn printed_at_rarity(&self, rarity: Rarity) -> RarityMembership {
        self.state.read().printed_at_rarity(rarity)
    }

    pub fn request_string(&self, printing: &Printing) -> String {
        self.state.read().request_string(printing)
    }
}

impl From<CatalogState> for Catalog {
    fn from(state: CatalogState) -> Self {
        Self::new(state)
    }
}
