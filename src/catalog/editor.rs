//! Catalog editor: registering and updating cards after the initial build.
//!
//! `put_card` works like a map insert. A card already known by name has its
//! shared rule definition updated in place; a new card gets printings
//! generated from an explicit list, from the edition data, or as a single
//! UNKNOWN printing.
//!
//! Bulk loads go through a `CatalogBatch`: every put skips the reindex and
//! the batch reindexes once when committed or dropped.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::state::CatalogState;
use crate::cards::{
    NameKey, Printing, Rarity, RuleDefinition, RuleRef, DEFAULT_ART_INDEX, UNKNOWN_EDITION_CODE,
};

impl CatalogState {
    /// Register or update a card, then reindex.
    ///
    /// `printed` lists (edition code, rarity) pairs for a new card; `None`
    /// or an empty list uses the edition data instead. Returns the existing
    /// rule handle when the card was already registered, else `None`.
    pub fn put_card(
        &mut self,
        rules: RuleDefinition,
        printed: Option<&[(&str, Rarity)]>,
    ) -> Option<RuleRef> {
        self.put_card_with(rules, printed, true)
    }

    /// Start a batch of puts that share one reindex.
    pub fn batch(&mut self) -> CatalogBatch<&mut CatalogState> {
        CatalogBatch::new(self)
    }

    fn put_card_with(
        &mut self,
        rules: RuleDefinition,
        printed: Option<&[(&str, Rarity)]>,
        reindex: bool,
    ) -> Option<RuleRef> {
        let key = NameKey::new(&rules.name);
        if let Some(existing) = self.rules.get(&key) {
            existing.reinitialize_from(&rules);
            debug!(card = %rules.name, "rule definition updated in place");
            return Some(existing.clone());
        }

        let handle = RuleRef::new(rules);
        self.register_rules(handle.clone());

        let printings = self.generate_printings(&handle, printed);
        let mut added = 0;
        for printing in printings {
            if self.printings.add_printing(printing, &self.exclusions) {
                added += 1;
            }
        }
        debug!(card = %handle.name(), printings = added, "card registered");

        if reindex {
            self.reindex();
        }
        None
    }

    fn generate_printings(
        &self,
        rules: &RuleRef,
        printed: Option<&[(&str, Rarity)]>,
    ) -> Vec<Printing> {
        let mut out = Vec::new();

        match printed.filter(|list| !list.is_empty()) {
            Some(list) => {
                let mut last_edition: Option<&str> = None;
                let mut art_index = DEFAULT_ART_INDEX;
                for &(code, rarity) in list {
                    if last_edition != Some(code) {
                        art_index = DEFAULT_ART_INDEX;
                        last_edition = Some(code);
                    }
                    let Some(edition) = self.editions.get(code) else {
                        continue;
                    };
                    out.push(self.make_printing(rules, &edition.code, rarity, art_index, None));
                    art_index += 1;
                }
            }
            None => {
                let name = rules.name();
                for edition in self.editions.iter() {
                    let mut art_index = DEFAULT_ART_INDEX;
                    for card in edition.cards_named(&name) {
                        out.push(self.make_printing(
                            rules,
                            &edition.code,
                            card.rarity,
                            art_index,
                            card.collector_number.clone(),
                        ));
                        art_index += 1;
                    }
                }
            }
        }

        if out.is_empty() {
            out.push(self.make_printing(
                rules,
                UNKNOWN_EDITION_CODE,
                Rarity::Special,
                DEFAULT_ART_INDEX,
                None,
            ));
        }
        out
    }
}

/// A batch of catalog mutations with a single deferred reindex.
///
/// The batch holds exclusive access to the catalog for its whole lifetime,
/// so readers never see the stale projection. `commit` reindexes; dropping
/// an uncommitted batch reindexes too.
pub struct CatalogBatch<G>
where
    G: DerefMut<Target = CatalogState>,
{
    state: G,
    puts: usize,
    committed: bool,
}

impl<G> CatalogBatch<G>
where
    G: DerefMut<Target = CatalogState>,
{
    pub(crate) fn new(state: G) -> Self {
        Self {
            state,
            puts: 0,
            committed: false,
        }
    }

    /// Register or update a card without reindexing.
    pub fn put_card(
        &mut self,
        rules: RuleDefinition,
        printed: Option<&[(&str, Rarity)]>,
    ) -> Option<RuleRef> {
        self.puts += 1;
        self.state.put_card_with(rules, printed, false)
    }

    /// Number of puts so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puts == 0
    }

    /// Reindex once and release the catalog.
    pub fn commit(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.committed {
            return;
        }
        self.committed = true;
        self.state.reindex();
        debug!(puts = self.puts, "catalog batch committed");
    }
}

impl<G> Deref for CatalogBatch<G>
where
    G: DerefMut<Target = CatalogState>,
{
    type Target = CatalogState;

    fn deref(&self) -> &CatalogState {
        &self.state
    }
}

impl<G> Drop for CatalogBatch<G>
where
    G: DerefMut<Target = CatalogState>,
{
    fn drop(&mut self) {
        self.finish();
    }
}
