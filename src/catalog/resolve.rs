//! Request resolution.
//!
//! Two strategies turn a request into one printing:
//!
//! - **Exact edition**: the request names an edition. Filter the card's
//!   printings to that edition, then by art index and collector number,
//!   preferring the first candidate with an image.
//! - **Cross edition**: no edition requested. Walk the card's editions in
//!   the order the art preference dictates and stop at the first printing
//!   with an image, remembering the first hit as a fallback.

use chrono::NaiveDate;

use super::index::first_with_image;
use super::preference::ArtPreference;
use super::request::{CardRequest, FOIL_SUFFIX, SEPARATOR};
use super::state::CatalogState;
use crate::cards::{Edition, Printing, DEFAULT_ART_INDEX};

impl CatalogState {
    /// Resolve a parsed request.
    #[must_use]
    pub fn resolve(&self, request: &CardRequest) -> Option<Printing> {
        if request.edition.as_deref().is_some_and(|code| !code.is_empty()) {
            return self.resolve_unpinned(request);
        }

        let key = self.key_for(&request.card_name);
        if self.preferred_art.contains_key(&key) {
            if let Some(pinned) = self.unique.get(&key) {
                return Some(apply_foil(pinned.clone(), request.foil));
            }
        }
        self.resolve_unpinned(request)
    }

    fn resolve_unpinned(&self, request: &CardRequest) -> Option<Printing> {
        if let Some(code) = request.edition.as_deref().filter(|code| !code.is_empty()) {
            let edition = self.editions.get(code)?;
            return self.match_in_edition(
                &request.card_name,
                edition,
                request.art_index,
                request.collector_number.as_deref(),
                request.foil,
            );
        }

        // Art 1 exists in every edition a card appears in, so only a later
        // art narrows a cross-edition search.
        let art_index = request.art_index.filter(|idx| *idx > DEFAULT_ART_INDEX);
        let found = self.get_card_from_editions(&request.card_name, None, art_index, None)?;
        Some(apply_foil(found, request.foil))
    }

    pub(crate) fn resolve_preferred(&self, name: &str, selector: &str) -> Option<Printing> {
        let request = CardRequest::parse(&format!("{name}{SEPARATOR}{selector}"))?;
        self.resolve_unpinned(&request)
    }

    /// Resolve a request string such as `"Lightning Bolt+|M10"`.
    #[must_use]
    pub fn get_card(&self, request: &str) -> Option<Printing> {
        self.resolve(&CardRequest::parse(request)?)
    }

    /// Card from one edition, default art.
    #[must_use]
    pub fn get_card_in(&self, name: &str, edition: &str) -> Option<Printing> {
        self.resolve(&CardRequest::named(name).with_edition(edition))
    }

    /// Card from one edition with a specific art.
    #[must_use]
    pub fn get_card_art(&self, name: &str, edition: &str, art_index: u32) -> Option<Printing> {
        self.resolve(
            &CardRequest::named(name)
                .with_edition(edition)
                .with_art_index(art_index),
        )
    }

    /// Card from one edition with a specific collector number.
    #[must_use]
    pub fn get_card_numbered(
        &self,
        name: &str,
        edition: &str,
        collector_number: &str,
    ) -> Option<Printing> {
        self.resolve(
            &CardRequest::named(name)
                .with_edition(edition)
                .with_collector_number(collector_number),
        )
    }

    /// Card from one edition with both art and collector number.
    #[must_use]
    pub fn get_card_exact(
        &self,
        name: &str,
        edition: &str,
        art_index: u32,
        collector_number: &str,
    ) -> Option<Printing> {
        self.resolve(
            &CardRequest::named(name)
                .with_edition(edition)
                .with_collector_number(collector_number)
                .with_art_index(art_index),
        )
    }

    /// Exact-edition match by edition code (primary or alias).
    #[must_use]
    pub fn get_card_from_edition(
        &self,
        name: &str,
        edition: &str,
        art_index: Option<u32>,
        collector_number: Option<&str>,
        foil: bool,
    ) -> Option<Printing> {
        let edition = self.editions.get(edition)?;
        self.match_in_edition(name, edition, art_index, collector_number, foil)
    }

    fn match_in_edition(
        &self,
        name: &str,
        edition: &Edition,
        art_index: Option<u32>,
        collector_number: Option<&str>,
        foil: bool,
    ) -> Option<Printing> {
        let (name, foil) = match name.strip_suffix(FOIL_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (name, foil),
        };
        let art_index = art_index.filter(|idx| *idx > 0);
        let collector_number = collector_number.filter(|n| !n.is_empty());

        let printings = self.printings.get(&self.key_for(name))?;
        let candidates = printings.iter().filter(|p| {
            edition.matches_code(p.edition())
                && art_index.map_or(true, |idx| p.art_index() == idx)
                && collector_number.map_or(true, |n| p.collector_number() == Some(n))
        });
        let found = first_with_image(candidates)?;
        Some(apply_foil(found.clone(), foil))
    }

    /// Cross-edition match under an art preference.
    ///
    /// `policy` defaults to the catalog's current preference. With
    /// `printed_before`, only editions released strictly before that date
    /// are considered.
    #[must_use]
    pub fn get_card_from_editions(
        &self,
        name: &str,
        policy: Option<ArtPreference>,
        art_index: Option<u32>,
        printed_before: Option<NaiveDate>,
    ) -> Option<Printing> {
        let request = CardRequest::parse(name)?;
        let policy = policy.unwrap_or(self.preference);
        let art_index = art_index.filter(|idx| *idx >= DEFAULT_ART_INDEX);
        let printings = self.printings.get(&self.key_for(&request.card_name))?;

        let mut editions: Vec<&Edition> = Vec::new();
        for printing in printings {
            let Some(edition) = self.editions.get(printing.edition()) else {
                continue;
            };
            if printed_before.is_some_and(|cutoff| edition.date >= cutoff) {
                continue;
            }
            if !editions.iter().any(|seen| seen.code == edition.code) {
                editions.push(edition);
            }
        }
        editions.retain(|edition| policy.accepts(edition));
        editions.sort_by_key(|edition| edition.date);
        if policy.latest_first() {
            editions.reverse();
        }

        let mut fallback = None;
        for edition in editions {
            let Some(found) =
                self.match_in_edition(&request.card_name, edition, art_index, None, request.foil)
            else {
                continue;
            };
            if found.has_image() {
                return Some(found);
            }
            fallback.get_or_insert(found);
        }
        fallback
    }

    /// Pin the printing a `name|selector` request resolves to as the
    /// representative of `name`.
    ///
    /// The pin survives reindexing and answers later requests that name no
    /// edition. Returns false, changing nothing, when the request does not
    /// resolve.
    pub fn set_preferred_art(&mut self, name: &str, selector: &str) -> bool {
        let name = name.strip_suffix(FOIL_SUFFIX).unwrap_or(name);
        let Some(found) = self.resolve_preferred(name, selector) else {
            return false;
        };
        let key = self.key_for(name);
        self.preferred_art
            .insert(key.clone(), (name.to_string(), selector.to_string()));
        self.unique.pin(key, found);
        true
    }

    /// Drop a pinned art. The next reindex restores the default choice.
    pub fn clear_preferred_art(&mut self, name: &str) -> bool {
        let name = name.strip_suffix(FOIL_SUFFIX).unwrap_or(name);
        let key = self.key_for(name);
        self.preferred_art.remove(&key).is_some()
    }
}

fn apply_foil(printing: Printing, foil: bool) -> Printing {
    if foil && !printing.is_foil() {
        printing.foiled()
    } else {
        printing
    }
}
