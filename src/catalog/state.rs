//! Catalog state: every index plus the full rebuild.
//!
//! `CatalogState` is the unsynchronized catalog. It owns the rule
//! definitions, the face registry, the printing index and the unique
//! projection, and is the only place printings are created. `Catalog`
//! wraps it in a reader/writer lock for shared use.

use std::sync::Arc;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use super::art::ArtIndexAllocator;
use super::exclusion::ExclusionList;
use super::index::{PrintingIndex, UniqueProjection};
use super::preference::ArtPreference;
use super::request::{CardRequest, FOIL_SUFFIX, SEPARATOR};
use crate::cards::{
    CardFace, EditionType, Editions, EveryImage, FaceRegistry, ImageSource, NameKey, Printing,
    Rarity, RuleDefinition, RuleRef, DEFAULT_ART_INDEX, UNKNOWN_EDITION_CODE,
};
use crate::core::CatalogConfig;

/// Outcome of a full rebuild.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RebuildReport {
    /// Printings added to the index (each counted once).
    pub printings: usize,
    /// Card names listed by editions but missing a rule definition.
    pub missing: Vec<String>,
    /// First core/expansion edition dated after today, if any.
    pub upcoming_edition: Option<String>,
    /// Rules no edition prints, placed in the upcoming edition.
    pub placed_upcoming: Vec<String>,
    /// Rules no edition prints, placed in the UNKNOWN edition.
    pub placed_unknown: Vec<String>,
}

/// The catalog's indices and configuration.
///
/// ## Example
///
/// ```
/// use ccg_catalog::cards::{CardInSet, Edition, EditionType, Editions, Rarity, RuleDefinition};
/// use ccg_catalog::catalog::CatalogState;
/// use ccg_catalog::core::CatalogConfig;
/// use chrono::NaiveDate;
///
/// let m10 = Edition::new("M10", NaiveDate::from_ymd_opt(2009, 7, 17).unwrap(), EditionType::Core)
///     .with_card(CardInSet::new("Lightning Bolt", Rarity::Common).numbered("146"));
/// let editions = Editions::new(vec![m10]).unwrap();
///
/// let mut state = CatalogState::new(
///     vec![RuleDefinition::new("Lightning Bolt")],
///     editions,
///     CatalogConfig::default(),
/// );
/// state.rebuild();
///
/// let bolt = state.get_card("lightning bolt|M10").unwrap();
/// assert_eq!(bolt.collector_number(), Some("146"));
/// ```
pub struct CatalogState {
    pub(crate) config: CatalogConfig,
    pub(crate) editions: Editions,
    pub(crate) rules: FxHashMap<NameKey, RuleRef>,
    pub(crate) rule_order: Vec<NameKey>,
    pub(crate) faces: FaceRegistry,
    pub(crate) exclusions: ExclusionList,
    pub(crate) printings: PrintingIndex,
    pub(crate) unique: UniqueProjection,
    pub(crate) art: ArtIndexAllocator,
    pub(crate) images: Arc<dyn ImageSource>,
    pub(crate) preference: ArtPreference,
    pub(crate) preferred_art: FxHashMap<NameKey, (String, String)>,
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("editions", &self.editions.len())
            .field("rules", &self.rules.len())
            .field("keys", &self.printings.len())
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

impl CatalogState {
    /// Create a catalog over the given rules and editions.
    ///
    /// The printing index starts empty; call `rebuild` to populate it.
    pub fn new(
        rules: impl IntoIterator<Item = RuleDefinition>,
        editions: Editions,
        config: CatalogConfig,
    ) -> Self {
        let mut state = Self {
            exclusions: ExclusionList::new(&config.excluded_cards),
            preference: config.art_preference,
            config,
            editions,
            rules: FxHashMap::default(),
            rule_order: Vec::new(),
            faces: FaceRegistry::new(),
            printings: PrintingIndex::new(),
            unique: UniqueProjection::new(),
            art: ArtIndexAllocator::new(),
            images: Arc::new(EveryImage),
            preferred_art: FxHashMap::default(),
        };
        for definition in rules {
            state.register_rules(RuleRef::new(definition));
        }
        state
    }

    /// Replace the image source (builder pattern).
    ///
    /// Takes effect for printings created afterwards.
    #[must_use]
    pub fn with_image_source(mut self, source: impl ImageSource + 'static) -> Self {
        self.images = Arc::new(source);
        self
    }

    pub(crate) fn register_rules(&mut self, handle: RuleRef) {
        let key = NameKey::new(&handle.read().name);
        {
            let rules = handle.read();
            if !self.exclusions.excludes_faces(&rules.name) {
                self.faces.register(&rules);
            }
        }
        if self.rules.insert(key.clone(), handle).is_none() {
            self.rule_order.push(key);
        }
    }

    /// Create a printing, asking the image source about it.
    pub(crate) fn make_printing(
        &self,
        rules: &RuleRef,
        edition: &str,
        rarity: Rarity,
        art_index: u32,
        collector_number: Option<String>,
    ) -> Printing {
        let has_image = self.images.has_image(&rules.name(), edition, art_index);
        Printing::new(rules.clone(), edition, rarity, art_index, collector_number, has_image)
    }

    /// Discard every printing and recreate them from the editions.
    pub fn rebuild(&mut self) -> RebuildReport {
        self.printings.clear();
        self.unique.clear();
        self.art.reset();

        let today = self.config.today();
        let mut report = RebuildReport::default();
        let mut seen_missing = FxHashSet::default();
        let mut regular_missing = Vec::new();

        for edition in self.editions.iter() {
            if edition.kind.is_core_or_expansion()
                && edition.date > today
                && report.upcoming_edition.is_none()
            {
                report.upcoming_edition = Some(edition.code.clone());
            }

            let mut missing = Vec::new();
            for card in &edition.cards {
                let Some(rules) = self.rules.get(&NameKey::new(&card.name)) else {
                    missing.push(card.name.clone());
                    continue;
                };
                let art_index = self.art.allocate(&edition.code, &card.name);
                let has_image = self.images.has_image(&rules.name(), &edition.code, art_index);
                let printing = Printing::new(
                    rules.clone(),
                    &edition.code,
                    card.rarity,
                    art_index,
                    card.collector_number.clone(),
                    has_image,
                );
                if self.printings.add_printing(printing, &self.exclusions) {
                    report.printings += 1;
                }
            }

            let regular = edition.kind.is_regular();
            if regular && self.config.log_missing_per_edition {
                if missing.is_empty() {
                    info!(edition = %edition, cards = edition.cards.len(), "edition fully implemented");
                } else {
                    let total = edition.cards.len();
                    let coverage = coverage_percent(total, missing.len());
                    info!(
                        edition = %edition,
                        cards = total,
                        coverage = format_args!("{coverage:.2}%"),
                        missing = %missing.join(" | "),
                        "edition partially implemented"
                    );
                }
            }

            for name in missing {
                if seen_missing.insert(NameKey::new(&name)) {
                    if regular {
                        regular_missing.push(name.clone());
                    }
                    report.missing.push(name);
                }
            }
        }

        if self.config.log_missing_summary {
            info!(
                count = regular_missing.len(),
                cards = %regular_missing.join(" | "),
                "cards not implemented"
            );
        }
        if let Some(code) = &report.upcoming_edition {
            warn!(edition = %code, "upcoming edition dated in the future; unplaced cards are added to it with unknown rarity");
        }

        for key in &self.rule_order {
            if self.printings.contains_key(key) {
                continue;
            }
            let Some(rules) = self.rules.get(key) else {
                continue;
            };
            let name = rules.name();
            if let Some(code) = &report.upcoming_edition {
                let printing = self.make_printing(rules, code, Rarity::Unknown, DEFAULT_ART_INDEX, None);
                if self.printings.add_printing(printing, &self.exclusions) {
                    report.printings += 1;
                    report.placed_upcoming.push(name);
                }
            } else if self.config.enable_unknown_cards {
                let printing =
                    self.make_printing(rules, UNKNOWN_EDITION_CODE, Rarity::Special, DEFAULT_ART_INDEX, None);
                if self.printings.add_printing(printing, &self.exclusions) {
                    warn!(card = %name, "card is not printed in any edition; added to the UNKNOWN edition");
                    report.printings += 1;
                    report.placed_unknown.push(name);
                }
            }
        }

        self.reindex();
        info!(
            printings = report.printings,
            keys = self.printings.len(),
            missing = report.missing.len(),
            "catalog rebuilt"
        );
        report
    }

    /// Recompute the unique projection, then re-apply pinned arts.
    pub fn reindex(&mut self) {
        self.unique.rebuild(&self.printings);

        let pins: Vec<(NameKey, Printing)> = self
            .preferred_art
            .iter()
            .filter_map(|(key, (name, selector))| {
                self.resolve_preferred(name, selector)
                    .map(|printing| (key.clone(), printing))
            })
            .collect();
        for (key, printing) in pins {
            self.unique.pin(key, printing);
        }
        debug!(keys = self.unique.len(), "unique projection rebuilt");
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    #[must_use]
    pub fn editions(&self) -> &Editions {
        &self.editions
    }

    /// Current art preference policy.
    #[must_use]
    pub fn art_preference(&self) -> ArtPreference {
        self.preference
    }

    /// Set the art preference from free text.
    ///
    /// Unrecognized text selects `LatestArtAllEditions`.
    pub fn set_art_preference(&mut self, text: &str) -> ArtPreference {
        self.preference = ArtPreference::from_lenient(text);
        debug!(requested = text, policy = %self.preference, "art preference changed");
        self.preference
    }

    // === Names and faces ===

    /// Map an alternate face name to its primary name.
    #[must_use]
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.faces.canonical_name(name)
    }

    pub(crate) fn key_for(&self, name: &str) -> NameKey {
        NameKey::new(self.faces.canonical_name(name))
    }

    #[must_use]
    pub fn face_by_name(&self, name: &str) -> Option<&CardFace> {
        self.faces.face(name)
    }

    pub fn all_faces(&self) -> impl Iterator<Item = &CardFace> {
        self.faces.faces()
    }

    /// Rule definition for a name, or an unsupported placeholder.
    #[must_use]
    pub fn rules(&self, name: &str) -> RuleRef {
        self.rules
            .get(&NameKey::new(name))
            .or_else(|| self.rules.get(&self.key_for(name)))
            .cloned()
            .unwrap_or_else(|| RuleRef::new(RuleDefinition::unsupported(name)))
    }

    /// Is a rule definition registered under this name?
    #[must_use]
    pub fn has_rules(&self, name: &str) -> bool {
        self.rules.contains_key(&NameKey::new(name))
    }

    // === Printing queries ===

    /// Does any printing answer to this name?
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.printings.contains_key(&self.key_for(name))
    }

    /// Every printing listed under a name, in catalog order.
    #[must_use]
    pub fn all_printings(&self, name: &str) -> Vector<Printing> {
        self.printings
            .get(&self.key_for(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Printings listed under a name whose own name is that name.
    #[must_use]
    pub fn all_printings_no_alt(&self, name: &str) -> Vec<Printing> {
        let key = self.key_for(name);
        self.printings
            .get(&key)
            .map(|list| {
                list.iter()
                    .filter(|p| NameKey::new(p.name()) == key)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every printing matching a predicate.
    pub fn all_printings_matching<F>(&self, predicate: F) -> Vec<Printing>
    where
        F: Fn(&Printing) -> bool,
    {
        self.printings
            .printings()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    /// Printings listed under their own name only, matching a predicate.
    pub fn all_printings_no_alt_matching<F>(&self, predicate: F) -> Vec<Printing>
    where
        F: Fn(&Printing) -> bool,
    {
        self.printings
            .printings_no_alt()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    /// Printings from editions that are neither promo nor reprint, listed
    /// under their own name only.
    #[must_use]
    pub fn non_promo_non_reprint_printings_no_alt(&self) -> Vec<Printing> {
        self.all_printings_no_alt_matching(|p| {
            self.editions.get(p.edition()).is_some_and(|edition| {
                !matches!(edition.kind, EditionType::Promo | EditionType::Reprint)
            })
        })
    }

    /// Printings from non-promo editions.
    #[must_use]
    pub fn non_promo_printings(&self) -> Vec<Printing> {
        self.all_printings_matching(|p| {
            self.editions
                .get(p.edition())
                .is_some_and(|edition| edition.kind != EditionType::Promo)
        })
    }

    /// One printing per card listed in an edition, in listing order.
    #[must_use]
    pub fn printings_in_edition(&self, code: &str) -> Vec<Printing> {
        let Some(edition) = self.editions.get(code) else {
            return Vec::new();
        };
        edition
            .cards
            .iter()
            .filter_map(|card| self.get_card_in(&card.name, &edition.code))
            .collect()
    }

    /// Highest art index among a card's printings.
    #[must_use]
    pub fn max_art_index(&self, name: &str) -> Option<u32> {
        self.printings
            .get(&self.key_for(name))?
            .iter()
            .map(Printing::art_index)
            .max()
    }

    /// Number of arts of a card in one edition (primary code).
    #[must_use]
    pub fn art_count(&self, name: &str, edition: &str) -> usize {
        self.printings.get(&self.key_for(name)).map_or(0, |list| {
            list.iter()
                .filter(|p| p.edition().eq_ignore_ascii_case(edition))
                .count()
        })
    }

    // === Unique projection ===

    /// One representative printing per name key, sorted by key.
    #[must_use]
    pub fn unique_printings(&self) -> Vec<Printing> {
        self.unique
            .sorted()
            .into_iter()
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Representatives whose key is their own name (no face aliases).
    #[must_use]
    pub fn unique_printings_no_alt(&self) -> Vec<Printing> {
        self.unique
            .sorted()
            .into_iter()
            .filter(|(key, p)| NameKey::new(p.name()) == **key)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Representative printing for a name.
    #[must_use]
    pub fn unique_by_name(&self, name: &str) -> Option<Printing> {
        self.unique.get(&self.key_for(name)).cloned()
    }

    // === Rendering and placeholders ===

    /// Render a printing as a request string.
    #[must_use]
    pub fn request_string(&self, printing: &Printing) -> String {
        let mut out = String::from(printing.name());
        if printing.is_foil() {
            out.push(FOIL_SUFFIX);
        }
        let edition = printing.edition();
        if !edition.trim().is_empty() && edition != UNKNOWN_EDITION_CODE {
            out.push(SEPARATOR);
            out.push_str(edition);
            if self.art_count(printing.name(), edition) >= 1 {
                out.push(SEPARATOR);
                out.push_str(&printing.art_index().to_string());
            }
        }
        out
    }

    /// Build a flag-marked printing for a card the catalog cannot provide.
    ///
    /// The placeholder takes the edition and rarity the name is listed with
    /// when edition data knows it, else the UNKNOWN edition.
    #[must_use]
    pub fn create_unsupported(&self, request: &str) -> Option<Printing> {
        let request = CardRequest::parse(request)?;
        let mut edition = UNKNOWN_EDITION_CODE.to_string();
        let mut rarity = Rarity::Unknown;

        match request.edition.as_deref() {
            None => {
                let listed = self.editions.iter().find_map(|e| {
                    e.cards_named(&request.card_name)
                        .next()
                        .map(|card| (e.code.clone(), card.rarity))
                });
                if let Some((code, card_rarity)) = listed {
                    edition = code;
                    rarity = card_rarity;
                }
            }
            Some(code) => {
                if let Some(e) = self.editions.get(code) {
                    edition = e.code.clone();
                    if let Some(card) = e.cards_named(&request.card_name).next() {
                        rarity = card.rarity;
                    }
                }
            }
        }

        if rarity == Rarity::Unknown {
            warn!(card = %request.card_name, "card not found in any edition; the name may be mistyped");
        } else {
            warn!(card = %request.card_name, edition = %edition, "card is not supported yet");
        }

        let rules = RuleRef::new(RuleDefinition::unsupported(&request.card_name));
        Some(Printing::new(rules, edition, rarity, DEFAULT_ART_INDEX, None, false))
    }

    /// Resolve a request, falling back to an unsupported placeholder when
    /// placeholders are enabled.
    #[must_use]
    pub fn get_card_or_placeholder(&self, request: &str) -> Option<Printing> {
        self.get_card(request).or_else(|| {
            if self.config.unsupported_placeholders {
                self.create_unsupported(request)
            } else {
                None
            }
        })
    }
}

/// Share of an edition's card list that has rules, in percent.
fn coverage_percent(total: usize, missing: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    total.saturating_sub(missing) as f64 * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInSet, Edition, SplitKind};
    use chrono::NaiveDate;

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 1, 1).unwrap()
    }

    fn editions() -> Editions {
        Editions::new(vec![
            Edition::new("LEA", date(1993), EditionType::Core)
                .with_card(CardInSet::new("Forest", Rarity::BasicLand))
                .with_card(CardInSet::new("Forest", Rarity::BasicLand))
                .with_card(CardInSet::new("Lightning Bolt", Rarity::Common))
                .with_card(CardInSet::new("Black Lotus", Rarity::Rare)),
            Edition::new("M10", date(2009), EditionType::Core)
                .with_card(CardInSet::new("Lightning Bolt", Rarity::Common).numbered("146"))
                .with_card(CardInSet::new("Forest", Rarity::BasicLand).numbered("246")),
            Edition::new("FUT", date(2099), EditionType::Expansion)
                .with_card(CardInSet::new("Tomorrow Card", Rarity::Rare)),
        ])
        .unwrap()
    }

    fn config() -> CatalogConfig {
        CatalogConfig::default().with_today(date(2020))
    }

    fn rules() -> Vec<RuleDefinition> {
        vec![
            RuleDefinition::new("Forest"),
            RuleDefinition::new("Lightning Bolt"),
            RuleDefinition::new("Homebrew Card"),
        ]
    }

    #[test]
    fn test_rebuild_allocates_art_indices() {
        let mut state = CatalogState::new(rules(), editions(), config());
        state.rebuild();

        let forests = state.all_printings("forest");
        let arts: Vec<_> = forests.iter().map(|p| (p.edition(), p.art_index())).collect();
        assert_eq!(arts, vec![("LEA", 1), ("LEA", 2), ("M10", 1)]);
        assert_eq!(state.max_art_index("Forest"), Some(2));
        assert_eq!(state.art_count("Forest", "LEA"), 2);
        assert_eq!(state.art_count("Forest", "M10"), 1);
        assert_eq!(state.art_count("Nothing", "M10"), 0);
    }

    #[test]
    fn test_rebuild_report() {
        let mut state = CatalogState::new(rules(), editions(), config());
        let report = state.rebuild();

        assert_eq!(report.missing, vec!["Black Lotus".to_string(), "Tomorrow Card".to_string()]);
        assert_eq!(report.upcoming_edition.as_deref(), Some("FUT"));
        assert_eq!(report.placed_upcoming, vec!["Homebrew Card".to_string()]);
        assert!(report.placed_unknown.is_empty());

        let homebrew = state.get_card("Homebrew Card").unwrap();
        assert_eq!(homebrew.edition(), "FUT");
        assert_eq!(homebrew.rarity(), Rarity::Unknown);
    }

    #[test]
    fn test_unplaced_rules_go_to_unknown() {
        let mut state = CatalogState::new(rules(), editions(), config().with_today(date(2200)));
        let report = state.rebuild();

        assert!(report.upcoming_edition.is_none());
        assert_eq!(report.placed_unknown, vec!["Homebrew Card".to_string()]);
        let homebrew = state.get_card("Homebrew Card").unwrap();
        assert_eq!(homebrew.edition(), UNKNOWN_EDITION_CODE);
        assert_eq!(homebrew.rarity(), Rarity::Special);
    }

    #[test]
    fn test_unplaced_rules_dropped_when_unknown_disabled() {
        let cfg = config().with_today(date(2200)).with_unknown_cards(false);
        let mut state = CatalogState::new(rules(), editions(), cfg);
        state.rebuild();

        assert!(!state.contains("Homebrew Card"));
        assert!(state.has_rules("Homebrew Card"));
    }

    #[test]
    fn test_rebuild_is_repeatable() {
        let mut state = CatalogState::new(rules(), editions(), config());
        let first = state.rebuild();
        let second = state.rebuild();

        assert_eq!(first, second);
        assert_eq!(state.all_printings("Forest").len(), 3);
    }

    #[test]
    fn test_unique_projection_one_per_key() {
        let mut state = CatalogState::new(rules(), editions(), config());
        state.rebuild();

        let unique = state.unique_printings();
        assert_eq!(unique.len(), state.printings.len());
        let names: Vec<_> = unique.iter().map(Printing::name).collect();
        assert_eq!(names, vec!["Forest", "Homebrew Card", "Lightning Bolt"]);
    }

    #[test]
    fn test_unique_prefers_first_with_image() {
        let source = |_: &str, edition: &str, _: u32| edition == "M10";
        let mut state = CatalogState::new(rules(), editions(), config()).with_image_source(source);
        state.rebuild();

        assert_eq!(state.unique_by_name("Lightning Bolt").map(|p| p.edition().to_string()), Some("M10".into()));
    }

    #[test]
    fn test_alias_keys_and_no_alt_views() {
        let delver = RuleDefinition::new("Delver of Secrets").with_other(
            CardFace::new("Insectile Aberration").with_alt_name("Bug Form"),
            SplitKind::Transform,
        );
        let isd = Edition::new("ISD", date(2011), EditionType::Expansion)
            .with_card(CardInSet::new("Delver of Secrets", Rarity::Common));
        let mut state =
            CatalogState::new(vec![delver], Editions::new(vec![isd]).unwrap(), config());
        state.rebuild();

        assert!(state.contains("Insectile Aberration"));
        assert!(state.contains("bug form"));
        assert_eq!(state.canonical_name("Bug Form"), "Insectile Aberration");
        assert_eq!(state.all_printings("Insectile Aberration").len(), 1);
        assert!(state.all_printings_no_alt("Insectile Aberration").is_empty());
        assert_eq!(state.unique_printings().len(), 2);
        assert_eq!(state.unique_printings_no_alt().len(), 1);
        assert!(state.face_by_name("Insectile Aberration").is_some());
        assert_eq!(state.all_faces().count(), 2);
    }

    #[test]
    fn test_rules_lookup_with_placeholder() {
        let state = CatalogState::new(rules(), editions(), config());
        assert!(!state.rules("Forest").read().unsupported);
        assert!(state.rules("Unknown Thing").read().unsupported);
    }

    #[test]
    fn test_request_string() {
        let mut state = CatalogState::new(rules(), editions(), config());
        state.rebuild();

        let forest = state.get_card_art("Forest", "LEA", 2).unwrap();
        assert_eq!(state.request_string(&forest), "Forest|LEA|2");
        assert_eq!(state.request_string(&forest.foiled()), "Forest+|LEA|2");
    }

    #[test]
    fn test_create_unsupported() {
        let state = CatalogState::new(rules(), editions(), config());

        let lotus = state.create_unsupported("Black Lotus").unwrap();
        assert!(lotus.is_unsupported());
        assert_eq!(lotus.edition(), "LEA");
        assert_eq!(lotus.rarity(), Rarity::Rare);

        let typo = state.create_unsupported("Lightnig Bolt|M10").unwrap();
        assert_eq!(typo.edition(), "M10");
        assert_eq!(typo.rarity(), Rarity::Unknown);

        let nowhere = state.create_unsupported("Nothing").unwrap();
        assert_eq!(nowhere.edition(), UNKNOWN_EDITION_CODE);
        assert!(state.create_unsupported("").is_none());
    }

    #[test]
    fn test_get_card_or_placeholder() {
        let mut state = CatalogState::new(rules(), editions(), config());
        state.rebuild();

        let real = state.get_card_or_placeholder("Forest").unwrap();
        assert!(!real.is_unsupported());
        let fake = state.get_card_or_placeholder("Black Lotus").unwrap();
        assert!(fake.is_unsupported());

        let mut strict = CatalogState::new(rules(), editions(), config().with_placeholders(false));
        strict.rebuild();
        assert!(strict.get_card_or_placeholder("Black Lotus").is_none());
    }

    #[test]
    fn test_printings_in_edition_and_non_promo() {
        let mut state = CatalogState::new(rules(), editions(), config());
        state.rebuild();

        let m10: Vec<_> = state
            .printings_in_edition("m10")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(m10, vec!["Lightning Bolt".to_string(), "Forest".to_string()]);
        assert!(state.printings_in_edition("XYZ").is_empty());
        assert_eq!(state.non_promo_printings().len(), state.printings.printings().count());
    }

    #[test]
    fn test_set_art_preference_text() {
        let mut state = CatalogState::new(rules(), editions(), config());
        assert_eq!(state.set_art_preference("Old Art (All Editions)"), ArtPreference::OldArtAllEditions);
        assert_eq!(state.art_preference(), ArtPreference::OldArtAllEditions);
        assert_eq!(state.set_art_preference("garbage"), ArtPreference::LatestArtAllEditions);
    }

    #[test]
    fn test_rebuild_with_coverage_logging() {
        let cfg = config().with_coverage_logging();
        let mut state = CatalogState::new(rules(), editions(), cfg);
        let report = state.rebuild();

        // LEA lists Black Lotus without rules; M10 is complete.
        assert_eq!(report.missing, vec!["Black Lotus".to_string(), "Tomorrow Card".to_string()]);
        assert_eq!(state.all_printings("Forest").len(), 3);
        assert!((coverage_percent(4, 1) - 75.0).abs() < f64::EPSILON);
        assert!((coverage_percent(3, 0) - 100.0).abs() < f64::EPSILON);
        assert!((coverage_percent(0, 0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_alt_views_by_edition_kind() {
        let delver = RuleDefinition::new("Delver of Secrets").with_other(
            CardFace::new("Insectile Aberration"),
            SplitKind::Transform,
        );
        let editions = Editions::new(vec![
            Edition::new("ISD", date(2011), EditionType::Expansion)
                .with_card(CardInSet::new("Delver of Secrets", Rarity::Common)),
            Edition::new("A25", date(2018), EditionType::Reprint)
                .with_card(CardInSet::new("Delver of Secrets", Rarity::Common)),
            Edition::new("PRM", date(2019), EditionType::Promo)
                .with_card(CardInSet::new("Delver of Secrets", Rarity::Special)),
        ])
        .unwrap();
        let mut state = CatalogState::new(vec![delver], editions, config());
        state.rebuild();

        let regular: Vec<_> = state
            .non_promo_non_reprint_printings_no_alt()
            .iter()
            .map(|p| p.edition().to_string())
            .collect();
        assert_eq!(regular, vec!["ISD".to_string()]);

        let commons = state.all_printings_no_alt_matching(|p| p.rarity() == Rarity::Common);
        assert_eq!(commons.len(), 2);
        assert_eq!(state.all_printings_matching(|p| p.rarity() == Rarity::Common).len(), 4);
    }
}
