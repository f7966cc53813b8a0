//! Printing index and unique projection.
//!
//! `PrintingIndex` maps every card name key to the ordered list of its
//! printings. Multi-faced cards are also listed under their other face
//! names, so any face name finds the whole card. `UniqueProjection` keeps
//! one representative printing per key and is rebuilt wholesale.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::exclusion::ExclusionList;
use crate::cards::{NameKey, Printing, SplitKind};

/// First printing that has an image, else the first printing.
pub fn first_with_image<'a, I>(printings: I) -> Option<&'a Printing>
where
    I: IntoIterator<Item = &'a Printing>,
{
    let mut first = None;
    for printing in printings {
        if printing.has_image() {
            return Some(printing);
        }
        first.get_or_insert(printing);
    }
    first
}

/// Name key → printings, in insertion order.
///
/// Lists are `im::Vector`s: handing one out is an O(1) clone that stays
/// valid after the index changes.
#[derive(Clone, Debug, Default)]
pub struct PrintingIndex {
    by_name: FxHashMap<NameKey, Vector<Printing>>,
}

impl PrintingIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys a printing is listed under: its own name, then for multi-faced
    /// cards the other face name, then for split cards the main face name.
    fn keys_for(printing: &Printing) -> SmallVec<[NameKey; 3]> {
        let mut keys: SmallVec<[NameKey; 3]> = SmallVec::new();
        keys.push(NameKey::new(printing.name()));

        let rules = printing.rules().read();
        if rules.split != SplitKind::None {
            if let Some(other) = &rules.other {
                keys.push(NameKey::new(&other.name));
            }
            if rules.split == SplitKind::Split {
                keys.push(NameKey::new(&rules.main.name));
            }
        }
        drop(rules);

        let mut unique: SmallVec<[NameKey; 3]> = SmallVec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        unique
    }

    /// Insert a printing unless the exclusion list rejects it.
    ///
    /// Returns whether the printing was added.
    pub fn add_printing(&mut self, printing: Printing, exclusions: &ExclusionList) -> bool {
        if exclusions.excludes(printing.name(), printing.edition()) {
            return false;
        }
        for key in Self::keys_for(&printing) {
            self.by_name
                .entry(key)
                .or_default()
                .push_back(printing.clone());
        }
        true
    }

    /// Printings listed under a key.
    #[must_use]
    pub fn get(&self, key: &NameKey) -> Option<&Vector<Printing>> {
        self.by_name.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &NameKey) -> bool {
        self.by_name.contains_key(key)
    }

    /// Every (key, printings) pair, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&NameKey, &Vector<Printing>)> {
        self.by_name.iter()
    }

    /// Every listed printing. Multi-faced cards appear once per key.
    pub fn printings(&self) -> impl Iterator<Item = &Printing> {
        self.by_name.values().flatten()
    }

    /// Every printing listed under its own name only.
    pub fn printings_no_alt(&self) -> impl Iterator<Item = &Printing> {
        self.by_name.iter().flat_map(|(key, list)| {
            list.iter()
                .filter(move |p| NameKey::new(p.name()) == *key)
        })
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_name.clear();
    }
}

/// One representative printing per name key.
#[derive(Clone, Debug, Default)]
pub struct UniqueProjection {
    by_name: FxHashMap<NameKey, Printing>,
}

impl UniqueProjection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every entry from the index.
    pub fn rebuild(&mut self, index: &PrintingIndex) {
        self.by_name.clear();
        for (key, printings) in index.entries() {
            if let Some(printing) = first_with_image(printings) {
                self.by_name.insert(key.clone(), printing.clone());
            }
        }
    }

    /// Force the representative for one key.
    pub fn pin(&mut self, key: NameKey, printing: Printing) {
        self.by_name.insert(key, printing);
    }

    #[must_use]
    pub fn get(&self, key: &NameKey) -> Option<&Printing> {
        self.by_name.get(key)
    }

    /// Entries sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&NameKey, &Printing)> {
        let mut entries: Vec<_> = self.by_name.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFace, Rarity, RuleDefinition, RuleRef};

    fn printing(rules: &RuleRef, edition: &str, art: u32, image: bool) -> Printing {
        Printing::new(rules.clone(), edition, Rarity::Common, art, None, image)
    }

    #[test]
    fn test_first_with_image() {
        let rules = RuleRef::new(RuleDefinition::new("Forest"));
        let list = vec![
            printing(&rules, "LEA", 1, false),
            printing(&rules, "LEB", 1, true),
            printing(&rules, "M10", 1, true),
        ];
        assert_eq!(first_with_image(&list).map(Printing::edition), Some("LEB"));

        let none = vec![printing(&rules, "LEA", 1, false), printing(&rules, "LEB", 1, false)];
        assert_eq!(first_with_image(&none).map(Printing::edition), Some("LEA"));

        assert!(first_with_image(&Vec::new()).is_none());
    }

    #[test]
    fn test_add_preserves_order() {
        let rules = RuleRef::new(RuleDefinition::new("Forest"));
        let mut index = PrintingIndex::new();
        let excl = ExclusionList::default();

        index.add_printing(printing(&rules, "M10", 1, true), &excl);
        index.add_printing(printing(&rules, "M10", 2, true), &excl);
        index.add_printing(printing(&rules, "LEA", 1, true), &excl);

        let list = index.get(&NameKey::new("forest")).unwrap();
        let arts: Vec<_> = list.iter().map(|p| (p.edition(), p.art_index())).collect();
        assert_eq!(arts, vec![("M10", 1), ("M10", 2), ("LEA", 1)]);
    }

    #[test]
    fn test_transform_indexed_under_other_face() {
        let rules = RuleRef::new(RuleDefinition::new("Delver of Secrets").with_other(
            CardFace::new("Insectile Aberration"),
            SplitKind::Transform,
        ));
        let mut index = PrintingIndex::new();
        index.add_printing(printing(&rules, "ISD", 1, true), &ExclusionList::default());

        assert_eq!(index.len(), 2);
        assert!(index.contains_key(&NameKey::new("Insectile Aberration")));
        assert_eq!(index.printings().count(), 2);
        assert_eq!(index.printings_no_alt().count(), 1);
    }

    #[test]
    fn test_split_indexed_under_both_halves() {
        let rules = RuleRef::new(
            RuleDefinition::new("Fire // Ice")
                .with_main(CardFace::new("Fire"))
                .with_other(CardFace::new("Ice"), SplitKind::Split),
        );
        let mut index = PrintingIndex::new();
        index.add_printing(printing(&rules, "APC", 1, true), &ExclusionList::default());

        assert_eq!(index.len(), 3);
        for name in ["Fire // Ice", "Fire", "Ice"] {
            assert_eq!(index.get(&NameKey::new(name)).map(Vector::len), Some(1));
        }
    }

    #[test]
    fn test_other_face_ignored_without_split_kind() {
        let mut rules = RuleDefinition::new("Odd Card");
        rules.other = Some(CardFace::new("Other Half"));
        let rules = RuleRef::new(rules);

        let mut index = PrintingIndex::new();
        index.add_printing(printing(&rules, "UNH", 1, true), &ExclusionList::default());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_excluded_not_added() {
        let rules = RuleRef::new(RuleDefinition::new("Chaos Orb"));
        let mut index = PrintingIndex::new();
        let added = index.add_printing(printing(&rules, "LEA", 1, true), &ExclusionList::new(["Chaos Orb"]));

        assert!(!added);
        assert!(index.is_empty());
    }

    #[test]
    fn test_projection_one_per_key() {
        let forest = RuleRef::new(RuleDefinition::new("Forest"));
        let island = RuleRef::new(RuleDefinition::new("Island"));
        let mut index = PrintingIndex::new();
        let excl = ExclusionList::default();
        index.add_printing(printing(&forest, "LEA", 1, false), &excl);
        index.add_printing(printing(&forest, "M10", 1, true), &excl);
        index.add_printing(printing(&island, "LEA", 1, false), &excl);

        let mut projection = UniqueProjection::new();
        projection.rebuild(&index);

        assert_eq!(projection.len(), index.len());
        assert_eq!(projection.get(&NameKey::new("Forest")).map(Printing::edition), Some("M10"));
        assert_eq!(projection.get(&NameKey::new("Island")).map(Printing::edition), Some("LEA"));

        let keys: Vec<_> = projection.sorted().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["forest", "island"]);
    }

    #[test]
    fn test_pin_overrides() {
        let forest = RuleRef::new(RuleDefinition::new("Forest"));
        let mut projection = UniqueProjection::new();
        projection.pin(NameKey::new("Forest"), printing(&forest, "LEA", 3, false));
        assert_eq!(projection.get(&NameKey::new("forest")).map(Printing::art_index), Some(3));
    }
}
