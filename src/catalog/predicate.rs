//! Membership predicates over printings.
//!
//! Each predicate collects the matching card names once, then answers
//! `matches` with a single set lookup.

use rustc_hash::FxHashSet;

use super::state::CatalogState;
use crate::cards::{NameKey, Printing, Rarity};

/// Cards printed in at least one of a set of editions.
#[derive(Clone, Debug, Default)]
pub struct EditionMembership {
    editions: Vec<String>,
    names: FxHashSet<NameKey>,
}

impl EditionMembership {
    /// Is this printing's card printed in one of the editions?
    #[must_use]
    pub fn matches(&self, printing: &Printing) -> bool {
        self.names.contains(&NameKey::new(printing.name()))
    }

    /// Primary codes of the editions that were recognized.
    #[must_use]
    pub fn editions(&self) -> &[String] {
        &self.editions
    }

    /// Number of distinct card names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Cards with at least one printing at a rarity.
#[derive(Clone, Debug)]
pub struct RarityMembership {
    rarity: Rarity,
    names: FxHashSet<NameKey>,
}

impl RarityMembership {
    #[must_use]
    pub fn matches(&self, printing: &Printing) -> bool {
        self.names.contains(&NameKey::new(printing.name()))
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CatalogState {
    /// Predicate for cards printed in any of `codes`.
    ///
    /// Codes may be aliases; unknown codes are ignored.
    #[must_use]
    pub fn printed_in_editions(&self, codes: &[&str]) -> EditionMembership {
        let mut editions: Vec<String> = Vec::new();
        for code in codes {
            if let Some(edition) = self.editions.get(code) {
                if !editions.iter().any(|c| c.eq_ignore_ascii_case(&edition.code)) {
                    editions.push(edition.code.clone());
                }
            }
        }

        let names = self
            .printings
            .printings()
            .filter(|p| editions.iter().any(|c| c.eq_ignore_ascii_case(p.edition())))
            .map(|p| NameKey::new(p.name()))
            .collect();
        EditionMembership { editions, names }
    }

    /// Predicate for cards with a printing at `rarity`.
    #[must_use]
    pub fn printed_at_rarity(&self, rarity: Rarity) -> RarityMembership {
        let names = self
            .printings
            .printings()
            .filter(|p| p.rarity() == rarity)
            .map(|p| NameKey::new(p.name()))
            .collect();
        RarityMembership { rarity, names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInSet, Edition, EditionType, Editions, RuleDefinition};
    use crate::core::CatalogConfig;
    use chrono::NaiveDate;

    fn state() -> CatalogState {
        let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let editions = Editions::new(vec![
            Edition::new("LEA", date(1993), EditionType::Core)
                .with_alias("A")
                .with_card(CardInSet::new("Black Lotus", Rarity::Rare))
                .with_card(CardInSet::new("Lightning Bolt", Rarity::Common)),
            Edition::new("M10", date(2009), EditionType::Core)
                .with_card(CardInSet::new("Lightning Bolt", Rarity::Common))
                .with_card(CardInSet::new("Baneslayer Angel", Rarity::MythicRare)),
        ])
        .unwrap();
        let mut state = CatalogState::new(
            ["Black Lotus", "Lightning Bolt", "Baneslayer Angel"].map(RuleDefinition::new),
            editions,
            CatalogConfig::default().with_today(date(2020)),
        );
        state.rebuild();
        state
    }

    #[test]
    fn test_printed_in_editions() {
        let state = state();
        let lea = state.printed_in_editions(&["a", "XYZ"]);

        assert_eq!(lea.editions(), ["LEA".to_string()]);
        assert_eq!(lea.len(), 2);
        let angel = state.get_card("Baneslayer Angel").unwrap();
        let bolt = state.get_card_in("Lightning Bolt", "M10").unwrap();
        assert!(!lea.matches(&angel));
        // any printing of a member card matches
        assert!(lea.matches(&bolt));
    }

    #[test]
    fn test_printed_in_no_known_edition() {
        let state = state();
        let none = state.printed_in_editions(&["XYZ"]);
        assert!(none.is_empty());
        assert!(none.editions().is_empty());
    }

    #[test]
    fn test_printed_at_rarity() {
        let state = state();
        let mythics = state.printed_at_rarity(Rarity::MythicRare);

        assert_eq!(mythics.rarity(), Rarity::MythicRare);
        assert_eq!(mythics.len(), 1);
        assert!(mythics.matches(&state.get_card("Baneslayer Angel").unwrap()));
        assert!(!mythics.matches(&state.get_card("Black Lotus").unwrap()));
        assert!(state.printed_at_rarity(Rarity::Token).is_empty());
    }
}
