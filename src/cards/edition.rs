//! Editions (sets) and the ordered edition collection.
//!
//! Edition data comes from an external source. The catalog only reads it:
//! which cards an edition prints, at what rarity and collector number, and
//! when the edition was released.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::key::NameKey;
use super::rarity::Rarity;
use crate::core::{CatalogError, CatalogResult};

/// Code of the synthetic edition holding cards no real edition prints.
pub const UNKNOWN_EDITION_CODE: &str = "???";

/// Edition classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditionType {
    Core,
    Expansion,
    Reprint,
    Promo,
    #[default]
    Other,
}

impl EditionType {
    /// Core sets, expansions and reprint sets: the regular retail editions.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        matches!(self, EditionType::Core | EditionType::Expansion | EditionType::Reprint)
    }

    /// Core sets and expansions only.
    #[must_use]
    pub const fn is_core_or_expansion(self) -> bool {
        matches!(self, EditionType::Core | EditionType::Expansion)
    }
}

/// One entry of an edition's card list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInSet {
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub collector_number: Option<String>,
}

impl CardInSet {
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
            collector_number: None,
        }
    }

    #[must_use]
    pub fn numbered(mut self, collector_number: impl Into<String>) -> Self {
        self.collector_number = Some(collector_number.into());
        self
    }
}

/// A dated, classified set of printed cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Primary code (e.g. "M10").
    pub code: String,

    /// Secondary code some data sources use for the same edition.
    #[serde(default)]
    pub alias: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Release date.
    pub date: NaiveDate,

    /// Classification.
    #[serde(default, rename = "type")]
    pub kind: EditionType,

    /// Printed cards, in collector order.
    #[serde(default)]
    pub cards: Vec<CardInSet>,
}

impl Edition {
    /// Create an edition with no cards.
    pub fn new(code: impl Into<String>, date: NaiveDate, kind: EditionType) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            alias: None,
            date,
            kind,
            cards: Vec::new(),
        }
    }

    /// The synthetic UNKNOWN edition.
    #[must_use]
    pub fn unknown() -> Self {
        let mut edition = Self::new(UNKNOWN_EDITION_CODE, NaiveDate::MIN, EditionType::Other);
        edition.name = "Unknown".to_string();
        edition
    }

    /// Set the alias code (builder pattern).
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a card to the list (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardInSet) -> Self {
        self.cards.push(card);
        self
    }

    /// Does `code` name this edition by primary or alias code?
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.eq_ignore_ascii_case(code))
    }

    /// Entries printing the given card name (case-insensitive).
    pub fn cards_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CardInSet> + 'a {
        let key = NameKey::new(name);
        self.cards
            .iter()
            .filter(move |card| NameKey::new(&card.name) == key)
    }

    /// Is this the synthetic UNKNOWN edition?
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_EDITION_CODE
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Editions ordered by release date, looked up by primary or alias code.
///
/// ## Example
///
/// ```
/// use ccg_catalog::cards::{Edition, EditionType, Editions};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(1994, 4, 1).unwrap();
/// let editions = Editions::new(vec![
///     Edition::new("LEG", date, EditionType::Expansion).with_alias("LE"),
/// ]).unwrap();
///
/// assert_eq!(editions.get("le").map(|e| e.code.as_str()), Some("LEG"));
/// assert!(editions.get("???").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Editions {
    ordered: Vec<Edition>,
    by_code: FxHashMap<NameKey, usize>,
    unknown: Edition,
}

impl Default for Editions {
    fn default() -> Self {
        Self {
            ordered: Vec::new(),
            by_code: FxHashMap::default(),
            unknown: Edition::unknown(),
        }
    }
}

impl Editions {
    /// Build a collection, rejecting codes used by more than one edition.
    pub fn new(editions: impl IntoIterator<Item = Edition>) -> CatalogResult<Self> {
        let mut ordered: Vec<Edition> = editions.into_iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.code.cmp(&b.code)));

        let mut by_code = FxHashMap::default();
        for (idx, edition) in ordered.iter().enumerate() {
            let codes = std::iter::once(edition.code.as_str()).chain(edition.alias.as_deref());
            for code in codes {
                if by_code.insert(NameKey::new(code), idx).is_some() {
                    return Err(CatalogError::DuplicateEdition(code.to_string()));
                }
            }
        }

        Ok(Self {
            ordered,
            by_code,
            unknown: Edition::unknown(),
        })
    }

    /// Load editions from a JSON array.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let editions: Vec<Edition> = serde_json::from_str(json)?;
        Self::new(editions)
    }

    /// Encode the editions as a compact binary snapshot.
    pub fn to_snapshot(&self) -> CatalogResult<Vec<u8>> {
        Ok(bincode::serialize(&self.ordered)?)
    }

    /// Decode a snapshot produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> CatalogResult<Self> {
        let editions: Vec<Edition> = bincode::deserialize(bytes)?;
        Self::new(editions)
    }

    /// Look up an edition by primary or alias code (case-insensitive).
    ///
    /// The UNKNOWN edition is always found by its code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Edition> {
        match self.by_code.get(&NameKey::new(code)) {
            Some(&idx) => Some(&self.ordered[idx]),
            None if code.trim() == UNKNOWN_EDITION_CODE => Some(&self.unknown),
            None => None,
        }
    }

    /// The synthetic UNKNOWN edition.
    #[must_use]
    pub fn unknown(&self) -> &Edition {
        &self.unknown
    }

    /// Editions oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Edition> {
        self.ordered.iter()
    }

    /// Number of real editions (UNKNOWN excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
