//! Printings - concrete physical versions of a card.
//!
//! A `Printing` pins a card to one edition, one art and one collector
//! number, optionally foil. The rules are shared with every other printing
//! of the card through a `RuleRef`.

use std::hash::{Hash, Hasher};

use super::rarity::Rarity;
use super::rules::RuleRef;

/// Art index of the first (default) art of a card within an edition.
pub const DEFAULT_ART_INDEX: u32 = 1;

/// Reports whether an image asset exists for a printing.
///
/// The catalog only consumes the yes/no answer. Implemented for closures
/// taking `(card name, edition code, art index)`.
pub trait ImageSource: Send + Sync {
    fn has_image(&self, name: &str, edition: &str, art_index: u32) -> bool;
}

impl<F> ImageSource for F
where
    F: Fn(&str, &str, u32) -> bool + Send + Sync,
{
    fn has_image(&self, name: &str, edition: &str, art_index: u32) -> bool {
        self(name, edition, art_index)
    }
}

/// Every printing has an image.
#[derive(Clone, Copy, Debug, Default)]
pub struct EveryImage;

impl ImageSource for EveryImage {
    fn has_image(&self, _name: &str, _edition: &str, _art_index: u32) -> bool {
        true
    }
}

/// No printing has an image.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn has_image(&self, _name: &str, _edition: &str, _art_index: u32) -> bool {
        false
    }
}

/// One concrete printing of a card.
///
/// Equality and hashing use the identity only: name, edition, art index,
/// collector number and foil flag.
#[derive(Clone, Debug)]
pub struct Printing {
    name: String,
    edition: String,
    art_index: u32,
    collector_number: Option<String>,
    foil: bool,
    rarity: Rarity,
    has_image: bool,
    rules: RuleRef,
}

impl Printing {
    /// Create a non-foil printing.
    ///
    /// Only the catalog creates printings during normal operation.
    #[must_use]
    pub fn new(
        rules: RuleRef,
        edition: impl Into<String>,
        rarity: Rarity,
        art_index: u32,
        collector_number: Option<String>,
        has_image: bool,
    ) -> Self {
        Self {
            name: rules.name(),
            edition: edition.into(),
            art_index,
            collector_number,
            foil: false,
            rarity,
            has_image,
            rules,
        }
    }

    /// The foil variant of this printing.
    #[must_use]
    pub fn foiled(&self) -> Self {
        Self {
            foil: true,
            ..self.clone()
        }
    }

    /// Canonical card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Primary code of the edition.
    #[must_use]
    pub fn edition(&self) -> &str {
        &self.edition
    }

    #[must_use]
    pub fn art_index(&self) -> u32 {
        self.art_index
    }

    #[must_use]
    pub fn collector_number(&self) -> Option<&str> {
        self.collector_number.as_deref()
    }

    #[must_use]
    pub fn is_foil(&self) -> bool {
        self.foil
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.has_image
    }

    /// Shared rule definition.
    #[must_use]
    pub fn rules(&self) -> &RuleRef {
        &self.rules
    }

    /// Is this a placeholder for an unimplemented card?
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        self.rules.read().unsupported
    }

    fn identity(&self) -> (&str, &str, u32, Option<&str>, bool) {
        (
            &self.name,
            &self.edition,
            self.art_index,
            self.collector_number.as_deref(),
            self.foil,
        )
    }
}

impl PartialEq for Printing {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Printing {}

impl Hash for Printing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl std::fmt::Display for Printing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.foil {
            write!(f, " (foil)")?;
        }
        write!(f, " [{} #{}]", self.edition, self.art_index)
    }
}
