//! Printed rarity of a card within an edition.

use serde::{Deserialize, Serialize};

/// Rarity a card was printed at.
///
/// Rarity belongs to a printing, not to the card: the same card can be
/// common in one edition and rare in another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(alias = "C")]
    Common,
    #[serde(alias = "U")]
    Uncommon,
    #[serde(alias = "R")]
    Rare,
    #[serde(alias = "M")]
    MythicRare,
    /// Timeshifted, promotional and other off-sheet printings.
    #[serde(alias = "S")]
    Special,
    #[serde(alias = "L")]
    BasicLand,
    #[serde(alias = "T")]
    Token,
    #[default]
    Unknown,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::MythicRare => "Mythic Rare",
            Rarity::Special => "Special",
            Rarity::BasicLand => "Basic Land",
            Rarity::Token => "Token",
            Rarity::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
