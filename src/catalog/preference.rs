//! Art preference policies.
//!
//! When a request names no edition, the catalog walks the card's editions in
//! an order chosen by the active `ArtPreference` and returns the first
//! printing that has an image.

use serde::{Deserialize, Serialize};

use crate::cards::Edition;

/// Which printing represents a card when no edition is requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtPreference {
    #[default]
    LatestArtAllEditions,
    LatestArtExcludedPromoAndOnlineEditions,
    OldArtAllEditions,
    OldArtExcludedPromoAndOnlineEditions,
}

impl ArtPreference {
    /// All policies, in menu order.
    pub const ALL: [ArtPreference; 4] = [
        ArtPreference::LatestArtAllEditions,
        ArtPreference::LatestArtExcludedPromoAndOnlineEditions,
        ArtPreference::OldArtAllEditions,
        ArtPreference::OldArtExcludedPromoAndOnlineEditions,
    ];

    /// Only consider core, expansion and reprint editions.
    #[must_use]
    pub const fn filters_editions(self) -> bool {
        matches!(
            self,
            ArtPreference::LatestArtExcludedPromoAndOnlineEditions
                | ArtPreference::OldArtExcludedPromoAndOnlineEditions
        )
    }

    /// Walk editions newest first.
    #[must_use]
    pub const fn latest_first(self) -> bool {
        matches!(
            self,
            ArtPreference::LatestArtAllEditions
                | ArtPreference::LatestArtExcludedPromoAndOnlineEditions
        )
    }

    /// May printings from this edition represent the card?
    #[must_use]
    pub fn accepts(self, edition: &Edition) -> bool {
        !self.filters_editions() || edition.kind.is_regular()
    }

    /// Identifier form, matching the variant name.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ArtPreference::LatestArtAllEditions => "LatestArtAllEditions",
            ArtPreference::LatestArtExcludedPromoAndOnlineEditions => {
                "LatestArtExcludedPromoAndOnlineEditions"
            }
            ArtPreference::OldArtAllEditions => "OldArtAllEditions",
            ArtPreference::OldArtExcludedPromoAndOnlineEditions => {
                "OldArtExcludedPromoAndOnlineEditions"
            }
        }
    }

    /// Human-readable name shown in settings menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ArtPreference::LatestArtAllEditions => "Latest Art (All Editions)",
            ArtPreference::LatestArtExcludedPromoAndOnlineEditions => {
                "Latest Art (Excluded Promo And Online Editions)"
            }
            ArtPreference::OldArtAllEditions => "Old Art (All Editions)",
            ArtPreference::OldArtExcludedPromoAndOnlineEditions => {
                "Old Art (Excluded Promo And Online Editions)"
            }
        }
    }

    /// Parse a policy from free text.
    ///
    /// Whitespace and parentheses are ignored and case does not matter, so
    /// both the identifier and the display name are accepted. Anything else
    /// falls back to `LatestArtAllEditions`.
    #[must_use]
    pub fn from_lenient(text: &str) -> Self {
        let squashed: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect();
        Self::ALL
            .into_iter()
            .find(|pref| pref.id().eq_ignore_ascii_case(&squashed))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ArtPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
