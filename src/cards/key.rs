//! Case-insensitive lookup keys for card names and edition codes.

use serde::{Deserialize, Serialize};

/// Normalized (lower-cased, trimmed) key used by every catalog index.
///
/// "Lightning Bolt", "lightning bolt" and " LIGHTNING BOLT" share one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Normalize a name into a key.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for NameKey {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for NameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
