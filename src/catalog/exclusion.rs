//! Excluded card names.
//!
//! Hosts can keep cards out of the catalog by name. One (name, edition)
//! pair is special-cased: when that name is on the list it stays in the
//! catalog everywhere except in that one edition.

use rustc_hash::FxHashSet;

use crate::cards::NameKey;

/// Name of the carve-out card.
pub const CARVE_OUT_NAME: &str = "Concentrate";

/// Edition the carve-out card is excluded from.
pub const CARVE_OUT_EDITION: &str = "DS0";

/// Set of excluded card names (case-insensitive).
#[derive(Clone, Debug, Default)]
pub struct ExclusionList {
    names: FxHashSet<NameKey>,
}

impl ExclusionList {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| NameKey::new(n.as_ref())).collect(),
        }
    }

    /// Is the name on the list at all?
    #[must_use]
    pub fn lists(&self, name: &str) -> bool {
        self.names.contains(&NameKey::new(name))
    }

    /// Should a printing of `name` in `edition` stay out of the catalog?
    #[must_use]
    pub fn excludes(&self, name: &str, edition: &str) -> bool {
        if !self.lists(name) {
            return false;
        }
        if is_carve_out(name) {
            return edition.eq_ignore_ascii_case(CARVE_OUT_EDITION);
        }
        true
    }

    /// Should the faces of `name` stay out of the face registry?
    #[must_use]
    pub fn excludes_faces(&self, name: &str) -> bool {
        self.lists(name) && !is_carve_out(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn is_carve_out(name: &str) -> bool {
    NameKey::new(name) == NameKey::new(CARVE_OUT_NAME)
}
