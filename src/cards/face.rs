//! Face registry: resolves face and alternate names to card faces.
//!
//! Multi-faced cards are reachable by any of their face names. Faces can
//! also carry an alternate printed name, which maps back to the face's
//! primary name before any catalog lookup.

use rustc_hash::FxHashMap;

use super::key::NameKey;
use super::rules::{CardFace, RuleDefinition};

/// Name → face index plus alternate-name → primary-name aliases.
#[derive(Clone, Debug, Default)]
pub struct FaceRegistry {
    faces: FxHashMap<NameKey, CardFace>,
    alternate_names: FxHashMap<NameKey, String>,
}

impl FaceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every face of a rule definition.
    pub fn register(&mut self, rules: &RuleDefinition) {
        self.insert_face(&rules.main);
        if let Some(other) = &rules.other {
            self.insert_face(other);
        }
    }

    fn insert_face(&mut self, face: &CardFace) {
        self.faces.insert(NameKey::new(&face.name), face.clone());
        if let Some(alt) = &face.alt_name {
            self.alternate_names
                .insert(NameKey::new(alt), face.name.clone());
        }
    }

    /// Map an alternate name to its primary name; other names pass through.
    #[must_use]
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.alternate_names
            .get(&NameKey::new(name))
            .map_or(name, String::as_str)
    }

    /// Look up a face by face name or alternate name.
    #[must_use]
    pub fn face(&self, name: &str) -> Option<&CardFace> {
        self.faces.get(&NameKey::new(self.canonical_name(name)))
    }

    /// All registered faces, in no particular order.
    pub fn faces(&self) -> impl Iterator<Item = &CardFace> {
        self.faces.values()
    }

    /// Number of registered faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
