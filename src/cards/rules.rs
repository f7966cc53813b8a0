//! Rule definitions - the intrinsic rules of a card.
//!
//! A `RuleDefinition` holds everything about a card that does not depend on
//! where it was printed: faces, cost, type line, rules text. Every printing
//! of a card shares one definition through a `RuleRef`, so re-registering a
//! card updates all of its printings at once.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

/// How the faces of a multi-faced card relate to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitKind {
    /// Single-faced card.
    #[default]
    None,
    /// Two halves printed side by side; either half name finds the card.
    Split,
    /// Double-faced card that transforms.
    Transform,
    /// Upside-down second half.
    Flip,
    /// Creature with an adventure spell.
    Adventure,
    /// Modal double-faced card.
    Modal,
    /// Half of a meld pair.
    Meld,
}

/// One named face of a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Face name.
    pub name: String,

    /// Alternate printed name that should resolve to this face.
    #[serde(default)]
    pub alt_name: Option<String>,

    /// Mana cost of this face.
    #[serde(default)]
    pub cost: String,

    /// Type line of this face.
    #[serde(default)]
    pub type_line: String,

    /// Rules text of this face.
    #[serde(default)]
    pub text: String,
}

impl CardFace {
    /// Create a face with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the alternate name (builder pattern).
    #[must_use]
    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = Some(alt_name.into());
        self
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = cost.into();
        self
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    /// Set the rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Intrinsic rules of a card.
///
/// ## Example
///
/// ```
/// use ccg_catalog::cards::{CardFace, RuleDefinition, SplitKind};
///
/// let fire_ice = RuleDefinition::new("Fire // Ice")
///     .with_main(CardFace::new("Fire").with_cost("{1}{R}"))
///     .with_other(CardFace::new("Ice").with_cost("{1}{U}"), SplitKind::Split);
///
/// assert_eq!(fire_ice.face_names(), vec!["Fire", "Ice"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Canonical card name. Printings are registered under this name.
    pub name: String,

    /// Main (front) face.
    pub main: CardFace,

    /// Other face for multi-faced cards.
    #[serde(default)]
    pub other: Option<CardFace>,

    /// Relationship between the faces.
    #[serde(default)]
    pub split: SplitKind,

    /// Marks a placeholder for a card the rules source does not implement.
    #[serde(default)]
    pub unsupported: bool,
}

impl RuleDefinition {
    /// Create a single-faced definition whose main face shares the card name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            main: CardFace::new(name.clone()),
            name,
            other: None,
            split: SplitKind::None,
            unsupported: false,
        }
    }

    /// Placeholder rules for a card nobody has implemented.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        let mut rules = Self::new(name);
        rules.main.text = "This card is not supported yet.".to_string();
        rules.unsupported = true;
        rules
    }

    /// Replace the main face (builder pattern).
    #[must_use]
    pub fn with_main(mut self, main: CardFace) -> Self {
        self.main = main;
        self
    }

    /// Add the other face (builder pattern).
    #[must_use]
    pub fn with_other(mut self, other: CardFace, split: SplitKind) -> Self {
        self.other = Some(other);
        self.split = split;
        self
    }

    /// Set the main face's mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.main.cost = cost.into();
        self
    }

    /// Set the main face's type line (builder pattern).
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.main.type_line = type_line.into();
        self
    }

    /// Set the main face's rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.main.text = text.into();
        self
    }

    /// Names of all faces, main face first.
    #[must_use]
    pub fn face_names(&self) -> Vec<&str> {
        let mut names = vec![self.main.name.as_str()];
        if let Some(other) = &self.other {
            names.push(other.name.as_str());
        }
        names
    }

    /// Copy every field except the name from `source`.
    ///
    /// Used when a card is re-registered: the definition object stays the
    /// same so printings that share it pick up the change.
    pub fn reinitialize_from(&mut self, source: &RuleDefinition) {
        self.main = source.main.clone();
        self.other = source.other.clone();
        self.split = source.split;
        self.unsupported = source.unsupported;
    }
}

/// Shared handle to a rule definition.
///
/// Cloning the handle shares the definition; it never copies rule data.
#[derive(Clone, Debug)]
pub struct RuleRef(Arc<RwLock<RuleDefinition>>);

impl RuleRef {
    /// Wrap a definition in a new shared handle.
    #[must_use]
    pub fn new(rules: RuleDefinition) -> Self {
        Self(Arc::new(RwLock::new(rules)))
    }

    /// Borrow the definition for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, RuleDefinition> {
        self.0.read()
    }

    /// Canonical card name.
    #[must_use]
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Update the shared definition in place.
    pub fn reinitialize_from(&self, source: &RuleDefinition) {
        self.0.write().reinitialize_from(source);
    }

    /// Do both handles point at the same definition?
    #[must_use]
    pub fn ptr_eq(&self, other: &RuleRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<RuleDefinition> for RuleRef {
    fn from(rules: RuleDefinition) -> Self {
        Self::new(rules)
    }
}
