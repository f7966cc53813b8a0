//! Card data model: rules, faces, editions, printings.
//!
//! ## Key Types
//!
//! - `RuleDefinition`: Intrinsic rules of a card, shared through `RuleRef`
//! - `CardFace` / `FaceRegistry`: Face names and alternate-name aliases
//! - `Edition` / `Editions`: Dated, classified sets and their card lists
//! - `Printing`: One concrete printing (edition, art, collector number, foil)
//! - `NameKey`: Case-insensitive key used by every index
//!
//! ## Shared Rules
//!
//! Many printings, one rule object. Re-registering a card mutates the shared
//! definition in place instead of reallocating printings.

pub mod edition;
pub mod face;
pub mod key;
pub mod printing;
pub mod rarity;
pub mod rules;

pub use edition::{CardInSet, Edition, EditionType, Editions, UNKNOWN_EDITION_CODE};
pub use face::FaceRegistry;
pub use key::NameKey;
pub use printing::{EveryImage, ImageSource, NoImages, Printing, DEFAULT_ART_INDEX};
pub use rarity::Rarity;
pub use rules::{CardFace, RuleDefinition, RuleRef, SplitKind};
