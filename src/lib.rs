//! # ccg-catalog
//!
//! An in-memory catalog of collectible card printings.
//!
//! ## Design Principles
//!
//! 1. **One Rule Object Per Card**: Printings share a `RuleRef`. Updating a
//!    card's rules never touches its printings.
//!
//! 2. **Requests Are Strings**: `Name[+]|Set|ArtIndex|[CollectorNumber]`
//!    round-trips through `CardRequest`.
//!
//! 3. **Readers Never Block Readers**: `Catalog` is a `parking_lot::RwLock`
//!    around `CatalogState`; printing lists are `im::Vector` snapshots.
//!
//! ## Modules
//!
//! - `core`: Configuration and error types
//! - `cards`: Rules, faces, editions, printings, rarities
//! - `catalog`: Request codec, indices, resolution, editing, predicates

pub mod core;
pub mod cards;
pub mod catalog;

// Re-export commonly used types
pub use crate::core::{CatalogConfig, CatalogError, CatalogResult};

pub use crate::cards::{
    CardFace, CardInSet, Edition, EditionType, Editions, EveryImage, ImageSource, NameKey,
    NoImages, Printing, Rarity, RuleDefinition, RuleRef, SplitKind, DEFAULT_ART_INDEX,
    UNKNOWN_EDITION_CODE,
};

pub use crate::catalog::{
    ArtPreference, CardRequest, Catalog, CatalogBatch, CatalogState, EditionMembership,
    RarityMembership, RebuildReport,
};
