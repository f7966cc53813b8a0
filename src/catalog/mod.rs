//! The printing catalog.
//!
//! Builds every printing from rule definitions and edition data, then
//! answers requests like `"Lightning Bolt+|M10|1"` with one concrete
//! printing.
//!
//! ## Key Types
//!
//! - `CatalogState`: Unsynchronized catalog (indices, rebuild, queries)
//! - `Catalog`: `CatalogState` behind a reader/writer lock
//! - `CardRequest`: Parsed request string
//! - `ArtPreference`: Which printing represents a card when no edition is named
//! - `CatalogBatch`: Many puts, one reindex
//!
//! ## Lookup Flow
//!
//! ```text
//! request string ─▶ CardRequest::parse ─▶ edition named?
//!                                          ├─ yes: exact-edition match
//!                                          └─ no:  pinned art, else walk
//!                                                  editions by preference
//! ```

pub mod art;
pub mod editor;
pub mod exclusion;
pub mod index;
pub mod predicate;
pub mod preference;
pub mod request;
pub mod resolve;
pub mod shared;
pub mod state;

pub use art::ArtIndexAllocator;
pub use editor::CatalogBatch;
pub use exclusion::ExclusionList;
pub use index::{PrintingIndex, UniqueProjection};
pub use predicate::{EditionMembership, RarityMembership};
pub use preference::ArtPreference;
pub use request::CardRequest;
pub use shared::Catalog;
pub use state::{CatalogState, RebuildReport};
