//! Catalog configuration.
//!
//! Hosts configure the catalog at startup with a `CatalogConfig`:
//! - Which card names are excluded from the catalog
//! - Whether unplaced rules land in the synthetic UNKNOWN edition
//! - Whether unknown names produce unsupported placeholder printings
//! - The initial art preference policy
//! - Coverage diagnostics emitted during a full rebuild

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::CatalogResult;
use crate::catalog::ArtPreference;

/// Configuration for a card catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Card names kept out of the catalog (case-insensitive).
    pub excluded_cards: Vec<String>,

    /// Place rules that no edition prints into the UNKNOWN edition.
    /// When false such rules stay out of the catalog after a rebuild.
    pub enable_unknown_cards: bool,

    /// Produce flag-marked placeholder printings for unregistered names.
    pub unsupported_placeholders: bool,

    /// Policy used when a request names no edition.
    pub art_preference: ArtPreference,

    /// Log per-edition coverage during a rebuild.
    pub log_missing_per_edition: bool,

    /// Log one summary of all unimplemented cards after a rebuild.
    pub log_missing_summary: bool,

    /// Date used to detect upcoming editions. `None` means the local date.
    pub today: Option<NaiveDate>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            excluded_cards: Vec::new(),
            enable_unknown_cards: true,
            unsupported_placeholders: true,
            art_preference: ArtPreference::default(),
            log_missing_per_edition: false,
            log_missing_summary: false,
            today: None,
        }
    }
}

impl CatalogConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Exclude a card name.
    #[must_use]
    pub fn with_excluded(mut self, name: impl Into<String>) -> Self {
        self.excluded_cards.push(name.into());
        self
    }

    /// Enable or disable the UNKNOWN edition fallback.
    #[must_use]
    pub fn with_unknown_cards(mut self, enabled: bool) -> Self {
        self.enable_unknown_cards = enabled;
        self
    }

    /// Enable or disable unsupported placeholder printings.
    #[must_use]
    pub fn with_placeholders(mut self, enabled: bool) -> Self {
        self.unsupported_placeholders = enabled;
        self
    }

    /// Set the initial art preference.
    #[must_use]
    pub fn with_art_preference(mut self, preference: ArtPreference) -> Self {
        self.art_preference = preference;
        self
    }

    /// Turn on both coverage diagnostics.
    #[must_use]
    pub fn with_coverage_logging(mut self) -> Self {
        self.log_missing_per_edition = true;
        self.log_missing_summary = true;
        self
    }

    /// Pin the date used to detect upcoming editions.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The date used to detect upcoming editions.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
