//! Card request codec.
//!
//! Decks and effect scripts refer to printings with a compact string:
//!
//! ```text
//! Name[+]|Set|ArtIndex|[CollectorNumber]
//! ```
//!
//! Trailing fields are optional and inferred by shape: a bracketed field is
//! a collector number, an all-digit field is an art index, anything else in
//! the set position is an edition code. A `+` right after the name asks for the
//! foil variant. The format is persisted, so it must stay stable.

use serde::{Deserialize, Serialize};

use crate::cards::{DEFAULT_ART_INDEX, UNKNOWN_EDITION_CODE};

/// Field separator. Never legal inside a card name.
pub const SEPARATOR: char = '|';

/// Suffix on the card name marking a foil request.
pub const FOIL_SUFFIX: char = '+';

/// A parsed card request.
///
/// Exists only for the duration of one lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequest {
    pub card_name: String,
    pub edition: Option<String>,
    /// `None` = unspecified. Defaults to `DEFAULT_ART_INDEX` when no
    /// collector number was given either.
    pub art_index: Option<u32>,
    pub collector_number: Option<String>,
    pub foil: bool,
}

impl CardRequest {
    /// Request for a card by name, any edition, default art.
    ///
    /// A trailing `+` on the name marks the request as foil.
    #[must_use]
    pub fn named(card_name: &str) -> Self {
        let (card_name, foil) = match card_name.strip_suffix(FOIL_SUFFIX) {
            Some(name) => (name, true),
            None => (card_name, false),
        };
        Self {
            card_name: card_name.to_string(),
            edition: None,
            art_index: Some(DEFAULT_ART_INDEX),
            collector_number: None,
            foil,
        }
    }

    /// Restrict to one edition. The UNKNOWN code means no edition.
    #[must_use]
    pub fn with_edition(mut self, code: &str) -> Self {
        self.edition = Some(code.trim())
            .filter(|code| !code.is_empty() && *code != UNKNOWN_EDITION_CODE)
            .map(str::to_string);
        self
    }

    /// Ask for a specific art, clamped to the default index.
    #[must_use]
    pub fn with_art_index(mut self, art_index: u32) -> Self {
        self.art_index = Some(art_index.max(DEFAULT_ART_INDEX));
        self
    }

    /// Ask for a collector number instead of an art index.
    ///
    /// Clears the art index; call `with_art_index` afterwards to require
    /// both.
    #[must_use]
    pub fn with_collector_number(mut self, collector_number: &str) -> Self {
        let trimmed = collector_number.trim();
        let trimmed = trimmed.strip_prefix('[').unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);
        if !trimmed.is_empty() {
            self.art_index = None;
            self.collector_number = Some(trimmed.to_string());
        }
        self
    }

    /// Parse a request string.
    ///
    /// Returns `None` for empty input. Fields that fit no slot are ignored.
    ///
    /// ```
    /// use ccg_catalog::catalog::CardRequest;
    ///
    /// let req = CardRequest::parse("Lightning Bolt+|M10|2").unwrap();
    /// assert_eq!(req.card_name, "Lightning Bolt");
    /// assert_eq!(req.edition.as_deref(), Some("M10"));
    /// assert_eq!(req.art_index, Some(2));
    /// assert!(req.foil);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        let fields: Vec<&str> = input.split(SEPARATOR).collect();
        let (set, art, number) = match fields.len() {
            1 => (None, None, None),
            2 => (
                Some(fields[1]).filter(|f| is_set_code(f)),
                Some(fields[1]).filter(|f| is_art_index(f)),
                Some(fields[1]).filter(|f| is_collector_number(f)),
            ),
            3 => (
                Some(fields[1]).filter(|f| is_set_code(f)),
                Some(fields[2]).filter(|f| is_art_index(f)),
                Some(fields[2]).filter(|f| is_collector_number(f)),
            ),
            _ => (
                Some(fields[1]).filter(|f| is_set_code(f)),
                Some(fields[2]).filter(|f| is_art_index(f)),
                Some(fields[3]).filter(|f| is_collector_number(f)),
            ),
        };

        let (card_name, foil) = match fields[0].strip_suffix(FOIL_SUFFIX) {
            Some(name) => (name.to_string(), true),
            None => (fields[0].to_string(), false),
        };

        let edition = set
            .filter(|code| *code != UNKNOWN_EDITION_CODE)
            .map(str::to_string);
        let collector_number = number
            .map(|field| field[1..field.len() - 1].to_string())
            .filter(|n| !n.is_empty());
        let mut art_index = art.and_then(|field| field.parse().ok());
        if art_index.is_none() && collector_number.is_none() {
            art_index = Some(DEFAULT_ART_INDEX);
        }

        Some(Self {
            card_name,
            edition,
            art_index,
            collector_number,
            foil,
        })
    }

    /// `name|set`
    #[must_use]
    pub fn compose(card_name: &str, set_code: Option<&str>) -> String {
        format!("{}{}{}", card_name, SEPARATOR, set_code.unwrap_or(""))
    }

    /// `name|set|art`, with the art index clamped to the default index.
    #[must_use]
    pub fn compose_with_art(card_name: &str, set_code: Option<&str>, art_index: u32) -> String {
        format!(
            "{}{}{}",
            Self::compose(card_name, set_code),
            SEPARATOR,
            art_index.max(DEFAULT_ART_INDEX)
        )
    }

    /// `name|set|[number]`
    #[must_use]
    pub fn compose_with_collector(
        card_name: &str,
        set_code: Option<&str>,
        collector_number: &str,
    ) -> String {
        format!(
            "{}{}{}",
            Self::compose(card_name, set_code),
            SEPARATOR,
            bracket(collector_number)
        )
    }

    /// `name|set|art|[number]`
    #[must_use]
    pub fn compose_full(
        card_name: &str,
        set_code: Option<&str>,
        art_index: u32,
        collector_number: &str,
    ) -> String {
        format!(
            "{}{}{}",
            Self::compose_with_art(card_name, set_code, art_index),
            SEPARATOR,
            bracket(collector_number)
        )
    }
}

fn bracket(collector_number: &str) -> String {
    let trimmed = collector_number.trim();
    let mut out = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('[') {
        out.push('[');
    }
    out.push_str(trimmed);
    if !trimmed.ends_with(']') {
        out.push(']');
    }
    out
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

fn is_collector_number(field: &str) -> bool {
    field.len() >= 2 && field.starts_with('[') && field.ends_with(']')
}

fn is_art_index(field: &str) -> bool {
    is_numeric(field)
}

fn is_set_code(field: &str) -> bool {
    !field.is_empty() && !is_numeric(field) && !is_collector_number(field)
}
