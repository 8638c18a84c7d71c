//! Serialisable filter preset for named filter configurations.
//!
//! [`FilterPreset`] captures the user-visible subset of
//! [`super::filter::FilterState`] and is serialised/deserialised via `serde`
//! for persistent storage by the presentation layer.

use super::filter::FilterState;
use crate::core::event::{EventStatus, Severity};

/// A named, serialisable snapshot of the user-visible filter fields.
///
/// Unlike [`FilterState`], this omits derived caches (`search_text_lower`,
/// the compiled regex) which are recomputed when the preset is loaded.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FilterPreset {
    /// Display name shown in the preset list.
    pub name: String,
    /// Free-form text search.
    pub search_text: String,
    /// Severity to show. `None` = all.
    pub severity: Option<Severity>,
    /// Status to show. `None` = all.
    pub status: Option<EventStatus>,
    /// Exact-match source filter. `None` = all.
    pub source: Option<String>,
    /// Case-sensitive search flag.
    pub case_sensitive: bool,
    /// Whether text search uses regex instead of substring matching.
    pub use_regex: bool,
}

impl FilterPreset {
    /// Create a preset from the current [`FilterState`].
    pub fn from_state(name: &str, state: &FilterState) -> Self {
        Self {
            name: name.to_owned(),
            search_text: state.search_text.clone(),
            severity: state.severity,
            status: state.status,
            source: state.source.clone(),
            case_sensitive: state.case_sensitive,
            use_regex: state.use_regex,
        }
    }

    /// Convert this preset into a fully-cached [`FilterState`].
    pub fn to_filter_state(&self) -> FilterState {
        let mut state = FilterState {
            search_text: self.search_text.clone(),
            severity: self.severity,
            status: self.status,
            source: self.source.clone(),
            case_sensitive: self.case_sensitive,
            use_regex: self.use_regex,
            ..FilterState::default()
        };
        state.update_search_cache();
        state
    }
}
