//! In-memory filtering logic for NetSentry feeds.
//!
//! The [`FilterState`] struct holds all user-configurable filter criteria.
//! Filtering is performed in-memory against a feed snapshot, with checks
//! ordered cheapest-first for short-circuit efficiency. `apply` is a pure
//! function of its inputs: same events and same criteria always produce the
//! same output, in input order.

use regex::RegexBuilder;

use crate::core::event::{Event, EventStatus, Severity};

/// Holds all active filter criteria.
///
/// All fields default to "pass all" so that an empty `FilterState` matches
/// every event. A `None` on an enumerated dimension means "do not filter on
/// this dimension", mirroring the dashboard's `"all"` dropdown option.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-form text search — matched against the message and, when
    /// present, the details text. Absent details never match on their own.
    pub search_text: String,

    /// Pre-computed lowercase version of `search_text` for efficient
    /// case-insensitive matching. Updated by
    /// [`update_search_cache`](Self::update_search_cache).
    pub search_text_lower: String,

    /// Severity to show. `None` = all severities.
    pub severity: Option<Severity>,

    /// Status to show. `None` = all statuses.
    pub status: Option<EventStatus>,

    /// Exact-match source filter. `None` = all sources.
    pub source: Option<String>,

    /// Whether text search is case-sensitive.
    pub case_sensitive: bool,

    /// Whether text search uses regex instead of substring matching.
    pub use_regex: bool,

    /// Compiled regex for `search_text` when `use_regex` is set. `None`
    /// when regex search is off or the pattern is invalid; an invalid
    /// pattern deactivates the text criterion rather than erroring.
    /// Derived cache, kept public like the other caches so the struct can
    /// be built with record-update syntax.
    pub compiled_regex: Option<regex::Regex>,
}

impl FilterState {
    /// Refresh the caches derived from `search_text`.
    ///
    /// Call this after modifying `search_text`, `case_sensitive`, or
    /// `use_regex` to keep the lowercase cache and compiled regex in sync.
    pub fn update_search_cache(&mut self) {
        self.search_text_lower = self.search_text.to_lowercase();
        self.compiled_regex = if self.use_regex && !self.search_text.is_empty() {
            match RegexBuilder::new(&self.search_text)
                .case_insensitive(!self.case_sensitive)
                .build()
            {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::debug!("invalid filter regex, text criterion inactive: {e}");
                    None
                }
            }
        } else {
            None
        };
    }

    /// Test whether the given event matches **all** active filter criteria.
    ///
    /// Checks are ordered cheapest-first for short-circuit efficiency:
    /// 1. Severity (enum compare)
    /// 2. Status (enum compare)
    /// 3. Source (string compare)
    /// 4. Text search (most expensive)
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(severity) = self.severity {
            if event.severity != severity {
                return false;
            }
        }

        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }

        if let Some(source) = &self.source {
            if event.source != *source {
                return false;
            }
        }

        if !self.search_text.is_empty() && !self.text_matches(event) {
            return false;
        }

        true
    }

    /// Return the subsequence of `events` matching all active criteria,
    /// preserving input order. Empty input yields empty output.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect()
    }

    /// Text search over message and details.
    fn text_matches(&self, event: &Event) -> bool {
        if self.use_regex {
            // Invalid patterns leave no compiled regex; the criterion is
            // inactive and everything passes.
            let Some(re) = &self.compiled_regex else {
                return true;
            };
            return re.is_match(&event.message)
                || event.details.as_deref().is_some_and(|d| re.is_match(d));
        }

        if self.case_sensitive {
            let q = self.search_text.as_str();
            event.message.contains(q) || event.details.as_deref().is_some_and(|d| d.contains(q))
        } else {
            let q = self.search_text_lower.as_str();
            event.message.to_lowercase().contains(q)
                || event
                    .details
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(q))
        }
    }

    /// Returns `true` if all filters are at their default (pass-all) state.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.severity.is_none()
            && self.status.is_none()
            && self.source.is_none()
    }

    /// Reset all filters to their default (pass-all) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
