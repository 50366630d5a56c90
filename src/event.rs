//! Navigation lifecycle events and their causes.
//!
//! This module defines the raw input vocabulary of the history engine:
//!
//! - [`NavigationTrigger`] — what caused a navigation: an explicit
//!   (imperative) call, the browser's back/forward buttons (`popstate`), a
//!   URL-fragment change (`hashchange`), or nothing recorded yet.
//! - [`RestoredState`] — the navigation id the browser is returning to when
//!   a `popstate` navigation restores an earlier history entry.
//! - [`NavigationEvent`] — the two lifecycle points the engine consumes: a
//!   route change starting ([`Start`](NavigationEvent::Start)) and a route
//!   change completing ([`End`](NavigationEvent::End)).
//!
//! Events arrive in pairs in well-formed sequences: every `Start` records
//! the cause and ids, and the matching `End` carries the settled URL. A
//! `Start` with no matching `End` (an aborted navigation) is harmless — its
//! recorded fields are simply overwritten by the next `Start`.
//!
//! # Example
//!
//! ```
//! use router_history::{NavigationEvent, NavigationTrigger};
//!
//! let start = NavigationEvent::start(1, NavigationTrigger::Imperative);
//! assert!(start.is_start());
//!
//! let end = NavigationEvent::end("/reports?year=2024");
//! assert_eq!(end.navigated_url(), Some("/reports?year=2024"));
//! ```

use std::fmt;

// ============================================================================
// NavigationTrigger
// ============================================================================

/// The cause of a navigation.
///
/// Routers report one of three concrete causes; [`None`](Self::None) covers
/// the state before any navigation has been observed as well as trigger
/// kinds the engine does not recognize. Unrecognized causes never mutate the
/// trail (they reconcile as no-ops).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationTrigger {
    /// Explicit navigation: a link click or a programmatic route change.
    Imperative,
    /// Browser history restoration via the back/forward buttons.
    Popstate,
    /// URL fragment change.
    Hashchange,
    /// No cause recorded.
    #[default]
    None,
}

impl NavigationTrigger {
    /// Parse a trigger from the string form routers report
    /// (`"imperative"`, `"popstate"`, `"hashchange"`).
    ///
    /// Anything else maps to [`None`](Self::None).
    pub fn from_event_str(s: &str) -> Self {
        match s {
            "imperative" => Self::Imperative,
            "popstate" => Self::Popstate,
            "hashchange" => Self::Hashchange,
            _ => Self::None,
        }
    }

    /// The string form routers report for this trigger.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Imperative => "imperative",
            Self::Popstate => "popstate",
            Self::Hashchange => "hashchange",
            Self::None => "none",
        }
    }
}

impl fmt::Display for NavigationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RestoredState
// ============================================================================

/// State the browser supplies when a `popstate` navigation restores an
/// earlier entry.
///
/// The `navigation_id` names the navigation the browser is returning *to*;
/// the reducer searches the trail for an entry carrying that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoredState {
    /// Id of the navigation being restored.
    pub navigation_id: usize,
}

// ============================================================================
// NavigationEvent
// ============================================================================

/// A navigation lifecycle event consumed by the history engine.
///
/// # Example
///
/// ```
/// use router_history::{NavigationEvent, NavigationTrigger};
///
/// // Browser back button restoring navigation 3, as navigation 5:
/// let event = NavigationEvent::start_restored(5, NavigationTrigger::Popstate, 3);
/// assert_eq!(event.restored_navigation_id(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A route change has started.
    Start {
        /// Id assigned to this navigation by the router.
        id: usize,
        /// What caused this navigation.
        trigger: NavigationTrigger,
        /// Present when the browser is restoring an earlier entry.
        restored: Option<RestoredState>,
    },
    /// A route change has completed.
    End {
        /// The settled URL, after any redirects; may carry a `?query` suffix.
        url_after_redirects: String,
    },
}

impl NavigationEvent {
    /// Create a `Start` event with no restored state.
    pub fn start(id: usize, trigger: NavigationTrigger) -> Self {
        Self::Start {
            id,
            trigger,
            restored: None,
        }
    }

    /// Create a `Start` event restoring an earlier navigation.
    pub fn start_restored(id: usize, trigger: NavigationTrigger, navigation_id: usize) -> Self {
        Self::Start {
            id,
            trigger,
            restored: Some(RestoredState { navigation_id }),
        }
    }

    /// Create an `End` event for the given settled URL.
    pub fn end(url_after_redirects: impl Into<String>) -> Self {
        Self::End {
            url_after_redirects: url_after_redirects.into(),
        }
    }

    /// Check if this is a `Start` event.
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. })
    }

    /// Check if this is an `End` event.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }

    /// The settled URL, if this is an `End` event.
    pub fn navigated_url(&self) -> Option<&str> {
        match self {
            Self::End { url_after_redirects } => Some(url_after_redirects),
            Self::Start { .. } => None,
        }
    }

    /// The id of the navigation being restored, if this is a restoring `Start`.
    pub fn restored_navigation_id(&self) -> Option<usize> {
        match self {
            Self::Start { restored, .. } => restored.map(|r| r.navigation_id),
            Self::End { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_from_event_str() {
        assert_eq!(
            NavigationTrigger::from_event_str("imperative"),
            NavigationTrigger::Imperative
        );
        assert_eq!(
            NavigationTrigger::from_event_str("popstate"),
            NavigationTrigger::Popstate
        );
        assert_eq!(
            NavigationTrigger::from_event_str("hashchange"),
            NavigationTrigger::Hashchange
        );
        assert_eq!(
            NavigationTrigger::from_event_str("prerender"),
            NavigationTrigger::None
        );
    }

    #[test]
    fn test_trigger_round_trip() {
        for trigger in [
            NavigationTrigger::Imperative,
            NavigationTrigger::Popstate,
            NavigationTrigger::Hashchange,
        ] {
            assert_eq!(NavigationTrigger::from_event_str(trigger.as_str()), trigger);
        }
    }

    #[test]
    fn test_trigger_default_is_none() {
        assert_eq!(NavigationTrigger::default(), NavigationTrigger::None);
    }

    #[test]
    fn test_start_event() {
        let event = NavigationEvent::start(7, NavigationTrigger::Imperative);
        assert!(event.is_start());
        assert!(!event.is_end());
        assert_eq!(event.restored_navigation_id(), None);
        assert_eq!(event.navigated_url(), None);
    }

    #[test]
    fn test_start_restored_event() {
        let event = NavigationEvent::start_restored(5, NavigationTrigger::Popstate, 3);
        assert!(event.is_start());
        assert_eq!(event.restored_navigation_id(), Some(3));
    }

    #[test]
    fn test_end_event() {
        let event = NavigationEvent::end("/users?page=2");
        assert!(event.is_end());
        assert_eq!(event.navigated_url(), Some("/users?page=2"));
    }
}
