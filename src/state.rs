//! History state and the navigation reconciliation fold.
//!
//! [`HistoryState`] owns the ordered breadcrumb trail and the cursor marking
//! the current entry. State advances exclusively through
//! [`fold`](HistoryState::fold) — a sequential, by-value fold over
//! [`NavigationEvent`]s: each step consumes the accumulated state and
//! produces the next one, which keeps every reconciliation step assertable
//! as a pure function in tests.
//!
//! A [`Start`](NavigationEvent::Start) event only records the pending
//! trigger, id, and restore target. An [`End`](NavigationEvent::End) event
//! is the sole point at which the trail and cursor change, branching in
//! fixed precedence order:
//!
//! 1. A requested [`ClearSignal`] empties the trail first.
//! 2. A current label already present in the trail collapses forward
//!    history to that entry — regardless of the trigger.
//! 3. An imperative navigation drops entries after the cursor and appends.
//! 4. A popstate navigation restores the cursor to the entry carrying the
//!    restored id (falling back to the trail start when the id is gone).
//! 5. Any other trigger leaves the trail untouched.

use crate::event::{NavigationEvent, NavigationTrigger};
use crate::{debug_log, trace_log, warn_log};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// HistoryEntry
// ============================================================================

/// One reconciled entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Navigation id assigned at the entry's `Start` event. Overwritten when
    /// a popstate navigation restores this entry, so ids are not required to
    /// stay unique across the trail's lifetime.
    pub id: usize,
    /// Navigated path, query component excluded.
    pub url: String,
    /// Breadcrumb label resolved when the entry was created.
    pub label: Option<String>,
    /// Raw query string (without the leading `?`), if the navigated URL
    /// carried one.
    pub query: Option<String>,
}

/// Split a navigated URL on the first `?` into path and query components.
///
/// No further normalization is performed; the query component is kept as-is
/// for per-entry storage.
///
/// # Examples
///
/// ```
/// use router_history::split_url;
///
/// assert_eq!(split_url("/reports?year=2024"), ("/reports", Some("year=2024")));
/// assert_eq!(split_url("/reports"), ("/reports", None));
/// ```
#[must_use]
pub fn split_url(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

// ============================================================================
// ClearSignal
// ============================================================================

/// One-shot request to empty the trail, consumed by the next completed
/// navigation.
///
/// The signal is a shared handle: clones observe and consume the same
/// underlying flag, so it can be requested from any caller context while the
/// fold owns the state. Requesting is idempotent; the flag is consumed
/// exactly once, atomically, at the start of the next `End` fold step.
///
/// # Example
///
/// ```
/// use router_history::ClearSignal;
///
/// let signal = ClearSignal::new();
/// signal.request();
/// signal.request(); // idempotent
/// assert!(signal.take());
/// assert!(!signal.take()); // already consumed
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClearSignal {
    // Clones share the flag, not a copy of its value.
    requested: Arc<AtomicBool>,
}

impl ClearSignal {
    /// Create a signal in the unrequested state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the trail be emptied on the next completed navigation.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Check whether a clear is pending, without consuming it.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Consume the signal, returning whether a clear was pending.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

// ============================================================================
// HistoryState
// ============================================================================

/// Fields recorded at a `Start` event, read back during the matching `End`.
///
/// A `Start` with no matching `End` leaves these stale until the next
/// `Start` overwrites them; pending fields are only read while processing
/// the `End` that follows them in well-formed sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingNavigation {
    id: usize,
    trigger: NavigationTrigger,
    restore_id: Option<usize>,
}

/// Accumulated reconciliation state: the ordered trail plus the cursor.
///
/// Created once at composition time and threaded through
/// [`fold`](Self::fold) for the lifetime of the engine. The cursor is a
/// valid index into the trail whenever the trail is non-empty; while the
/// trail is empty it rests at the `0` sentinel.
#[derive(Debug, Clone)]
pub struct HistoryState {
    /// Insertion-ordered breadcrumb trail.
    trail: Vec<HistoryEntry>,
    /// Index of the current entry after reconciliation.
    cursor: usize,
    /// Trigger/id/restore-id recorded by the most recent `Start`.
    pending: Option<PendingNavigation>,
    /// Shared clear flag, consumed at the start of `End` processing.
    clear: ClearSignal,
}

impl HistoryState {
    /// Create an empty history state with its own clear signal.
    pub fn new() -> Self {
        Self {
            trail: Vec::new(),
            cursor: 0,
            pending: None,
            clear: ClearSignal::new(),
        }
    }

    /// The reconciled trail, in insertion order.
    pub fn trail(&self) -> &[HistoryEntry] {
        &self.trail
    }

    /// Index of the current entry; `0` sentinel while the trail is empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry the cursor points at, if the trail is non-empty.
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.trail.get(self.cursor)
    }

    /// Number of entries in the trail.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Check whether any `Start` event has recorded a trigger yet.
    ///
    /// Completed navigations are only published downstream once this holds;
    /// an `End` arriving before the first `Start` is ignored.
    pub fn trigger_recorded(&self) -> bool {
        self.pending.is_some()
    }

    /// The trigger recorded by the most recent `Start`, if any.
    pub fn pending_trigger(&self) -> Option<NavigationTrigger> {
        self.pending.map(|p| p.trigger)
    }

    /// A shared handle to this state's clear signal.
    pub fn clear_signal(&self) -> ClearSignal {
        self.clear.clone()
    }

    /// Advance the state by one navigation event.
    ///
    /// `current_label` is the breadcrumb label of the deepest active route
    /// leaf, resolved by the caller at the moment the `End` event fired (see
    /// [`resolve_label`](crate::resolve_label)); it is ignored for `Start`
    /// events.
    #[must_use]
    pub fn fold(mut self, event: &NavigationEvent, current_label: Option<&str>) -> Self {
        match event {
            NavigationEvent::Start {
                id,
                trigger,
                restored,
            } => {
                trace_log!("start: id={}, trigger={}, restored={:?}", id, trigger, restored);
                self.pending = Some(PendingNavigation {
                    id: *id,
                    trigger: *trigger,
                    restore_id: restored.map(|r| r.navigation_id),
                });
            }
            NavigationEvent::End { url_after_redirects } => {
                self.reconcile_end(url_after_redirects, current_label);
            }
        }
        self
    }

    /// Reconcile a completed navigation into the trail.
    fn reconcile_end(&mut self, url: &str, current_label: Option<&str>) {
        if self.clear.take() {
            debug_log!("clear consumed: dropping {} entries", self.trail.len());
            self.trail.clear();
            self.cursor = 0;
        }

        // Landing on a label already in the trail collapses forward history
        // to that entry, whatever the trigger. Unlabeled matches unlabeled.
        if let Some(index) = self
            .trail
            .iter()
            .position(|entry| entry.label.as_deref() == current_label)
        {
            self.trail.truncate(index + 1);
            self.cursor = index;
            debug_log!(
                "label {:?} already at index {}: trail collapsed to {} entries",
                current_label,
                index,
                self.trail.len()
            );
            return;
        }

        let Some(pending) = self.pending else {
            // No Start observed yet; nothing to branch on.
            trace_log!("end for '{}' with no recorded trigger", url);
            return;
        };

        match pending.trigger {
            NavigationTrigger::Imperative => {
                // Drop forward history past the cursor, then append. On an
                // empty trail the truncation is a no-op (cursor sentinel 0).
                self.trail.truncate(self.cursor + 1);
                let (path, query) = split_url(url);
                self.trail.push(HistoryEntry {
                    id: pending.id,
                    url: path.to_string(),
                    label: current_label.map(str::to_owned),
                    query: query.map(str::to_owned),
                });
                self.cursor = self.trail.len() - 1;
                debug_log!(
                    "appended '{}' (label {:?}) at index {}",
                    path,
                    current_label,
                    self.cursor
                );
            }
            NavigationTrigger::Popstate => {
                let target = pending
                    .restore_id
                    .and_then(|restore_id| self.trail.iter().position(|e| e.id == restore_id));
                match target {
                    Some(index) => {
                        self.cursor = index;
                        // The entry adopts the new navigation id so a later
                        // restoration targets this event.
                        self.trail[index].id = pending.id;
                        debug_log!("restored to index {} as id {}", index, pending.id);
                    }
                    None => {
                        warn_log!(
                            "restoration target {:?} not in trail, falling back to start",
                            pending.restore_id
                        );
                        self.cursor = 0;
                    }
                }
            }
            NavigationTrigger::Hashchange | NavigationTrigger::None => {
                trace_log!("trigger '{}' leaves trail unchanged", pending.trigger);
            }
        }
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
