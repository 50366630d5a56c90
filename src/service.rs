//! History service — the engine's composition root.
//!
//! [`HistoryService`] wires the pieces together: it consumes the ordered
//! stream of [`NavigationEvent`]s, resolves the current breadcrumb label
//! from the active route tree at completion time, folds each event through
//! [`HistoryState`], and republishes the projected breadcrumbs to
//! registered listeners whenever a completed navigation qualifies.
//!
//! Events must arrive serialized — the service processes one at a time and
//! owns its state exclusively. Only [`clear`](HistoryService::clear) (and
//! its detachable [`ClearSignal`] handle) may be invoked from other caller
//! contexts; its effect is deferred to the next completed navigation.
//!
//! # Example
//!
//! ```
//! use router_history::{HistoryService, NavigationEvent, NavigationTrigger, RouteSnapshot};
//!
//! let mut service = HistoryService::new(|| {
//!     Some(RouteSnapshot::new().child(RouteSnapshot::new().breadcrumb("Reports")))
//! });
//!
//! service.handle_event(&NavigationEvent::start(1, NavigationTrigger::Imperative));
//! let outcome = service.handle_event(&NavigationEvent::end("/reports?year=2024"));
//!
//! assert!(outcome.is_published());
//! assert_eq!(service.breadcrumbs()[0].label.as_deref(), Some("Reports"));
//! assert_eq!(service.breadcrumbs()[0].query_value("year"), Some("2024"));
//! ```

use crate::breadcrumbs::{project, BreadcrumbItem};
use crate::event::NavigationEvent;
use crate::outcome::ReconcileOutcome;
use crate::resolve::resolve_label;
use crate::route::RouteSnapshot;
use crate::state::{ClearSignal, HistoryState};
use crate::{debug_log, info_log, trace_log};
use std::sync::Arc;

/// Supplies a snapshot of the active route tree, taken at the moment a
/// navigation completes.
///
/// Returning `None` (no active tree) resolves the current label to none,
/// which is an ordinary unlabeled completion, not an error.
pub type RouteTreeSource = Arc<dyn Fn() -> Option<RouteSnapshot> + Send + Sync>;

/// Listener invoked with the freshly projected breadcrumbs after each
/// qualifying completed navigation.
pub type BreadcrumbListener = Arc<dyn Fn(&[BreadcrumbItem]) + Send + Sync>;

/// Composition root: event intake, label resolution, fold, projection,
/// republication.
pub struct HistoryService {
    state: HistoryState,
    clear: ClearSignal,
    route_source: RouteTreeSource,
    listeners: Vec<BreadcrumbListener>,
    breadcrumbs: Vec<BreadcrumbItem>,
}

impl HistoryService {
    /// Create a service reading active route trees from `route_source`.
    pub fn new<F>(route_source: F) -> Self
    where
        F: Fn() -> Option<RouteSnapshot> + Send + Sync + 'static,
    {
        Self::with_source(Arc::new(route_source))
    }

    /// Create a service from an already-shared [`RouteTreeSource`].
    pub fn with_source(route_source: RouteTreeSource) -> Self {
        let state = HistoryState::new();
        let clear = state.clear_signal();
        Self {
            state,
            clear,
            route_source,
            listeners: Vec::new(),
            breadcrumbs: Vec::new(),
        }
    }

    /// Register a listener for republished breadcrumbs.
    ///
    /// Listeners fire once per qualifying completed navigation, in
    /// registration order, after the trail has been reconciled — including
    /// completions whose trigger branch left the trail unchanged.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&[BreadcrumbItem]) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
        info_log!("registered breadcrumb listener ({} total)", self.listeners.len());
    }

    /// Feed one navigation event through the engine.
    ///
    /// A `Start` records its trigger and ids ([`ReconcileOutcome::Recorded`]).
    /// An `End` reconciles the trail and republishes
    /// ([`ReconcileOutcome::Published`]) unless no `Start` has ever been
    /// observed, in which case it is dropped ([`ReconcileOutcome::Ignored`]).
    pub fn handle_event(&mut self, event: &NavigationEvent) -> ReconcileOutcome {
        // The label is resolved at the moment the completion is processed;
        // Start events never consult the route tree.
        let current_label = match event {
            NavigationEvent::End { .. } => {
                (self.route_source)().and_then(|root| resolve_label(&root).map(str::to_owned))
            }
            NavigationEvent::Start { .. } => None,
        };

        let state = std::mem::take(&mut self.state);
        self.state = state.fold(event, current_label.as_deref());

        match event {
            NavigationEvent::Start { .. } => ReconcileOutcome::Recorded,
            NavigationEvent::End { url_after_redirects } => {
                if self.state.trigger_recorded() {
                    self.republish()
                } else {
                    trace_log!(
                        "ignoring completion of '{}' before any recorded trigger",
                        url_after_redirects
                    );
                    ReconcileOutcome::Ignored
                }
            }
        }
    }

    /// Project the current trail and notify listeners.
    fn republish(&mut self) -> ReconcileOutcome {
        self.breadcrumbs = project(self.state.trail());
        debug_log!(
            "publishing {} breadcrumbs (cursor at {})",
            self.breadcrumbs.len(),
            self.state.cursor()
        );
        for listener in &self.listeners {
            listener(&self.breadcrumbs);
        }
        ReconcileOutcome::Published {
            entries: self.breadcrumbs.len(),
        }
    }

    /// Request that the trail be emptied on the next completed navigation.
    ///
    /// Deferred and idempotent; no republish happens until the next
    /// navigation event does. May be called from any caller context.
    pub fn clear(&self) {
        self.clear.request();
    }

    /// A detachable handle to the clear signal, for callers that cannot
    /// reach the service itself.
    pub fn clear_signal(&self) -> ClearSignal {
        self.clear.clone()
    }

    /// The most recently published breadcrumbs.
    ///
    /// Empty until the first qualifying completed navigation.
    pub fn breadcrumbs(&self) -> &[BreadcrumbItem] {
        &self.breadcrumbs
    }

    /// Read access to the reconciliation state.
    pub fn state(&self) -> &HistoryState {
        &self.state
    }
}

impl std::fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryService")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("breadcrumbs", &self.breadcrumbs)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
