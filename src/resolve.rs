//! Breadcrumb label resolution over route tree snapshots.
//!
//! When a navigation completes, the entry appended to (or matched against)
//! the trail is identified by the breadcrumb label of the *deepest active
//! leaf* of the route tree. Resolution descends into the first child of each
//! node until it reaches a node with no children, then reads that leaf's
//! configured label.
//!
//! A leaf with no configured label resolves to `None`; that is ordinary
//! (the entry renders with an empty display label), not an error.
//!
//! # Example
//!
//! ```
//! use router_history::{resolve_label, RouteSnapshot};
//!
//! let root = RouteSnapshot::new().child(
//!     RouteSnapshot::new()
//!         .breadcrumb("Reports")
//!         .child(RouteSnapshot::new().breadcrumb("Annual Report")),
//! );
//!
//! assert_eq!(resolve_label(&root), Some("Annual Report"));
//! ```

use crate::route::RouteSnapshot;
use crate::trace_log;

/// Resolve the breadcrumb label of the deepest active leaf under `root`.
///
/// Descends through first children only — the first child of each node is
/// the active branch of the snapshot. Depth is bounded by the application's
/// route configuration, not user input, and snapshots are acyclic by
/// construction, so descent always terminates.
///
/// Returns `None` when the leaf declares no label.
#[must_use]
pub fn resolve_label(root: &RouteSnapshot) -> Option<&str> {
    let mut node = root;
    let mut depth = 0usize;

    while let Some(first) = node.get_children().first() {
        node = first;
        depth += 1;
    }

    trace_log!(
        "resolve_label: leaf at depth {} has label {:?}",
        depth,
        node.breadcrumb_label()
    );

    node.breadcrumb_label()
}

// ============================================================================
// Tests
// ============================================================================
