//! Shared fixtures for reconciliation scenario tests.
//!
//! Provides a service wired to a swappable active route tree, plus helpers
//! that drive full Start/End navigation pairs the way a router would.

#![allow(dead_code)]

use router_history::{HistoryService, NavigationEvent, NavigationTrigger, RouteSnapshot};
use std::sync::{Arc, Mutex};

/// Initialize test logging once; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared handle to the route tree the service snapshots at completion time.
///
/// Tests swap the tree between navigations to simulate the router
/// activating different routes.
#[derive(Clone, Default)]
pub struct ActiveTree {
    root: Arc<Mutex<Option<RouteSnapshot>>>,
}

impl ActiveTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the active tree a two-level chain whose leaf carries `label`.
    pub fn set_leaf_label(&self, label: &str) {
        *self.root.lock().unwrap() = Some(labeled_leaf(label));
    }

    /// Make the active tree end in a leaf with no breadcrumb label.
    pub fn set_unlabeled(&self) {
        *self.root.lock().unwrap() = Some(RouteSnapshot::new().child(RouteSnapshot::new()));
    }

    /// Install an arbitrary tree.
    pub fn set(&self, root: RouteSnapshot) {
        *self.root.lock().unwrap() = Some(root);
    }

    /// Remove the active tree entirely.
    pub fn unset(&self) {
        *self.root.lock().unwrap() = None;
    }

    pub fn snapshot(&self) -> Option<RouteSnapshot> {
        self.root.lock().unwrap().clone()
    }
}

/// Build a root whose deepest first-child leaf carries `label`.
pub fn labeled_leaf(label: &str) -> RouteSnapshot {
    RouteSnapshot::new().child(RouteSnapshot::new().breadcrumb(label))
}

/// A service reading snapshots from a fresh [`ActiveTree`].
pub fn create_service() -> (HistoryService, ActiveTree) {
    let tree = ActiveTree::new();
    let source = tree.clone();
    let service = HistoryService::new(move || source.snapshot());
    (service, tree)
}

/// Drive a full imperative navigation: activate `label`, then Start + End.
pub fn navigate(
    service: &mut HistoryService,
    tree: &ActiveTree,
    id: usize,
    url: &str,
    label: &str,
) {
    tree.set_leaf_label(label);
    service.handle_event(&NavigationEvent::start(id, NavigationTrigger::Imperative));
    service.handle_event(&NavigationEvent::end(url));
}

/// Drive a popstate restoration of `restore_id`: activate `label`, then
/// Start (with restored state) + End.
pub fn restore(
    service: &mut HistoryService,
    tree: &ActiveTree,
    id: usize,
    restore_id: usize,
    url: &str,
    label: &str,
) {
    tree.set_leaf_label(label);
    service.handle_event(&NavigationEvent::start_restored(
        id,
        NavigationTrigger::Popstate,
        restore_id,
    ));
    service.handle_event(&NavigationEvent::end(url));
}

/// Labels of the current trail, `""` standing in for unlabeled entries.
pub fn trail_labels(service: &HistoryService) -> Vec<String> {
    service
        .state()
        .trail()
        .iter()
        .map(|entry| entry.label.clone().unwrap_or_default())
        .collect()
}
