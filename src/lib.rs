//! Breadcrumb trail reconciliation over router navigation lifecycle events.
//!
//! `router-history` turns a raw stream of route-change-started /
//! route-change-completed events into an ordered, de-duplicated breadcrumb
//! trail that stays correct across forward navigation, browser back/forward
//! (history restoration), and jump-to-an-ancestor resets.
//!
//! # How reconciliation works
//!
//! The engine is a sequential fold over [`NavigationEvent`]s. A
//! [`Start`](NavigationEvent::Start) records the navigation's cause
//! ([`NavigationTrigger`]), id, and — for restorations — the id being
//! restored. The matching [`End`](NavigationEvent::End) reconciles the
//! trail, in fixed precedence order:
//!
//! 1. A pending [`ClearSignal`] empties the trail.
//! 2. If the current breadcrumb label (the deepest active route leaf's
//!    label, see [`resolve_label`]) already appears in the trail, forward
//!    history collapses to that entry — whatever the trigger was.
//! 3. An imperative navigation drops entries past the cursor and appends a
//!    new entry, preserving the navigated URL's query string per entry.
//! 4. A popstate navigation moves the cursor to the entry carrying the
//!    restored id and hands that entry the new navigation id; if the id is
//!    gone, the cursor falls back to the trail start.
//! 5. Anything else (hashchange, unrecognized) leaves the trail unchanged.
//!
//! Completed navigations republish the projected [`BreadcrumbItem`]s to
//! listeners — but only once a trigger has ever been recorded, so spurious
//! completions before the first real navigation are ignored.
//!
//! # Quick start
//!
//! ```
//! use router_history::{HistoryService, NavigationEvent, NavigationTrigger, RouteSnapshot};
//!
//! // The router supplies a snapshot of the active route tree on demand.
//! let mut service = HistoryService::new(|| {
//!     Some(RouteSnapshot::new().child(RouteSnapshot::new().breadcrumb("Dashboard")))
//! });
//!
//! service.subscribe(|items| {
//!     for item in items {
//!         println!("{} -> {}", item.label.as_deref().unwrap_or(""), item.target);
//!     }
//! });
//!
//! service.handle_event(&NavigationEvent::start(1, NavigationTrigger::Imperative));
//! service.handle_event(&NavigationEvent::end("/dashboard"));
//!
//! assert_eq!(service.breadcrumbs().len(), 1);
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Effect                                   | Default |
//! |-----------|------------------------------------------|---------|
//! | `log`     | route diagnostics through the `log` crate | yes    |
//! | `tracing` | route diagnostics through `tracing`       | no     |
//!
//! The two logging backends are mutually exclusive — enable at most one.

pub mod breadcrumbs;
pub mod event;
pub mod logging;
pub mod outcome;
pub mod resolve;
pub mod route;
pub mod service;
pub mod state;

pub use breadcrumbs::{parse_query_pairs, project, BreadcrumbItem, QueryPair};
pub use event::{NavigationEvent, NavigationTrigger, RestoredState};
pub use outcome::ReconcileOutcome;
pub use resolve::resolve_label;
pub use route::RouteSnapshot;
pub use service::{BreadcrumbListener, HistoryService, RouteTreeSource};
pub use state::{split_url, ClearSignal, HistoryEntry, HistoryState};
