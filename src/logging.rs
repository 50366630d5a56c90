//! Feature-gated logging macros.
//!
//! The engine logs through a thin macro layer so embedders choose the
//! backend at build time: the `log` feature (default) routes to the
//! [`log`](https://docs.rs/log) crate, the `tracing` feature to
//! [`tracing`](https://docs.rs/tracing). Enable at most one; with neither,
//! the macros compile to nothing.
//!
//! Reconciliation decisions log at `trace`/`debug` (branch taken, entries
//! dropped, publish counts) and degenerate recoveries — a restoration
//! target missing from the trail — at `warn`. Nothing logs at `error`:
//! the engine has no fatal inputs.
//!
//! All macros take `format!`-style arguments:
//!
//! ```ignore
//! debug_log!("appended '{}' at index {}", path, cursor);
//! warn_log!("restoration target {:?} not in trail", restore_id);
//! ```

/// Log at `trace` level via the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Log at `debug` level via the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Log at `info` level via the enabled backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Log at `warn` level via the enabled backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
