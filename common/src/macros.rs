//! Logging shorthands used across the workspace.
//!
//! These delegate to `tracing` so the CLI's subscriber controls how (and
//! whether) they reach the terminal. `success!` goes through a dedicated
//! target that the CLI formatter renders with a green check.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "footprintr::ok", $($arg)*)
    };
}
