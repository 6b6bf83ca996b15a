//! Internal logging macros.
//!
//! Calls go through the `log` facade when the `logging` feature is enabled
//! and compile to nothing otherwise.

/// Logs an in-place mutation at `trace` level.
macro_rules! trace_mutation {
    ($($argument:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            log::trace!($($argument)+);
        }
    }};
}

/// Logs an access failure at `debug` level before it is returned.
macro_rules! debug_failure {
    ($($argument:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            log::debug!($($argument)+);
        }
    }};
}
