//! Logging macros.
//!
//! `attrs!` builds an attribute list; the level macros check `enabled` before
//! building any attributes, so disabled levels cost one comparison.
//!
//! # Examples
//!
//! ```
//! use service_logger::prelude::*;
//! use service_logger::{attrs, error, info};
//!
//! let log = Logger::discard();
//! let ctx = Context::background();
//!
//! info!(log, &ctx, "server started");
//! info!(log, &ctx, "listening", "port" => 8080, "tls" => false);
//! error!(log, &ctx, "request failed", "status" => 500);
//!
//! log.warn(&ctx, "slow query", attrs!["ms" => 1200]);
//! ```

/// Build a `Vec<Attr>` from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Attr::new($key, $value)),+]
    };
}

/// Log at a given level with optional `key => value` attributes.
#[macro_export]
macro_rules! log {
    ($logger:expr, $ctx:expr, $level:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let ctx: &$crate::Context = $ctx;
        let level: $crate::Level = $level;
        if logger.enabled(ctx, level) {
            logger.log(ctx, level, $msg, $crate::attrs![$($key => $value),*]);
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($rest:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Level::Debug, $($rest)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($rest:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Level::Info, $($rest)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $($rest:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Level::Warn, $($rest)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($rest:tt)+) => {
        $crate::log!($logger, $ctx, $crate::Level::Error, $($rest)+)
    };
}
