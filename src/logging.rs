//! Internal logging helpers for structured duckrow events.

/// Single logging target for duckrow.
pub(crate) const LOG_TARGET: &str = "duckrow";

macro_rules! duckrow_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!($level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use duckrow_log;
