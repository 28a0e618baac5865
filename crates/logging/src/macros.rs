//! crates/logging/src/macros.rs
//! `format!`-style wrappers around the formatting entry points of [`Logger`](crate::Logger).
//!
//! Each macro takes the logger expression followed by a format string and
//! its arguments, and expands to the matching `*f` method call at the
//! caller's location.

/// Logs a formatted message at [`Priority::EMERG`](crate::Priority::EMERG).
///
/// # Example
/// ```ignore
/// emergf!(logger, "disk {} failed", disk);
/// ```
#[macro_export]
macro_rules! emergf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emergf(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::ALERT`](crate::Priority::ALERT).
///
/// # Example
/// ```ignore
/// alertf!(logger, "replica {} diverged", id);
/// ```
#[macro_export]
macro_rules! alertf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.alertf(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::CRIT`](crate::Priority::CRIT).
///
/// # Example
/// ```ignore
/// critf!(logger, "journal {} unreadable", path.display());
/// ```
#[macro_export]
macro_rules! critf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critf(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::ERROR`](crate::Priority::ERROR).
///
/// # Example
/// ```ignore
/// errorf!(logger, "request failed: {}", err);
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::WARN`](crate::Priority::WARN).
///
/// # Example
/// ```ignore
/// warnf!(logger, "{} retries left", remaining);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::NOTICE`](crate::Priority::NOTICE).
///
/// # Example
/// ```ignore
/// noticef!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! noticef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.noticef(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::INFO`](crate::Priority::INFO).
///
/// # Example
/// ```ignore
/// infof!(logger, "loaded {} entries", count);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message at [`Priority::DEBUG`](crate::Priority::DEBUG).
///
/// # Example
/// ```ignore
/// debugf!(logger, "x={}", 5);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message unconditionally and exits with status 1.
///
/// # Example
/// ```ignore
/// fatalf!(logger, "cannot open {}", path.display());
/// ```
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message unconditionally and panics with it.
///
/// # Example
/// ```ignore
/// panicf!(logger, "invariant broken at {}", offset);
/// ```
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Flags, Logger, Priority};

    #[test]
    fn macros_format_and_gate() {
        let logger = Logger::new(Vec::new(), "", Priority::DEBUG, Flags::NONE);
        debugf!(logger, "x={}", 5);
        infof!(logger, "{name} ready", name = "cache");
        warnf!(logger, "{:>3}|", 7);
        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(output, "DEBUG: x=5\nINFO: cache ready\nWARNING:   7|\n");
    }

    #[test]
    fn macros_respect_threshold() {
        let logger = Logger::new(Vec::new(), "", Priority::ERROR, Flags::NONE);
        noticef!(logger, "n={}", 1);
        errorf!(logger, "e={}", 2);
        critf!(logger, "c");
        alertf!(logger, "a");
        emergf!(logger, "m");
        let output = String::from_utf8(logger.into_inner()).expect("utf-8");
        assert_eq!(output, "ERROR: e=2\nCRITICAL: c\nALERT: a\nEMERGENCY: m\n");
    }

    #[test]
    fn macros_accept_references() {
        let logger = Logger::new(Vec::new(), "", Priority::INFO, Flags::NONE);
        let shared = &logger;
        infof!(shared, "via {}", "reference");
        assert_eq!(logger.into_inner(), b"INFO: via reference\n".to_vec());
    }
}
