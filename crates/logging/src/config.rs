//! crates/logging/src/config.rs
//! Declarative logger configuration.

use logging_sink::Flags;

use crate::logger::Logger;
use crate::priority::Priority;

/// Prefix, threshold, and header flags for building a [`Logger`].
///
/// With the `serde` feature the type can be loaded from configuration files;
/// missing fields fall back to [`LoggerConfig::default`].
///
/// # Examples
///
/// ```
/// use logging::{Flags, LoggerConfig, Priority};
///
/// let logger = LoggerConfig::default()
///     .with_prefix("db: ")
///     .with_threshold(Priority::NOTICE)
///     .with_flags(Flags::NONE)
///     .build(Vec::new());
///
/// logger.info("dropped");
/// logger.notice("kept");
/// assert_eq!(logger.into_inner(), b"db: NOTICE: kept\n".to_vec());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggerConfig {
    /// Text written at the start of every line (or before the message with
    /// [`Flags::MSG_PREFIX`]).
    pub prefix: String,
    /// Least severe priority that is written.
    pub threshold: Priority,
    /// Header metadata rendered by the line writer.
    pub flags: Flags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            threshold: Priority::INFO,
            flags: Flags::STD,
        }
    }
}

impl LoggerConfig {
    /// Replaces the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the threshold.
    pub fn with_threshold(mut self, threshold: Priority) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the header flags.
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Builds a logger that writes to `writer`.
    #[must_use]
    pub fn build<W>(self, writer: W) -> Logger<W> {
        Logger::new(writer, self.prefix, self.threshold, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_writer() {
        let config = LoggerConfig::default();
        assert_eq!(config.prefix, "");
        assert_eq!(config.threshold, Priority::INFO);
        assert_eq!(config.flags, Flags::STD);
    }

    #[test]
    fn build_carries_every_field() {
        let logger = LoggerConfig::default()
            .with_prefix("x ")
            .with_threshold(Priority::CRIT)
            .with_flags(Flags::SHORT_FILE)
            .build(Vec::<u8>::new());
        assert_eq!(logger.priority(), Priority::CRIT);
        assert_eq!(logger.writer().prefix(), "x ");
        assert_eq!(logger.writer().flags(), Flags::SHORT_FILE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_fills_missing_fields() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"threshold": "warning"}"#).expect("valid config");
        assert_eq!(config.threshold, Priority::WARN);
        assert_eq!(config.flags, Flags::STD);
        assert_eq!(config.prefix, "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<LoggerConfig>(r#"{"level": "info"}"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_round_trips() {
        let config = LoggerConfig::default()
            .with_prefix("svc ")
            .with_threshold(Priority::from_raw(11))
            .with_flags(Flags::UTC | Flags::MICROSECONDS);
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(
            json,
            r#"{"prefix":"svc ","threshold":11,"flags":"microseconds,utc"}"#
        );
        let parsed: LoggerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }
}
