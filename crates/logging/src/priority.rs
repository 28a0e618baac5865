//! crates/logging/src/priority.rs
//! Syslog-style message priorities and the threshold comparison.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message, following the syslog(3) numbering.
///
/// Lower values are more severe: [`Priority::EMERG`] is `0` and
/// [`Priority::DEBUG`] is `7`. The type wraps a plain `i32` so any integer,
/// including values outside the named range, can be used as a threshold.
/// Comparisons follow the numeric order.
///
/// # Examples
///
/// ```
/// use logging::Priority;
///
/// assert!(Priority::EMERG < Priority::DEBUG);
/// assert!(Priority::WARN.allows(Priority::ERROR));
/// assert!(!Priority::WARN.allows(Priority::INFO));
/// assert_eq!(Priority::CRIT.label(), "CRITICAL: ");
/// assert_eq!("warning".parse::<Priority>()?, Priority::WARN);
/// # Ok::<(), logging::ParsePriorityError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(i32);

impl Priority {
    /// System is unusable.
    pub const EMERG: Self = Self(0);
    /// Action must be taken immediately.
    pub const ALERT: Self = Self(1);
    /// Critical conditions.
    pub const CRIT: Self = Self(2);
    /// Error conditions.
    pub const ERROR: Self = Self(3);
    /// Warning conditions.
    pub const WARN: Self = Self(4);
    /// Normal but significant condition.
    pub const NOTICE: Self = Self(5);
    /// Informational messages.
    pub const INFO: Self = Self(6);
    /// Debug-level messages.
    pub const DEBUG: Self = Self(7);

    /// Every named priority, most severe first.
    pub const ALL: [Self; 8] = [
        Self::EMERG,
        Self::ALERT,
        Self::CRIT,
        Self::ERROR,
        Self::WARN,
        Self::NOTICE,
        Self::INFO,
        Self::DEBUG,
    ];

    /// Wraps a raw syslog priority value without validation.
    #[must_use]
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Reports whether the value is one of the eight named priorities.
    #[must_use]
    pub const fn is_named(self) -> bool {
        self.name().is_some()
    }

    /// Returns the label written in front of messages of this priority.
    ///
    /// Values outside the named range have an empty label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "EMERGENCY: ",
            1 => "ALERT: ",
            2 => "CRITICAL: ",
            3 => "ERROR: ",
            4 => "WARNING: ",
            5 => "NOTICE: ",
            6 => "INFO: ",
            7 => "DEBUG: ",
            _ => "",
        }
    }

    /// Returns the canonical lowercase name, if the value is named.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("emerg"),
            1 => Some("alert"),
            2 => Some("crit"),
            3 => Some("error"),
            4 => Some("warn"),
            5 => Some("notice"),
            6 => Some("info"),
            7 => Some("debug"),
            _ => None,
        }
    }

    /// Reports whether a threshold of `self` lets a message of `priority` through.
    ///
    /// A message passes unless the threshold is numerically smaller (more
    /// severe) than the message's priority.
    #[must_use]
    pub const fn allows(self, priority: Self) -> bool {
        priority.0 <= self.0
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        priority.as_i32()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Error returned when text names no priority and is not an integer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised priority `{input}`; expected emerg, alert, crit, error, warn, notice, info, debug, or an integer")]
pub struct ParsePriorityError {
    input: String,
}

impl ParsePriorityError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    /// Parses a priority name, a syslog alias, or an integer.
    ///
    /// Names are matched case-insensitively after trimming whitespace. The
    /// aliases `emergency`, `critical`, `err`, and `warning` are accepted
    /// alongside the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();
        let priority = match lowered.as_str() {
            "emerg" | "emergency" => Self::EMERG,
            "alert" => Self::ALERT,
            "crit" | "critical" => Self::CRIT,
            "error" | "err" => Self::ERROR,
            "warn" | "warning" => Self::WARN,
            "notice" => Self::NOTICE,
            "info" => Self::INFO,
            "debug" => Self::DEBUG,
            other => other.parse::<i32>().map(Self).map_err(|_| ParsePriorityError {
                input: trimmed.to_owned(),
            })?,
        };
        Ok(priority)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PriorityVisitor;

        impl serde::de::Visitor<'_> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a priority name or integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(value)
                    .map(Priority)
                    .map_err(|_| E::custom(format!("priority {value} is out of range")))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i32::try_from(value)
                    .map(Priority)
                    .map_err(|_| E::custom(format!("priority {value} is out of range")))
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}

#[cfg(test)]
mod tests;
