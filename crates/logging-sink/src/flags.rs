//! crates/logging-sink/src/flags.rs
//! Header flags controlling the metadata written in front of each line.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use thiserror::Error;

/// Set of header options understood by [`LineWriter`](crate::LineWriter).
///
/// The set is a plain bit mask. Bits that do not correspond to a named flag
/// are carried along untouched and ignored when rendering headers, so callers
/// may pass any raw value through [`Flags::from_bits`].
///
/// # Examples
///
/// ```
/// use logging_sink::Flags;
///
/// let flags: Flags = "date, time,shortfile".parse()?;
/// assert!(flags.contains(Flags::STD));
/// assert!(flags.contains(Flags::SHORT_FILE));
/// assert_eq!(flags.to_string(), "date,time,shortfile");
/// # Ok::<(), logging_sink::ParseFlagsError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// No header metadata.
    pub const NONE: Self = Self(0);
    /// Local date as `2009/01/23`.
    pub const DATE: Self = Self(1 << 0);
    /// Local time as `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution `01:23:23.123123`; implies [`Flags::TIME`].
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full file path and line number.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path component and line number; overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Self = Self(1 << 5);
    /// Move the prefix from the beginning of the line to before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// Initial values for a standard writer: date and time.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, Self); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("utc", Self::UTC),
        ("msgprefix", Self::MSG_PREFIX),
    ];

    const KNOWN_BITS: u32 = (1 << 7) - 1;

    /// Wraps a raw bit mask without validation.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reports whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether any bit of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub(crate) const fn wants_timestamp(self) -> bool {
        self.intersects(Self(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    pub(crate) const fn wants_call_site(self) -> bool {
        self.intersects(Self(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        let mut first = true;
        for (name, flag) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        let unknown = self.0 & !Self::KNOWN_BITS;
        if unknown != 0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{unknown:#x}")?;
        }
        Ok(())
    }
}

/// Error returned when a flag list contains an unrecognised name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown line flag `{name}`; expected date, time, microseconds, longfile, shortfile, utc, msgprefix, std, or none")]
pub struct ParseFlagsError {
    name: String,
}

impl ParseFlagsError {
    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Flags {
    type Err = ParseFlagsError;

    /// Parses a comma-separated list of flag names.
    ///
    /// Names are case-insensitive and surrounding whitespace is ignored.
    /// `std` expands to `date,time`; `none` and the empty string contribute
    /// nothing. Hexadecimal masks such as `0x80` are accepted so that the
    /// [`Display`](fmt::Display) form of any value parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::NONE;
        for token in s.split(',').map(str::trim) {
            if token.is_empty() || token.eq_ignore_ascii_case("none") {
                continue;
            }
            if token.eq_ignore_ascii_case("std") {
                flags |= Self::STD;
                continue;
            }
            if let Some(hex) = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
            {
                let bits = u32::from_str_radix(hex, 16).map_err(|_| ParseFlagsError {
                    name: token.to_owned(),
                })?;
                flags |= Self(bits);
                continue;
            }

            let flag = Self::NAMED
                .iter()
                .find(|(name, _)| token.eq_ignore_ascii_case(name))
                .map(|&(_, flag)| flag)
                .ok_or_else(|| ParseFlagsError {
                    name: token.to_owned(),
                })?;
            flags |= flag;
        }
        Ok(flags)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Flags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Flags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_is_date_and_time() {
        assert_eq!(Flags::STD, Flags::DATE | Flags::TIME);
        assert_eq!(Flags::STD.bits(), 3);
    }

    #[test]
    fn default_is_empty() {
        assert!(Flags::default().is_empty());
        assert_eq!(Flags::default().to_string(), "none");
    }

    #[test]
    fn parse_accepts_every_named_flag() {
        let parsed: Flags = "date,time,microseconds,longfile,shortfile,utc,msgprefix"
            .parse()
            .expect("all names parse");
        assert_eq!(parsed.bits(), 0x7f);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let parsed: Flags = " Date , SHORTFILE ".parse().expect("parses");
        assert_eq!(parsed, Flags::DATE | Flags::SHORT_FILE);
    }

    #[test]
    fn parse_expands_std_and_ignores_none() {
        assert_eq!("std".parse::<Flags>(), Ok(Flags::STD));
        assert_eq!("none".parse::<Flags>(), Ok(Flags::NONE));
        assert_eq!("".parse::<Flags>(), Ok(Flags::NONE));
        assert_eq!("none,utc".parse::<Flags>(), Ok(Flags::UTC));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = "date,colour".parse::<Flags>().expect_err("unknown name");
        assert_eq!(error.name(), "colour");
        assert!(error.to_string().contains("`colour`"));
    }

    #[test]
    fn unknown_bits_survive_display_and_parse() {
        let flags = Flags::from_bits(0x100) | Flags::UTC;
        assert_eq!(flags.to_string(), "utc,0x100");
        assert_eq!(flags.to_string().parse::<Flags>(), Ok(flags));
    }

    #[test]
    fn timestamp_and_call_site_detection() {
        assert!(Flags::MICROSECONDS.wants_timestamp());
        assert!(!Flags::UTC.wants_timestamp());
        assert!(Flags::LONG_FILE.wants_call_site());
        assert!(!Flags::STD.wants_call_site());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_list_form() {
        let json = serde_json::to_string(&(Flags::STD | Flags::UTC)).expect("serialize");
        assert_eq!(json, "\"date,time,utc\"");

        let parsed: Flags = serde_json::from_str("\"shortfile\"").expect("deserialize");
        assert_eq!(parsed, Flags::SHORT_FILE);

        assert!(serde_json::from_str::<Flags>("\"bogus\"").is_err());
    }
}
