//! crates/logging-sink/src/call_site.rs
//! Source location attached to each emitted line.

use std::panic::Location;

/// File and line of the code that requested a log line.
///
/// Built from [`Location::caller`] when the request comes through a
/// `#[track_caller]` chain, or from event metadata when it comes from another
/// logging framework.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from an explicit file path and line number.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the file path as recorded by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the final path component of [`file`](Self::file).
    ///
    /// ```
    /// use logging_sink::CallSite;
    ///
    /// assert_eq!(CallSite::new("src/bin/prilog.rs", 3).short_file(), "prilog.rs");
    /// assert_eq!(CallSite::new("lib.rs", 1).short_file(), "lib.rs");
    /// ```
    #[must_use]
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl CallSite<'static> {
    /// Captures the location of the nearest caller outside a `#[track_caller]` chain.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}
