//! crates/logging/src/logger.rs
//! Priority-gated logger that labels messages and forwards them to a line writer.

use std::fmt;
use std::io::Write;
use std::process;

use logging_sink::{CallSite, Flags, LineWriter};

use crate::priority::Priority;

/// Exit status used by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger with a fixed priority threshold.
///
/// Messages at least as severe as the threshold are written as
/// `<label><message>` through the wrapped [`LineWriter`], which adds its own
/// prefix, metadata, and trailing newline. Less severe messages are dropped
/// without any output.
///
/// Every emission method is `#[track_caller]`, so when the writer reports the
/// caller's file and line ([`Flags::SHORT_FILE`] or [`Flags::LONG_FILE`]) the
/// location is the code that called the logger, not this crate.
///
/// # Examples
///
/// ```
/// use logging::{Flags, Logger, Priority};
///
/// let logger = Logger::new(Vec::new(), "", Priority::WARN, Flags::NONE);
/// logger.info("hello");
/// logger.error("boom");
/// logging::warnf!(logger, "{} retries left", 2);
///
/// assert_eq!(logger.into_inner(), b"ERROR: boom\nWARNING: 2 retries left\n".to_vec());
/// ```
pub struct Logger<W> {
    writer: LineWriter<W>,
    priority: Priority,
}

impl<W> Logger<W> {
    /// Creates a logger writing to `writer` with the given prefix, threshold,
    /// and header flags. No validation is performed on `priority`.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, priority: Priority, flags: Flags) -> Self {
        Self::from_line_writer(LineWriter::new(writer, prefix, flags), priority)
    }

    /// Wraps an existing [`LineWriter`].
    #[must_use]
    pub const fn from_line_writer(writer: LineWriter<W>, priority: Priority) -> Self {
        Self { writer, priority }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Reports whether a message of `priority` would be written.
    #[must_use]
    pub const fn enabled(&self, priority: Priority) -> bool {
        self.priority.allows(priority)
    }

    /// Borrows the line writer.
    #[must_use]
    pub const fn writer(&self) -> &LineWriter<W> {
        &self.writer
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Labels and writes `message` when `priority` passes the threshold.
    ///
    /// Write failures are the writer's concern and are not reported.
    pub(crate) fn emit_at(
        &self,
        priority: Priority,
        call_site: CallSite<'_>,
        message: &dyn fmt::Display,
    ) {
        if !self.enabled(priority) {
            return;
        }
        let line = format!("{}{message}", priority.label());
        let _ = self.writer.output(call_site, &line);
    }

    #[track_caller]
    fn with_priority_above(&self, priority: Priority, message: &dyn fmt::Display) {
        self.emit_at(priority, CallSite::caller(), message);
    }

    #[track_caller]
    fn unconditional(&self, message: &str) {
        let _ = self.writer.output(CallSite::caller(), message);
        let _ = self.writer.flush();
    }

    /// Logs `message` at [`Priority::EMERG`].
    #[track_caller]
    pub fn emerg(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::EMERG, &message);
    }

    /// Logs formatted arguments at [`Priority::EMERG`]. See [`emergf!`](crate::emergf).
    #[track_caller]
    pub fn emergf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::EMERG, &args);
    }

    /// Logs `message` at [`Priority::ALERT`].
    #[track_caller]
    pub fn alert(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::ALERT, &message);
    }

    /// Logs formatted arguments at [`Priority::ALERT`]. See [`alertf!`](crate::alertf).
    #[track_caller]
    pub fn alertf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::ALERT, &args);
    }

    /// Logs `message` at [`Priority::CRIT`].
    #[track_caller]
    pub fn crit(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::CRIT, &message);
    }

    /// Logs formatted arguments at [`Priority::CRIT`]. See [`critf!`](crate::critf).
    #[track_caller]
    pub fn critf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::CRIT, &args);
    }

    /// Logs `message` at [`Priority::ERROR`].
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::ERROR, &message);
    }

    /// Logs formatted arguments at [`Priority::ERROR`]. See [`errorf!`](crate::errorf).
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::ERROR, &args);
    }

    /// Logs `message` at [`Priority::WARN`].
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::WARN, &message);
    }

    /// Logs formatted arguments at [`Priority::WARN`]. See [`warnf!`](crate::warnf).
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::WARN, &args);
    }

    /// Logs `message` at [`Priority::NOTICE`].
    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::NOTICE, &message);
    }

    /// Logs formatted arguments at [`Priority::NOTICE`]. See [`noticef!`](crate::noticef).
    #[track_caller]
    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::NOTICE, &args);
    }

    /// Logs `message` at [`Priority::INFO`].
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::INFO, &message);
    }

    /// Logs formatted arguments at [`Priority::INFO`]. See [`infof!`](crate::infof).
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::INFO, &args);
    }

    /// Logs `message` at [`Priority::DEBUG`].
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.with_priority_above(Priority::DEBUG, &message);
    }

    /// Logs formatted arguments at [`Priority::DEBUG`]. See [`debugf!`](crate::debugf).
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.with_priority_above(Priority::DEBUG, &args);
    }

    /// Writes `message` without a label, then exits the process with status 1.
    ///
    /// The threshold is ignored. Destructors on the current and other threads'
    /// stacks do not run.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.unconditional(&message.to_string());
        process::exit(FATAL_EXIT_CODE)
    }

    /// Formatting sibling of [`fatal`](Self::fatal). See [`fatalf!`](crate::fatalf).
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args)
    }

    /// Writes `message` without a label, then panics with the message as the
    /// payload.
    ///
    /// The threshold is ignored. The payload is a [`String`], so
    /// [`std::panic::catch_unwind`] callers can downcast it.
    ///
    /// ```
    /// use logging::{Flags, Logger, Priority};
    ///
    /// let logger = Logger::new(Vec::new(), "", Priority::EMERG, Flags::NONE);
    /// let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    ///     logger.panic("corrupt index");
    /// }))
    /// .expect_err("panic propagates");
    ///
    /// assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("corrupt index"));
    /// assert_eq!(logger.into_inner(), b"corrupt index\n".to_vec());
    /// ```
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.unconditional(&message);
        std::panic::panic_any(message)
    }

    /// Formatting sibling of [`panic`](Self::panic). See [`panicf!`](crate::panicf).
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(args)
    }
}

impl<W> fmt::Debug for Logger<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("priority", &self.priority)
            .field("writer", &self.writer)
            .finish()
    }
}
