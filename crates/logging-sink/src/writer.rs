//! crates/logging-sink/src/writer.rs
//! Line writer that renders headers and serialises output between threads.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::call_site::CallSite;
use crate::flags::Flags;

/// Writer that emits one complete line per [`output`](Self::output) call.
///
/// The header layout is `[prefix][date ][time[.micros] ][file:line: ][prefix]`
/// followed by the message and a newline, with the prefix appearing in only
/// one of the two positions depending on [`Flags::MSG_PREFIX`].
///
/// # Examples
///
/// Report the short file name of the caller:
///
/// ```
/// use logging_sink::{CallSite, Flags, LineWriter};
///
/// let writer = LineWriter::new(Vec::new(), "", Flags::SHORT_FILE);
/// writer.output(CallSite::new("src/jobs/queue.rs", 41), "stalled")?;
///
/// assert_eq!(writer.into_inner(), b"queue.rs:41: stalled\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Place the prefix right before the message:
///
/// ```
/// use logging_sink::{CallSite, Flags, LineWriter};
///
/// let writer = LineWriter::new(Vec::new(), "[db] ", Flags::SHORT_FILE | Flags::MSG_PREFIX);
/// writer.output(CallSite::new("pool.rs", 3), "connected")?;
///
/// assert_eq!(writer.into_inner(), b"pool.rs:3: [db] connected\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineWriter<W> {
    prefix: String,
    flags: Flags,
    state: Mutex<State<W>>,
}

struct State<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W> LineWriter<W> {
    /// Creates a writer that prefixes every line with `prefix` and renders
    /// the metadata selected by `flags`.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            state: Mutex::new(State {
                writer,
                scratch: Vec::new(),
            }),
        }
    }

    /// Returns the prefix written on every line.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the configured header flags.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Runs `f` with exclusive access to the underlying writer.
    ///
    /// Lines emitted from other threads wait until `f` returns.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state.writer)
    }

    /// Consumes the line writer and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn now(&self) -> OffsetDateTime {
        if self.flags.contains(Flags::UTC) {
            OffsetDateTime::now_utc()
        } else {
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
        }
    }

    fn render_header(
        &self,
        buffer: &mut Vec<u8>,
        now: Option<OffsetDateTime>,
        call_site: CallSite<'_>,
    ) -> io::Result<()> {
        let flags = self.flags;
        if !flags.contains(Flags::MSG_PREFIX) {
            buffer.extend_from_slice(self.prefix.as_bytes());
        }

        if let Some(now) = now {
            if flags.contains(Flags::DATE) {
                now.format_into(&mut *buffer, format_description!("[year]/[month]/[day] "))
                    .map_err(io::Error::other)?;
            }
            if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
                now.format_into(&mut *buffer, format_description!("[hour]:[minute]:[second]"))
                    .map_err(io::Error::other)?;
                if flags.contains(Flags::MICROSECONDS) {
                    now.format_into(&mut *buffer, format_description!(".[subsecond digits:6]"))
                        .map_err(io::Error::other)?;
                }
                buffer.push(b' ');
            }
        }

        if flags.wants_call_site() {
            let file = if flags.contains(Flags::SHORT_FILE) {
                call_site.short_file()
            } else {
                call_site.file()
            };
            write!(buffer, "{file}:{}: ", call_site.line())?;
        }

        if flags.contains(Flags::MSG_PREFIX) {
            buffer.extend_from_slice(self.prefix.as_bytes());
        }
        Ok(())
    }

    fn render_line(
        &self,
        buffer: &mut Vec<u8>,
        now: Option<OffsetDateTime>,
        call_site: CallSite<'_>,
        message: &str,
    ) -> io::Result<()> {
        buffer.clear();
        self.render_header(buffer, now, call_site)?;
        buffer.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            buffer.push(b'\n');
        }
        Ok(())
    }
}

impl<W> LineWriter<W>
where
    W: Write,
{
    /// Writes `message` as one line attributed to `call_site`.
    ///
    /// The timestamp is sampled before the writer lock is taken. The rendered
    /// line reaches the underlying writer through a single
    /// [`write_all`](Write::write_all) call.
    pub fn output(&self, call_site: CallSite<'_>, message: &str) -> io::Result<()> {
        let now = self.flags.wants_timestamp().then(|| self.now());

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let State { writer, scratch } = &mut *state;
        self.render_line(scratch, now, call_site, message)?;
        writer.write_all(scratch.as_slice())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.with_writer(Write::flush)
    }
}

impl<W> fmt::Debug for LineWriter<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .field("writer", &state.writer)
            .finish()
    }
}
