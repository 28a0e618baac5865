#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the line-oriented writer that the `logging` crate
//! delegates final byte production to. A [`LineWriter`] owns an
//! [`std::io::Write`] implementor together with a prefix string and a set of
//! [`Flags`] that control the metadata written in front of every line
//! (date, time, microseconds, and the caller's file and line).
//!
//! # Design
//!
//! Each call to [`LineWriter::output`] renders one complete line into a
//! scratch buffer that is reused across calls, then hands the buffer to the
//! underlying writer with a single `write_all`. Rendering and writing happen
//! while the writer's mutex is held, so a [`LineWriter`] can be shared between
//! threads without lines being interleaved.
//!
//! # Invariants
//!
//! - Every emitted line ends with exactly one `\n`; a message that already
//!   ends with a newline does not receive a second one.
//! - [`Flags::SHORT_FILE`] takes precedence over [`Flags::LONG_FILE`].
//! - [`Flags::MSG_PREFIX`] moves the prefix from the start of the line to the
//!   position right before the message.
//!
//! # Errors
//!
//! [`LineWriter::output`] surfaces the [`std::io::Error`] returned by the
//! underlying writer unchanged. Parsing [`Flags`] from text reports
//! [`ParseFlagsError`].
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CallSite, Flags, LineWriter};
//!
//! let writer = LineWriter::new(Vec::new(), "app: ", Flags::NONE);
//! writer.output(CallSite::new("src/main.rs", 7), "ready")?;
//! writer.output(CallSite::new("src/main.rs", 8), "done\n")?;
//!
//! assert_eq!(writer.into_inner(), b"app: ready\napp: done\n".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `logging` crate for the priority gate built on top of [`LineWriter`].

mod call_site;
mod flags;
mod writer;

pub use call_site::CallSite;
pub use flags::{Flags, ParseFlagsError};
pub use writer::LineWriter;
