#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled logging facade modelled on syslog priorities. A
//! [`Logger`] wraps a [`LineWriter`] with a fixed [`Priority`] threshold:
//! messages at least as severe as the threshold are written with a label such
//! as `ERROR: ` in front, everything else is dropped silently.
//!
//! # Design
//!
//! Every per-level entry point funnels through one private gate that compares
//! the call's priority against the threshold and forwards `<label><message>`
//! to the line writer. Each level has a print form taking any
//! [`Display`](std::fmt::Display) value and a format form taking
//! [`fmt::Arguments`](std::fmt::Arguments), wrapped by the [`debugf!`]-style
//! macros. [`Logger::fatal`] and [`Logger::panic`] bypass the gate and the
//! label entirely, write their message, and then exit the process or unwind.
//!
//! The line writer owns prefix and header formatting (timestamps, caller file
//! and line). All emission methods are `#[track_caller]`, so the reported
//! location is the user's call site.
//!
//! # Invariants
//!
//! - The threshold is fixed at construction; there are no setters.
//! - A filtered call produces no output and no side effect.
//! - Identical calls always produce identical gating decisions.
//! - [`Logger::fatal`] and [`Logger::panic`] always write, whatever the
//!   threshold.
//!
//! # Errors
//!
//! Emission never reports errors. Write failures are left to the writer and
//! ignored by the gate. Parsing a [`Priority`] reports [`ParsePriorityError`].
//!
//! # Examples
//!
//! ```
//! use logging::{Flags, Logger, Priority};
//!
//! let logger = Logger::new(Vec::new(), "", Priority::WARN, Flags::NONE);
//! logger.info("hello");
//! logger.error("boom");
//!
//! let debug = Logger::new(Vec::new(), "", Priority::DEBUG, Flags::NONE);
//! logging::debugf!(debug, "x={}", 5);
//!
//! assert_eq!(logger.into_inner(), b"ERROR: boom\n".to_vec());
//! assert_eq!(debug.into_inner(), b"DEBUG: x=5\n".to_vec());
//! ```
//!
//! # See also
//!
//! - `logging-sink` for the line writer and its header [`Flags`].

mod config;
mod logger;
mod macros;
mod priority;
mod spaced;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use logger::{FATAL_EXIT_CODE, Logger};
pub use logging_sink::{CallSite, Flags, LineWriter, ParseFlagsError};
pub use priority::{ParsePriorityError, Priority};
pub use spaced::Spaced;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{PriorityLayer, init_tracing};
