//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the priority gate.
//!
//! [`PriorityLayer`] is a tracing-subscriber layer that converts each event's
//! level into a [`Priority`], extracts the `message` field, and hands the
//! result to a shared [`Logger`]. The logger's threshold decides whether the
//! event is written, exactly as for direct calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Flags, Logger, Priority, init_tracing};
//!
//! let logger = Arc::new(Logger::new(std::io::stderr(), "app: ", Priority::INFO, Flags::STD));
//! init_tracing(logger)?;
//!
//! tracing::warn!("cache miss rate {}", 0.4);
//! ```

use std::io::Write;
use std::sync::Arc;

use logging_sink::CallSite;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::logger::Logger;
use crate::priority::Priority;

/// A tracing layer that routes events through a [`Logger`].
pub struct PriorityLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> PriorityLayer<W> {
    /// Creates a layer that writes through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are routed to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger<W>> {
        &self.logger
    }

    /// Map a tracing level to a priority. `TRACE` folds into `DEBUG`.
    #[must_use]
    pub const fn priority_for(level: &Level) -> Priority {
        match *level {
            Level::ERROR => Priority::ERROR,
            Level::WARN => Priority::WARN,
            Level::INFO => Priority::INFO,
            Level::DEBUG | Level::TRACE => Priority::DEBUG,
        }
    }
}

impl<S, W> Layer<S> for PriorityLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let priority = Self::priority_for(metadata.level());
        if !self.logger.enabled(priority) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let call_site = CallSite::new(
            metadata.file().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
        );
        self.logger.emit_at(priority, call_site, &message);
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a [`PriorityLayer`] over `logger` as the global default subscriber.
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing<W>(logger: Arc<Logger<W>>) -> Result<(), TryInitError>
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(PriorityLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::Flags;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn level_mapping() {
        assert_eq!(PriorityLayer::<Vec<u8>>::priority_for(&Level::ERROR), Priority::ERROR);
        assert_eq!(PriorityLayer::<Vec<u8>>::priority_for(&Level::WARN), Priority::WARN);
        assert_eq!(PriorityLayer::<Vec<u8>>::priority_for(&Level::INFO), Priority::INFO);
        assert_eq!(PriorityLayer::<Vec<u8>>::priority_for(&Level::DEBUG), Priority::DEBUG);
        assert_eq!(PriorityLayer::<Vec<u8>>::priority_for(&Level::TRACE), Priority::DEBUG);
    }

    #[test]
    fn events_pass_through_the_gate() {
        let logger = Arc::new(Logger::new(Vec::new(), "", Priority::WARN, Flags::NONE));
        let subscriber = tracing_subscriber::registry().with(PriorityLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("filtered");
            tracing::warn!("disk at {}%", 91);
            tracing::error!(code = 7, "failed");
        });

        let output = String::from_utf8(logger.writer().with_writer(|buffer| buffer.clone()))
            .expect("utf-8");
        assert_eq!(output, "WARNING: disk at 91%\nERROR: failed\n");
    }

    #[test]
    fn events_report_their_own_call_site() {
        let logger = Arc::new(Logger::new(Vec::new(), "", Priority::DEBUG, Flags::SHORT_FILE));
        let subscriber = tracing_subscriber::registry().with(PriorityLayer::new(Arc::clone(&logger)));

        let line = tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("here");
            line!() - 1
        });

        let output = String::from_utf8(logger.writer().with_writer(|buffer| buffer.clone()))
            .expect("utf-8");
        assert_eq!(output, format!("tracing_bridge.rs:{line}: DEBUG: here\n"));
    }

    #[test]
    fn events_without_message_are_skipped() {
        let logger = Arc::new(Logger::new(Vec::new(), "", Priority::DEBUG, Flags::NONE));
        let subscriber = tracing_subscriber::registry().with(PriorityLayer::new(Arc::clone(&logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(bytes = 10);
        });

        assert!(logger.writer().with_writer(|buffer| buffer.is_empty()));
    }
}
