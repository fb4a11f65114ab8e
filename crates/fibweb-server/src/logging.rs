//! Request logging.
//!
//! Handlers never call the global logger directly: they report a
//! [`RequestEvent`] to the [`RequestLogger`] held in router state. The binary
//! installs [`TracingLogger`]; tests can install a recorder instead.

use fibweb_core::CountError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "fibweb_server=info,info";

/// Outcome of one handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEvent {
    /// A sequence of `count` terms was returned.
    Served { count: i64 },
    /// The `COUNT` input was rejected.
    Rejected { error: CountError },
    /// A path other than `/fib` was requested.
    UnknownPath { path: String },
}

/// Sink for per-request log events.
pub trait RequestLogger: Send + Sync {
    fn log(&self, event: &RequestEvent);
}

/// Forwards request events to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log(&self, event: &RequestEvent) {
        match event {
            RequestEvent::Served { count } => {
                tracing::info!(count, "Returning Fibonacci sequence");
            }
            RequestEvent::Rejected {
                error: CountError::Unreadable,
            } => {
                tracing::info!("Unable to retrieve COUNT input");
            }
            RequestEvent::Rejected {
                error: CountError::NotPositive { count },
            } => {
                tracing::info!(count, "Count input was negative or zero");
            }
            RequestEvent::Rejected {
                error: CountError::Overflow { count, max },
            } => {
                tracing::info!(count, max, "Calculation would overflow a 64bit integer");
            }
            RequestEvent::UnknownPath { path } => {
                tracing::info!(path = %path, "Received request to non-supported path");
            }
        }
    }
}

/// Installs the process-wide subscriber.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Must be called at
/// most once per process.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_logger_accepts_every_event() {
        // No subscriber installed; events are dropped without panicking.
        let logger = TracingLogger;
        logger.log(&RequestEvent::Served { count: 5 });
        logger.log(&RequestEvent::Rejected {
            error: CountError::Unreadable,
        });
        logger.log(&RequestEvent::Rejected {
            error: CountError::NotPositive { count: 0 },
        });
        logger.log(&RequestEvent::Rejected {
            error: CountError::Overflow { count: 94, max: 93 },
        });
        logger.log(&RequestEvent::UnknownPath {
            path: "/foo".to_string(),
        });
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
