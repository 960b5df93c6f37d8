use std::fmt;
use std::sync::Arc;

/// Sink for human-readable request/response trace lines.
///
/// Lines include request URLs, request bodies, and response bodies, so only install a
/// logger where message contents may be recorded.
#[derive(Clone)]
pub struct DebugLogger {
    sink: Arc<dyn Fn(&str) + Send + Sync>,
}

impl DebugLogger {
    /// Wrap a closure receiving each trace line.
    pub fn new(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Forward trace lines to `tracing` at `DEBUG` level under the `worldsms` target.
    pub fn tracing() -> Self {
        Self::new(|line| tracing::debug!(target: "worldsms", "{line}"))
    }

    pub(crate) fn log(&self, line: &str) {
        (self.sink)(line);
    }
}

impl fmt::Debug for DebugLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DebugLogger")
    }
}
