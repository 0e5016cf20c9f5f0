use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under the `chat` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "chat", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "chat", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "chat", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "chat", "{}", message);
    }
}
