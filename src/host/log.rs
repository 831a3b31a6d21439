use tracing::{debug, error, info};

/// Logging port, one method per severity the integration uses.
pub trait Logger {
    fn info(&self, message: &str, detail: &str);
    fn verbose(&self, message: &str, detail: &str);
    fn error(&self, message: &str, detail: &str);
}

/// [`Logger`] that forwards to `tracing`; verbose lines are emitted at DEBUG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, detail: &str) {
        info!(detail, "{}", message);
    }

    fn verbose(&self, message: &str, detail: &str) {
        debug!(detail, "{}", message);
    }

    fn error(&self, message: &str, detail: &str) {
        error!(detail, "{}", message);
    }
}
