use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Relay -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Relay -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Relay -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Relay -- ", "{}", message);
    }
}
